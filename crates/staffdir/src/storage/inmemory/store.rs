//! In-memory record store implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use staffdir_core::storage::{
    IndexQuery, Item, RecordStore, RepositoryError, Result, ScanDirection, TableSchema,
};

type Table = BTreeMap<String, Item>;

/// In-memory storage backend.
///
/// Tables are created on first write. Reads are always consistent, which
/// satisfies both consistency levels.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Returns true if `sort_key` lies strictly past the cursor in `direction`.
fn is_past_cursor(sort_key: &str, cursor: Option<&str>, direction: ScanDirection) -> bool {
    match (cursor, direction) {
        (None, _) => true,
        (Some(cursor), ScanDirection::Forward) => sort_key > cursor,
        (Some(cursor), ScanDirection::Backward) => sort_key < cursor,
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn get_item(&self, table: &TableSchema, key: &str) -> Result<Option<Item>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(&table.name)
            .and_then(|rows| rows.get(key))
            .cloned())
    }

    async fn put_item(&self, table: &TableSchema, item: Item) -> Result<()> {
        let key = table
            .key_of(&item)
            .ok_or_else(|| {
                RepositoryError::InvalidData(format!(
                    "Missing or invalid field: {}",
                    table.partition_key
                ))
            })?
            .to_string();

        tracing::debug!(table = %table.name, key = %key, "put item");

        let mut tables = self.tables.write().await;
        tables
            .entry(table.name.clone())
            .or_default()
            .insert(key, item);
        Ok(())
    }

    async fn query_index(&self, query: &IndexQuery) -> Result<Vec<Item>> {
        let tables = self.tables.read().await;
        let Some(rows) = tables.get(&query.table.name) else {
            return Ok(Vec::new());
        };

        // Items missing either index attribute are not part of the index.
        let mut indexed: Vec<(&str, &Item)> = rows
            .values()
            .filter_map(|item| {
                let partition = item.get(query.index.partition_key)?.as_str()?;
                if partition != query.partition_value {
                    return None;
                }
                let sort_key = item.get(query.index.sort_key)?.as_str()?;
                Some((sort_key, item))
            })
            .collect();

        indexed.sort_by(|a, b| a.0.cmp(b.0));
        if !query.direction.is_forward() {
            indexed.reverse();
        }

        let cursor = query.exclusive_start.as_deref();
        let page: Vec<Item> = indexed
            .into_iter()
            .filter(|(sort_key, _)| is_past_cursor(sort_key, cursor, query.direction))
            .take(query.limit)
            .map(|(_, item)| item.clone())
            .collect();

        tracing::debug!(
            table = %query.table.name,
            index = query.index.name,
            cursor = ?cursor,
            returned = page.len(),
            "query index"
        );

        Ok(page)
    }
}
