//! Test doubles for the access layer.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::storage::{IndexQuery, Item, RecordStore, RepositoryError, Result, TableSchema};

/// Store double that keeps items in a map, records every index query and
/// answers queries with a canned page.
#[derive(Default)]
pub(crate) struct RecordingStore {
    items: Mutex<HashMap<(String, String), Item>>,
    queries: Mutex<Vec<IndexQuery>>,
    page: Mutex<Vec<Item>>,
    failure: Option<RepositoryError>,
}

impl RecordingStore {
    pub fn failing(error: RepositoryError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn with_page(page: Vec<Item>) -> Self {
        Self {
            page: Mutex::new(page),
            ..Self::default()
        }
    }

    pub fn queries(&self) -> Vec<IndexQuery> {
        self.queries.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecordStore for RecordingStore {
    async fn get_item(&self, table: &TableSchema, key: &str) -> Result<Option<Item>> {
        self.check()?;
        let items = self.items.lock().unwrap();
        Ok(items.get(&(table.name.clone(), key.to_string())).cloned())
    }

    async fn put_item(&self, table: &TableSchema, item: Item) -> Result<()> {
        self.check()?;
        let key = table
            .key_of(&item)
            .ok_or_else(|| RepositoryError::InvalidData("missing key".to_string()))?
            .to_string();
        self.items
            .lock()
            .unwrap()
            .insert((table.name.clone(), key), item);
        Ok(())
    }

    async fn query_index(&self, query: &IndexQuery) -> Result<Vec<Item>> {
        self.check()?;
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.page.lock().unwrap().clone())
    }
}
