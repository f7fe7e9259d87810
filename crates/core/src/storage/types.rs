//! Store-neutral types for the record store adapter.
//!
//! Adapters translate these into their native request and value types, so
//! callers never handle store-specific value wrappers.

use serde_json::{Map, Value};

/// A stored record: attribute name to JSON value.
pub type Item = Map<String, Value>;

/// A table and the attribute holding its (string) primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub partition_key: &'static str,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, partition_key: &'static str) -> Self {
        Self {
            name: name.into(),
            partition_key,
        }
    }

    /// Returns the primary key value of an item, if present as a string.
    pub fn key_of<'a>(&self, item: &'a Item) -> Option<&'a str> {
        item.get(self.partition_key).and_then(Value::as_str)
    }
}

/// A secondary index: equality on `partition_key`, ordered by `sort_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSchema {
    pub name: &'static str,
    pub partition_key: &'static str,
    pub sort_key: &'static str,
}

impl IndexSchema {
    pub const fn new(
        name: &'static str,
        partition_key: &'static str,
        sort_key: &'static str,
    ) -> Self {
        Self {
            name,
            partition_key,
            sort_key,
        }
    }
}

/// Order in which an index range is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanDirection {
    /// Ascending by sort key.
    #[default]
    Forward,
    /// Descending by sort key.
    Backward,
}

impl ScanDirection {
    pub fn from_forward(forward: bool) -> Self {
        if forward {
            ScanDirection::Forward
        } else {
            ScanDirection::Backward
        }
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, ScanDirection::Forward)
    }
}

/// Read consistency requested from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadConsistency {
    /// Reads may miss very recent writes.
    #[default]
    Eventual,
    Strong,
}

/// A single page read over a secondary index.
///
/// Selects the items whose `index.partition_key` equals `partition_value`,
/// ordered by `index.sort_key` in `direction`, strictly after
/// `exclusive_start` when set, at most `limit` of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexQuery {
    pub table: TableSchema,
    pub index: IndexSchema,
    pub partition_value: String,
    pub exclusive_start: Option<String>,
    pub limit: usize,
    pub direction: ScanDirection,
    pub consistency: ReadConsistency,
}

impl IndexQuery {
    /// Default page size when no limit is set.
    pub const DEFAULT_LIMIT: usize = 100;

    /// Query `index` on `table` for items whose partition attribute equals `value`.
    pub fn new(table: TableSchema, index: IndexSchema, value: impl Into<String>) -> Self {
        Self {
            table,
            index,
            partition_value: value.into(),
            exclusive_start: None,
            limit: Self::DEFAULT_LIMIT,
            direction: ScanDirection::default(),
            consistency: ReadConsistency::default(),
        }
    }

    /// Resume strictly after the given sort key. Empty cursors are ignored.
    pub fn starting_after(mut self, cursor: Option<impl Into<String>>) -> Self {
        let cursor: Option<String> = cursor.map(Into::into);
        self.exclusive_start = cursor.filter(|c| !c.is_empty());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn direction(mut self, direction: ScanDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn consistency(mut self, consistency: ReadConsistency) -> Self {
        self.consistency = consistency;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const INDEX: IndexSchema = IndexSchema::new("ByColor", "color", "id");

    fn table() -> TableSchema {
        TableSchema::new("things", "id")
    }

    #[test]
    fn test_key_of() {
        let item = json!({"id": "T1", "color": "red"});
        let item = item.as_object().unwrap();
        assert_eq!(table().key_of(item), Some("T1"));

        let numeric = json!({"id": 7});
        assert_eq!(table().key_of(numeric.as_object().unwrap()), None);
    }

    #[test]
    fn test_query_defaults() {
        let query = IndexQuery::new(table(), INDEX, "red");

        assert_eq!(query.partition_value, "red");
        assert_eq!(query.exclusive_start, None);
        assert_eq!(query.limit, IndexQuery::DEFAULT_LIMIT);
        assert_eq!(query.direction, ScanDirection::Forward);
        assert_eq!(query.consistency, ReadConsistency::Eventual);
    }

    #[test]
    fn test_empty_cursor_is_ignored() {
        let query = IndexQuery::new(table(), INDEX, "red").starting_after(Some(""));
        assert_eq!(query.exclusive_start, None);

        let query = IndexQuery::new(table(), INDEX, "red").starting_after(Some("T9"));
        assert_eq!(query.exclusive_start.as_deref(), Some("T9"));
    }

    #[test]
    fn test_direction_from_flag() {
        assert_eq!(ScanDirection::from_forward(true), ScanDirection::Forward);
        assert_eq!(ScanDirection::from_forward(false), ScanDirection::Backward);
        assert!(!ScanDirection::Backward.is_forward());
    }
}
