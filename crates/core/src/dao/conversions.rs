//! Conversions between domain records and store items.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::storage::{Item, RepositoryError, Result};

/// Convert a record into a store item.
pub fn to_item<T: Serialize>(record: &T) -> Result<Item> {
    match serde_json::to_value(record).map_err(|e| RepositoryError::Serialization(e.to_string()))? {
        Value::Object(item) => Ok(item),
        other => Err(RepositoryError::Serialization(format!(
            "Expected an object, got: {other}"
        ))),
    }
}

/// Convert a store item back into a record.
///
/// A stored item that does not decode is a server-side fault, reported as
/// `Serialization`.
pub fn from_item<T: DeserializeOwned>(item: Item) -> Result<T> {
    serde_json::from_value(Value::Object(item))
        .map_err(|e| RepositoryError::Serialization(e.to_string()))
}
