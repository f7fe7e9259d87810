//! DynamoDB key construction.
//!
//! Pure functions; all keys in the directory schema are string attributes.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use staffdir_core::storage::{IndexQuery, RepositoryError, TableSchema};

/// Primary key map for a GetItem request.
pub fn primary_key(table: &TableSchema, key: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(
        table.partition_key.to_string(),
        AttributeValue::S(key.to_string()),
    )])
}

/// Exclusive start key for resuming an index query after `cursor`.
///
/// DynamoDB expects the index keys plus the table key of the last item
/// read. The cursor only carries the index sort key, so the index must be
/// sorted by the table key.
pub fn exclusive_start_key(
    query: &IndexQuery,
    cursor: &str,
) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    if query.index.sort_key != query.table.partition_key {
        return Err(RepositoryError::InvalidData(format!(
            "Index {} is not sorted by the key of table {}; cannot resume after a cursor",
            query.index.name, query.table.name
        )));
    }

    Ok(HashMap::from([
        (
            query.index.partition_key.to_string(),
            AttributeValue::S(query.partition_value.clone()),
        ),
        (
            query.index.sort_key.to_string(),
            AttributeValue::S(cursor.to_string()),
        ),
    ]))
}
