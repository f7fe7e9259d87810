//! DynamoDB attribute conversion functions.
//!
//! Pure functions converting between JSON items and `AttributeValue` maps.
//! Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};
use staffdir_core::storage::{Item, RepositoryError};

// ============================================================================
// JSON -> DynamoDB
// ============================================================================

/// Convert a JSON item to a DynamoDB item.
pub fn item_to_attributes(item: Item) -> HashMap<String, AttributeValue> {
    item.into_iter()
        .map(|(name, value)| (name, value_to_attribute(value)))
        .collect()
}

/// Convert a single JSON value to an AttributeValue.
pub fn value_to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(values) => {
            AttributeValue::L(values.into_iter().map(value_to_attribute).collect())
        }
        Value::Object(map) => AttributeValue::M(item_to_attributes(map)),
    }
}

// ============================================================================
// DynamoDB -> JSON
// ============================================================================

/// Convert a DynamoDB item to a JSON item.
pub fn attributes_to_item(
    attributes: HashMap<String, AttributeValue>,
) -> Result<Item, RepositoryError> {
    attributes
        .into_iter()
        .map(|(name, value)| attribute_to_value(value).map(|v| (name, v)))
        .collect()
}

/// Convert a single AttributeValue to a JSON value.
///
/// Binary attributes have no JSON form and are rejected.
pub fn attribute_to_value(attribute: AttributeValue) -> Result<Value, RepositoryError> {
    match attribute {
        AttributeValue::S(s) => Ok(Value::String(s)),
        AttributeValue::N(n) => parse_number(&n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .into_iter()
            .map(attribute_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => attributes_to_item(map).map(Value::Object),
        AttributeValue::Ss(strings) => Ok(Value::Array(
            strings.into_iter().map(Value::String).collect(),
        )),
        AttributeValue::Ns(numbers) => numbers
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

/// Parse a DynamoDB number string, preferring integers.
fn parse_number(n: &str) -> Result<Number, RepositoryError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Number::from(u));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Invalid number: {}", n)))
}
