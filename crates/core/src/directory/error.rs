use thiserror::Error;

/// Errors raised while validating requests before they reach storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid attribute value: {0}")]
    InvalidAttributeValue(String),
}
