use thiserror::Error;

use crate::directory::ValidationError;
use crate::storage::{repository_error_to_status_code, RepositoryError};

/// Errors returned by activities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActivityError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Maps an [`ActivityError`] to an HTTP status code.
///
/// Validation failures are 400; storage errors use
/// [`repository_error_to_status_code`].
pub fn activity_error_to_status_code(error: &ActivityError) -> u16 {
    match error {
        ActivityError::Validation(_) => 400,
        ActivityError::Repository(e) => repository_error_to_status_code(e),
    }
}
