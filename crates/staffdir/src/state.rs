//! Application state.
//!
//! Holds the access-layer trait objects shared by all request handlers. The
//! concrete record store is chosen by feature flag.

use std::sync::Arc;

use staffdir_core::dao::{DepartmentDao, EmployeeDao};
use staffdir_core::storage::{DepartmentRepository, EmployeeRepository, RecordStore};

use crate::config::Config;

/// Shared application state, cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    /// Employee access layer.
    pub employee_repo: Arc<dyn EmployeeRepository>,
    /// Department access layer.
    pub department_repo: Arc<dyn DepartmentRepository>,
}

impl AppState {
    /// Builds the access layer over a record store.
    pub fn with_store(store: Arc<dyn RecordStore>, config: &Config) -> Self {
        Self {
            employee_repo: Arc::new(EmployeeDao::new(
                store.clone(),
                config.employees_table.clone(),
            )),
            department_repo: Arc::new(DepartmentDao::new(
                store,
                config.departments_table.clone(),
            )),
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState backed by the in-memory store.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage; records are not persisted");
            Ok(Self::with_store(Arc::new(InMemoryStore::new()), config))
        }
    }

    #[cfg(test)]
    impl Default for AppState {
        fn default() -> Self {
            let config = Config {
                employees_table: "employees".to_string(),
                departments_table: "departments".to_string(),
                aws_endpoint_url: None,
                aws_region: "us-east-1".to_string(),
                request_timeout_seconds: 10,
            };
            Self::with_store(Arc::new(InMemoryStore::new()), &config)
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbStore;

    impl AppState {
        /// Creates AppState backed by DynamoDB.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = DynamoDbStore::connect(
                config.aws_endpoint_url.as_deref(),
                &config.aws_region,
            )
            .await;

            tracing::info!(
                endpoint = config.aws_endpoint_url.as_deref().unwrap_or("aws"),
                region = %config.aws_region,
                employees_table = %config.employees_table,
                departments_table = %config.departments_table,
                "Using DynamoDB storage"
            );

            Ok(Self::with_store(Arc::new(store), config))
        }
    }
}
