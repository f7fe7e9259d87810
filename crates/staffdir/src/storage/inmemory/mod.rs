//! In-memory record store.
//!
//! Stores items in ordered maps wrapped in `Arc<RwLock<_>>` and emulates
//! secondary indexes by filtering and sorting on query. Useful for tests
//! and local development; nothing is persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use staffdir_core::dao::EmployeeDao;
//!
//! let store = Arc::new(InMemoryStore::new());
//! let employees = EmployeeDao::new(store, "employees");
//! ```

mod store;

pub use store::InMemoryStore;
