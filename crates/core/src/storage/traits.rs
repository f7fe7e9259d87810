use async_trait::async_trait;

use crate::directory::{Department, Employee};

use super::{IndexQuery, Item, Result, TableSchema};

/// Thin adapter over a key-value table store.
///
/// Store errors (timeouts, throttling, missing tables) are returned as-is;
/// implementations never retry.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Gets the item whose primary key equals `key`.
    async fn get_item(&self, table: &TableSchema, key: &str) -> Result<Option<Item>>;

    /// Writes an item, replacing any item with the same primary key.
    async fn put_item(&self, table: &TableSchema, item: Item) -> Result<()>;

    /// Reads one page from a secondary index.
    async fn query_index(&self, query: &IndexQuery) -> Result<Vec<Item>>;
}

/// Access layer for employee records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Gets an employee by ID, failing with `NotFound` if absent.
    async fn get_employee(&self, employee_id: &str) -> Result<Employee>;

    /// Gets one page of active employees strictly after `start_key`.
    async fn list_active_employees(
        &self,
        start_key: Option<&str>,
        forward: bool,
    ) -> Result<Vec<Employee>>;

    /// Creates or overwrites an employee.
    async fn create_employee(&self, employee: &Employee) -> Result<()>;
}

/// Access layer for department records.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Gets a department by ID. Absence is `Ok(None)`, not an error.
    async fn get_department(&self, dept_id: &str) -> Result<Option<Department>>;

    /// Creates or overwrites a department.
    async fn save_department(&self, department: &Department) -> Result<()>;
}
