use std::sync::Arc;

use async_trait::async_trait;

use crate::directory::{employee_status_index, employees_table, Employee, EmployeeStatus};
use crate::storage::{
    EmployeeRepository, IndexQuery, IndexSchema, ReadConsistency, RecordStore, RepositoryError,
    Result, ScanDirection, TableSchema,
};

use super::conversions::{from_item, to_item};

/// Maximum number of employees returned by one listing call.
pub const PAGE_SIZE: usize = 20;

/// Employee access layer over a record store.
#[derive(Clone)]
pub struct EmployeeDao {
    store: Arc<dyn RecordStore>,
    table: TableSchema,
    status_index: IndexSchema,
}

impl EmployeeDao {
    /// Creates a DAO over the employees table with the given name.
    pub fn new(store: Arc<dyn RecordStore>, table_name: impl Into<String>) -> Self {
        Self {
            store,
            table: employees_table(table_name),
            status_index: employee_status_index(),
        }
    }

    /// Builds the status-index query for one page of active employees.
    fn active_page_query(&self, start_key: Option<&str>, forward: bool) -> IndexQuery {
        IndexQuery::new(
            self.table.clone(),
            self.status_index,
            EmployeeStatus::Active.as_str(),
        )
        .starting_after(start_key)
        .limit(PAGE_SIZE)
        .direction(ScanDirection::from_forward(forward))
        .consistency(ReadConsistency::Eventual)
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeDao {
    async fn get_employee(&self, employee_id: &str) -> Result<Employee> {
        match self.store.get_item(&self.table, employee_id).await? {
            Some(item) => from_item(item),
            None => Err(RepositoryError::NotFound {
                entity_type: "Employee",
                id: employee_id.to_string(),
            }),
        }
    }

    async fn list_active_employees(
        &self,
        start_key: Option<&str>,
        forward: bool,
    ) -> Result<Vec<Employee>> {
        let query = self.active_page_query(start_key, forward);
        let items = self.store.query_index(&query).await?;
        items.into_iter().map(from_item).collect()
    }

    async fn create_employee(&self, employee: &Employee) -> Result<()> {
        let item = to_item(employee)?;
        self.store.put_item(&self.table, item).await
    }
}
