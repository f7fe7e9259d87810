use std::sync::Arc;

use async_trait::async_trait;

use crate::directory::{departments_table, Department};
use crate::storage::{DepartmentRepository, RecordStore, Result, TableSchema};

use super::conversions::{from_item, to_item};

/// Department access layer over a record store.
///
/// Unlike [`EmployeeDao`](super::EmployeeDao), a missing record is reported
/// as `None` so callers can run their own existence checks.
#[derive(Clone)]
pub struct DepartmentDao {
    store: Arc<dyn RecordStore>,
    table: TableSchema,
}

impl DepartmentDao {
    /// Creates a DAO over the departments table with the given name.
    pub fn new(store: Arc<dyn RecordStore>, table_name: impl Into<String>) -> Self {
        Self {
            store,
            table: departments_table(table_name),
        }
    }
}

#[async_trait]
impl DepartmentRepository for DepartmentDao {
    async fn get_department(&self, dept_id: &str) -> Result<Option<Department>> {
        self.store
            .get_item(&self.table, dept_id)
            .await?
            .map(from_item)
            .transpose()
    }

    async fn save_department(&self, department: &Department) -> Result<()> {
        let item = to_item(department)?;
        self.store.put_item(&self.table, item).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::testing::RecordingStore;
    use crate::storage::RepositoryError;

    #[tokio::test]
    async fn test_missing_department_is_none() {
        let dao = DepartmentDao::new(Arc::new(RecordingStore::default()), "departments");

        assert_eq!(dao.get_department("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let dao = DepartmentDao::new(Arc::new(RecordingStore::default()), "departments");
        let department = Department::new("D1", "Engineering").with_status("Active");

        dao.save_department(&department).await.unwrap();

        assert_eq!(dao.get_department("D1").await.unwrap(), Some(department));
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let failure = RepositoryError::ConnectionFailed("dns error".to_string());
        let dao = DepartmentDao::new(
            Arc::new(RecordingStore::failing(failure.clone())),
            "departments",
        );

        assert_eq!(dao.get_department("D1").await.unwrap_err(), failure);
    }
}
