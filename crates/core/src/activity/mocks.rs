//! Hand-written repository mocks for activity tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::directory::{Department, Employee};
use crate::storage::{DepartmentRepository, EmployeeRepository, RepositoryError, Result};

/// Department repository that answers `get_department` from a fixed map and
/// records every save.
#[derive(Default)]
pub(crate) struct MockDepartmentRepository {
    existing: HashMap<String, Department>,
    saved: Mutex<Vec<Department>>,
}

impl MockDepartmentRepository {
    pub fn with_existing(department: Department) -> Self {
        let mut existing = HashMap::new();
        existing.insert(department.dept_id.clone(), department);
        Self {
            existing,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Vec<Department> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl DepartmentRepository for MockDepartmentRepository {
    async fn get_department(&self, dept_id: &str) -> Result<Option<Department>> {
        Ok(self.existing.get(dept_id).cloned())
    }

    async fn save_department(&self, department: &Department) -> Result<()> {
        self.saved.lock().unwrap().push(department.clone());
        Ok(())
    }
}

/// Employee repository backed by a map, returning every active employee in
/// id order for listings (no paging).
#[derive(Default)]
pub(crate) struct MockEmployeeRepository {
    employees: Mutex<HashMap<String, Employee>>,
    calls: Mutex<Vec<(Option<String>, bool)>>,
}

impl MockEmployeeRepository {
    pub fn list_calls(&self) -> Vec<(Option<String>, bool)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self, employee_id: &str) -> Option<Employee> {
        self.employees.lock().unwrap().get(employee_id).cloned()
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn get_employee(&self, employee_id: &str) -> Result<Employee> {
        self.stored(employee_id).ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Employee",
            id: employee_id.to_string(),
        })
    }

    async fn list_active_employees(
        &self,
        start_key: Option<&str>,
        forward: bool,
    ) -> Result<Vec<Employee>> {
        self.calls
            .lock()
            .unwrap()
            .push((start_key.map(str::to_string), forward));

        let mut active: Vec<Employee> = self
            .employees
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.is_active())
            .cloned()
            .collect();
        active.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        Ok(active)
    }

    async fn create_employee(&self, employee: &Employee) -> Result<()> {
        self.employees
            .lock()
            .unwrap()
            .insert(employee.employee_id.clone(), employee.clone());
        Ok(())
    }
}
