use crate::directory::{
    validate_employee, CreateEmployeeRequest, CreateEmployeeResult, Employee,
    ListActiveEmployeesRequest, ListActiveEmployeesResult,
};
use crate::storage::EmployeeRepository;

use super::ActivityError;

/// Creates an employee with a generated ID.
pub async fn create_employee(
    repo: &dyn EmployeeRepository,
    request: CreateEmployeeRequest,
) -> Result<CreateEmployeeResult, ActivityError> {
    let employee = request.into_employee()?;
    validate_employee(&employee)?;

    repo.create_employee(&employee).await?;

    Ok(CreateEmployeeResult { employee })
}

/// Gets an employee by ID; a missing employee is `NotFound`.
pub async fn get_employee(
    repo: &dyn EmployeeRepository,
    employee_id: &str,
) -> Result<Employee, ActivityError> {
    Ok(repo.get_employee(employee_id).await?)
}

/// Gets one page of active employees and the cursor for the next page.
pub async fn list_active_employees(
    repo: &dyn EmployeeRepository,
    request: ListActiveEmployeesRequest,
) -> Result<ListActiveEmployeesResult, ActivityError> {
    let employees = repo
        .list_active_employees(request.start_key.as_deref(), request.forward)
        .await?;

    Ok(ListActiveEmployeesResult::from_page(employees))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::mocks::MockEmployeeRepository;
    use crate::directory::EmployeeStatus;
    use crate::storage::RepositoryError;

    #[tokio::test]
    async fn test_create_employee_stores_record() {
        let repo = MockEmployeeRepository::default();
        let request = CreateEmployeeRequest::new("Ada", "Lovelace").with_job_title("Analyst");

        let result = create_employee(&repo, request).await.unwrap();

        let stored = repo.stored(&result.employee.employee_id).unwrap();
        assert_eq!(stored, result.employee);
        assert_eq!(stored.employee_status, EmployeeStatus::Active);
        assert_eq!(stored.job_title.as_deref(), Some("Analyst"));
    }

    #[tokio::test]
    async fn test_create_employee_rejects_invalid_name() {
        let repo = MockEmployeeRepository::default();
        let request = CreateEmployeeRequest::new("Ad@", "Lovelace");

        let error = create_employee(&repo, request).await.unwrap_err();

        assert!(matches!(error, ActivityError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_employee_rejects_unknown_status() {
        let repo = MockEmployeeRepository::default();
        let request = CreateEmployeeRequest::new("Ada", "Lovelace").with_status("Furloughed");

        let error = create_employee(&repo, request).await.unwrap_err();

        assert!(matches!(error, ActivityError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_missing_employee() {
        let repo = MockEmployeeRepository::default();

        let error = get_employee(&repo, "E-404").await.unwrap_err();

        assert_eq!(
            error,
            ActivityError::Repository(RepositoryError::NotFound {
                entity_type: "Employee",
                id: "E-404".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_list_passes_cursor_and_direction() {
        let repo = MockEmployeeRepository::default();
        repo.create_employee(&Employee::new("E1", EmployeeStatus::Active))
            .await
            .unwrap();
        repo.create_employee(&Employee::new("E2", EmployeeStatus::Inactive))
            .await
            .unwrap();

        let result = list_active_employees(&repo, ListActiveEmployeesRequest::before("E9"))
            .await
            .unwrap();

        assert_eq!(repo.list_calls(), vec![(Some("E9".to_string()), false)]);
        assert_eq!(result.employees.len(), 1);
        assert_eq!(result.last_key.as_deref(), Some("E1"));
    }
}
