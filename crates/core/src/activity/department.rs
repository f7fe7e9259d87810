use crate::directory::{
    validate_department, CreateDepartmentRequest, CreateDepartmentResult, Department,
    ValidationError,
};
use crate::storage::{DepartmentRepository, RepositoryError};

use super::ActivityError;

/// Creates a department if its ID is not already taken.
///
/// The name is validated first; then the ID (supplied or generated) is
/// looked up and the request is rejected if a record already exists.
pub async fn create_department(
    repo: &dyn DepartmentRepository,
    request: CreateDepartmentRequest,
) -> Result<CreateDepartmentResult, ActivityError> {
    let department = request.into_department();
    validate_department(&department)?;

    if repo.get_department(&department.dept_id).await?.is_some() {
        return Err(ValidationError::InvalidAttributeValue(format!(
            "Department ID [{}] is already taken",
            department.dept_id
        ))
        .into());
    }

    repo.save_department(&department).await?;

    Ok(CreateDepartmentResult { department })
}

/// Gets a department, turning absence into `NotFound`.
pub async fn get_department(
    repo: &dyn DepartmentRepository,
    dept_id: &str,
) -> Result<Department, ActivityError> {
    repo.get_department(dept_id).await?.ok_or_else(|| {
        RepositoryError::NotFound {
            entity_type: "Department",
            id: dept_id.to_string(),
        }
        .into()
    })
}
