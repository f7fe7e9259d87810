use super::error::ValidationError;
use super::types::{Department, Employee};

const MAX_NAME_LENGTH: usize = 100;

/// Checks if a name is acceptable for departments and employees.
///
/// Names must be non-blank, at most 100 characters, and made of ASCII
/// letters, digits, spaces and the punctuation `- & . ' ,`.
pub fn is_valid_name(name: &str) -> bool {
    if name.trim().is_empty() || name.len() > MAX_NAME_LENGTH {
        return false;
    }

    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '&' | '.' | '\'' | ','))
}

/// Validates a department before it is saved.
pub fn validate_department(department: &Department) -> Result<(), ValidationError> {
    if department.dept_id.trim().is_empty() {
        return Err(ValidationError::InvalidAttributeValue(
            "Department ID cannot be empty".to_string(),
        ));
    }
    if !is_valid_name(&department.dept_name) {
        return Err(ValidationError::InvalidAttributeValue(format!(
            "Department name [{}] contains illegal characters",
            department.dept_name
        )));
    }
    Ok(())
}

/// Validates an employee before it is saved.
///
/// First and last name are required; the remaining profile fields are
/// stored as given.
pub fn validate_employee(employee: &Employee) -> Result<(), ValidationError> {
    if employee.employee_id.trim().is_empty() {
        return Err(ValidationError::InvalidAttributeValue(
            "Employee ID cannot be empty".to_string(),
        ));
    }

    for (field, value) in [
        ("first name", &employee.first_name),
        ("last name", &employee.last_name),
    ] {
        match value {
            Some(name) if is_valid_name(name) => {}
            Some(name) => {
                return Err(ValidationError::InvalidAttributeValue(format!(
                    "Employee {field} [{name}] contains illegal characters"
                )))
            }
            None => {
                return Err(ValidationError::InvalidAttributeValue(format!(
                    "Employee {field} is required"
                )))
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::EmployeeStatus;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("Josh"));
        assert!(is_valid_name("Research & Development"));
        assert!(is_valid_name("O'Brien"));
        assert!(is_valid_name("Sales, North-East"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name("dep@rtment"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name("quote\"d"));
        assert!(!is_valid_name(&"a".repeat(101)));
    }

    #[test]
    fn test_validate_department() {
        assert!(validate_department(&Department::new("1000", "Josh")).is_ok());
        assert!(validate_department(&Department::new("1000", "dep@rtment")).is_err());
        assert!(validate_department(&Department::new(" ", "Josh")).is_err());
    }

    #[test]
    fn test_validate_employee_requires_names() {
        let unnamed = Employee::new("E1", EmployeeStatus::Active);
        assert_eq!(
            validate_employee(&unnamed),
            Err(ValidationError::InvalidAttributeValue(
                "Employee first name is required".to_string()
            ))
        );

        let named = unnamed.with_name("Ada", "Lovelace");
        assert!(validate_employee(&named).is_ok());
    }

    #[test]
    fn test_validate_employee_rejects_bad_last_name() {
        let employee = Employee::new("E1", EmployeeStatus::Active).with_name("Ada", "L0ve!ace");
        assert!(validate_employee(&employee).is_err());
    }
}
