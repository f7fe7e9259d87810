use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use crate::storage::Item;

/// Employment status of an employee.
///
/// Stored as the partition key of the employee status index, so every
/// persisted employee carries one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    /// Returns the stored representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(EmployeeStatus::Active),
            "inactive" => Ok(EmployeeStatus::Inactive),
            _ => Err(ValidationError::InvalidAttributeValue(format!(
                "Unknown employee status: {s}"
            ))),
        }
    }
}

/// An employee record.
///
/// `employee_id` is the primary key and never changes after creation. The
/// profile fields are carried through storage untouched; attributes without
/// a named field are kept in `extra` so a read-then-save keeps them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    pub employee_status: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_name: Option<String>,
    /// Hire date as entered (ISO 8601 expected, not enforced).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(flatten)]
    pub extra: Item,
}

impl Employee {
    /// Creates an employee with the given ID and status and an empty profile.
    pub fn new(employee_id: impl Into<String>, status: EmployeeStatus) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_status: status,
            first_name: None,
            last_name: None,
            job_title: None,
            email: None,
            phone_number: None,
            dept_id: None,
            dept_name: None,
            hire_date: None,
            extra: Item::new(),
        }
    }

    /// Sets the first and last name.
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    /// Sets the job title.
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the department the employee belongs to.
    pub fn with_department(
        mut self,
        dept_id: impl Into<String>,
        dept_name: impl Into<String>,
    ) -> Self {
        self.dept_id = Some(dept_id.into());
        self.dept_name = Some(dept_name.into());
        self
    }

    /// Returns true if the employee shows up in the active listing.
    pub fn is_active(&self) -> bool {
        self.employee_status == EmployeeStatus::Active
    }
}

/// A department record keyed by `dept_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub dept_id: String,
    pub dept_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_status: Option<String>,
}

impl Department {
    pub fn new(dept_id: impl Into<String>, dept_name: impl Into<String>) -> Self {
        Self {
            dept_id: dept_id.into(),
            dept_name: dept_name.into(),
            dept_status: None,
        }
    }

    /// Sets the department status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.dept_status = Some(status.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!(
            "active".parse::<EmployeeStatus>().unwrap(),
            EmployeeStatus::Active
        );
        assert_eq!(
            " INACTIVE ".parse::<EmployeeStatus>().unwrap(),
            EmployeeStatus::Inactive
        );
        assert!("retired".parse::<EmployeeStatus>().is_err());
    }

    #[test]
    fn test_employee_serializes_camel_case_and_skips_absent_fields() {
        let employee = Employee::new("E1", EmployeeStatus::Active).with_name("Ada", "Lovelace");
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["employeeId"], "E1");
        assert_eq!(json["employeeStatus"], "Active");
        assert_eq!(json["firstName"], "Ada");
        assert!(json.get("jobTitle").is_none());
    }

    #[test]
    fn test_employee_builders_fill_profile() {
        let employee = Employee::new("E7", EmployeeStatus::Active)
            .with_email("ada@example.com")
            .with_department("D1", "Engineering");

        assert_eq!(employee.email.as_deref(), Some("ada@example.com"));
        assert_eq!(employee.dept_id.as_deref(), Some("D1"));
        assert_eq!(employee.dept_name.as_deref(), Some("Engineering"));
    }

    #[test]
    fn test_unknown_attributes_round_trip() {
        let stored = serde_json::json!({
            "employeeId": "E1",
            "employeeStatus": "Active",
            "firstName": "Ada",
            "officeLocation": "Nashville",
            "badge": {"floor": 3}
        });

        let employee: Employee = serde_json::from_value(stored.clone()).unwrap();
        assert_eq!(employee.first_name.as_deref(), Some("Ada"));
        assert_eq!(employee.extra.get("officeLocation").unwrap(), "Nashville");
        assert!(!employee.extra.contains_key("firstName"));

        assert_eq!(serde_json::to_value(&employee).unwrap(), stored);
    }

    #[test]
    fn test_department_builder() {
        let department = Department::new("D1", "Engineering").with_status("Active");

        assert_eq!(department.dept_id, "D1");
        assert_eq!(department.dept_name, "Engineering");
        assert_eq!(department.dept_status.as_deref(), Some("Active"));
    }
}
