//! Request and result types for directory activities.
//!
//! Shared between the activities and the API layer. Pure data, no I/O.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValidationError;
use super::types::{Department, Employee, EmployeeStatus};
use crate::serde::{deserialize_forward_flag, deserialize_optional_string};
use crate::storage::Item;

/// Request payload for creating a department.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<String>,
    #[serde(default)]
    pub dept_name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_status: Option<String>,
}

impl CreateDepartmentRequest {
    /// Create a new request with just a department name.
    pub fn new(dept_name: impl Into<String>) -> Self {
        Self {
            dept_name: dept_name.into(),
            ..Self::default()
        }
    }

    /// Set an explicit department ID.
    pub fn with_dept_id(mut self, dept_id: impl Into<String>) -> Self {
        self.dept_id = Some(dept_id.into());
        self
    }

    /// Set the department status.
    pub fn with_dept_status(mut self, status: impl Into<String>) -> Self {
        self.dept_status = Some(status.into());
        self
    }

    /// Convert into a Department, generating an ID if none was supplied.
    pub fn into_department(self) -> Department {
        let dept_id = self.dept_id.unwrap_or_else(|| Uuid::new_v4().to_string());
        Department {
            dept_id,
            dept_name: self.dept_name,
            dept_status: self.dept_status,
        }
    }
}

/// Result of a successful department creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDepartmentResult {
    pub department: Department,
}

/// Request payload for creating an employee.
///
/// The employee ID is always generated by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub dept_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub dept_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub hire_date: Option<String>,
    /// Defaults to `Active` when absent.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub employee_status: Option<String>,
}

impl CreateEmployeeRequest {
    /// Create a new request with the required names.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    /// Set the job title.
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    /// Set the employee status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.employee_status = Some(status.into());
        self
    }

    /// Convert into an Employee with a freshly generated ID.
    ///
    /// Fails if the status is not a known value.
    pub fn into_employee(self) -> Result<Employee, ValidationError> {
        let status = match self.employee_status.as_deref() {
            Some(s) => s.parse()?,
            None => EmployeeStatus::Active,
        };

        Ok(Employee {
            employee_id: Uuid::new_v4().to_string(),
            employee_status: status,
            first_name: self.first_name,
            last_name: self.last_name,
            job_title: self.job_title,
            email: self.email,
            phone_number: self.phone_number,
            dept_id: self.dept_id,
            dept_name: self.dept_name,
            hire_date: self.hire_date,
            extra: Item::new(),
        })
    }
}

/// Result of a successful employee creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeResult {
    pub employee: Employee,
}

/// Query for one page of active employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListActiveEmployeesRequest {
    /// Exclusive cursor: the last employee ID seen. None starts at the edge
    /// of the index in the requested direction.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub start_key: Option<String>,
    #[serde(default = "default_forward", deserialize_with = "deserialize_forward_flag")]
    pub forward: bool,
}

fn default_forward() -> bool {
    true
}

impl Default for ListActiveEmployeesRequest {
    fn default() -> Self {
        Self {
            start_key: None,
            forward: true,
        }
    }
}

impl ListActiveEmployeesRequest {
    /// Page forward from the given cursor.
    pub fn after(start_key: impl Into<String>) -> Self {
        Self {
            start_key: Some(start_key.into()),
            forward: true,
        }
    }

    /// Page backward from the given cursor.
    pub fn before(start_key: impl Into<String>) -> Self {
        Self {
            start_key: Some(start_key.into()),
            forward: false,
        }
    }
}

/// One page of active employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListActiveEmployeesResult {
    pub employees: Vec<Employee>,
    /// ID of the last employee in the page; pass it back as `start_key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_key: Option<String>,
}

impl ListActiveEmployeesResult {
    pub fn from_page(employees: Vec<Employee>) -> Self {
        let last_key = employees.last().map(|e| e.employee_id.clone());
        Self {
            employees,
            last_key,
        }
    }
}
