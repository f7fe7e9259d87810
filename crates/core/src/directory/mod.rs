mod error;
mod operations;
mod requests;
mod schema;
mod types;

pub use error::ValidationError;
pub use operations::{is_valid_name, validate_department, validate_employee};
pub use requests::{
    CreateDepartmentRequest, CreateDepartmentResult, CreateEmployeeRequest, CreateEmployeeResult,
    ListActiveEmployeesRequest, ListActiveEmployeesResult,
};
pub use schema::{
    departments_table, employee_status_index, employees_table, DEFAULT_DEPARTMENTS_TABLE,
    DEFAULT_EMPLOYEES_TABLE, EMPLOYEE_STATUS_INDEX,
};
pub use types::{Department, Employee, EmployeeStatus};
