//! Fixed storage schema for directory records.

use crate::storage::{IndexSchema, TableSchema};

pub const DEFAULT_EMPLOYEES_TABLE: &str = "employees";
pub const DEFAULT_DEPARTMENTS_TABLE: &str = "departments";

/// Name of the secondary index over `(employeeStatus, employeeId)`.
pub const EMPLOYEE_STATUS_INDEX: &str = "EmployeeStatusIndex";

/// Employees table, keyed by `employeeId`.
pub fn employees_table(name: impl Into<String>) -> TableSchema {
    TableSchema::new(name, "employeeId")
}

/// Departments table, keyed by `deptId`.
pub fn departments_table(name: impl Into<String>) -> TableSchema {
    TableSchema::new(name, "deptId")
}

/// Status index on the employees table.
pub fn employee_status_index() -> IndexSchema {
    IndexSchema::new(EMPLOYEE_STATUS_INDEX, "employeeStatus", "employeeId")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_index_sorts_by_table_key() {
        let table = employees_table(DEFAULT_EMPLOYEES_TABLE);
        let index = employee_status_index();

        assert_eq!(index.sort_key, table.partition_key);
        assert_eq!(index.partition_key, "employeeStatus");
    }
}
