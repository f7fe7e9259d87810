//! Activities: validate a request, call the access layer, shape a result.
//!
//! Each activity takes its repository as an argument, so the API layer and
//! tests can supply any implementation.

mod department;
mod employee;
mod error;

pub use department::{create_department, get_department};
pub use employee::{create_employee, get_employee, list_active_employees};
pub use error::{activity_error_to_status_code, ActivityError};

#[cfg(test)]
pub(crate) mod mocks;
