//! Access layer over a [`RecordStore`](crate::storage::RecordStore).
//!
//! The DAOs own the fixed schema (table key attributes, the status index)
//! and translate between records and store items. They take the store
//! handle explicitly; there is no global registry.

mod conversions;
mod department;
mod employee;

pub use conversions::{from_item, to_item};
pub use department::DepartmentDao;
pub use employee::{EmployeeDao, PAGE_SIZE};

#[cfg(test)]
pub(crate) mod testing;
