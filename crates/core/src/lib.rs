//! Core of the staffdir service.
//!
//! Pure domain types, validation, the store-adapter contract, the
//! employee/department access layer and the activities built on top of it.
//! Concrete store adapters live in the `staffdir` binary crate.

pub mod activity;
pub mod dao;
pub mod directory;
pub mod serde;
pub mod storage;
