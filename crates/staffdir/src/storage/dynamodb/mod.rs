//! DynamoDB record store.
//!
//! Implements [`RecordStore`](staffdir_core::storage::RecordStore) with
//! `aws-sdk-dynamodb`. Items are translated between JSON values and
//! `AttributeValue`s so the access layer never sees SDK types.

mod conversions;
mod error;
mod keys;
mod store;

pub use store::DynamoDbStore;
