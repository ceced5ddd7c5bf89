//! Store Module
//!
//! The durable employee repository the service reads and writes through.
//! The service only sees the [`EmployeeStore`] trait; the in-memory
//! implementation backs the binary and the tests.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Employee, EmployeeId, NewEmployee};

pub use memory::InMemoryEmployeeStore;

// == Store Error ==
/// Failures originating in the backing store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A write violated a store constraint
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Any other store-side failure
    #[error("Store error: {0}")]
    Internal(String),
}

/// Convenience Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Employee Store ==
/// Repository of employee records, assumed durable and strongly consistent.
#[async_trait]
pub trait EmployeeStore: Send + Sync + 'static {
    /// Returns every record, in the store's own order.
    async fn find_all(&self) -> StoreResult<Vec<Employee>>;

    /// Returns the record for `id`, if any.
    async fn find_by_id(&self, id: EmployeeId) -> StoreResult<Option<Employee>>;

    /// Persists a new record and returns it with its assigned id.
    async fn insert(&self, employee: NewEmployee) -> StoreResult<Employee>;

    /// Upserts a record by id.
    async fn save(&self, employee: Employee) -> StoreResult<Employee>;

    /// Deletes the record for `id`. Deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: EmployeeId) -> StoreResult<()>;

    /// Reports whether a record exists for `id`.
    async fn exists_by_id(&self, id: EmployeeId) -> StoreResult<bool>;
}
