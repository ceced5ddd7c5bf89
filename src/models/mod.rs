//! Domain records and HTTP DTOs
//!
//! `employee` holds the records the store and cache deal in; `requests` and
//! `responses` are the serialized shapes of HTTP bodies.

pub mod employee;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use employee::{Employee, EmployeeId, NewEmployee};
pub use requests::{EmployeeRequest, SalaryInput};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
