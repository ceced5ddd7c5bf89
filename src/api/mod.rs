//! API Module
//!
//! HTTP handlers, routing and authentication for the employee REST API.
//!
//! # Endpoints
//! - `GET /api/v1/employees` - List employees
//! - `POST /api/v1/employees` - Create an employee
//! - `GET|PUT|DELETE /api/v1/employees/:employee_id` - Read, update, delete
//! - `GET /api/v1/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod auth;
pub mod handlers;
pub mod routes;

pub use auth::{parse_basic_auth, Credentials};
pub use handlers::*;
pub use routes::create_router;
