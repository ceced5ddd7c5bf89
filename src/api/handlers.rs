//! API Handlers
//!
//! HTTP request handlers for the employee endpoints. Existence checks for
//! update and delete happen here, against the store, before the write.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::auth::Credentials;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{Employee, EmployeeId, EmployeeRequest, HealthResponse, StatsResponse};
use crate::service::CachedEmployeeService;
use crate::store::EmployeeStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-coherent employee service
    pub service: CachedEmployeeService,
    /// Credentials required by the auth middleware
    pub credentials: Arc<Credentials>,
}

impl AppState {
    /// Creates a new AppState from a service and credentials.
    pub fn new(service: CachedEmployeeService, credentials: Credentials) -> Self {
        Self {
            service,
            credentials: Arc::new(credentials),
        }
    }

    /// Creates a new AppState from configuration over the given store.
    pub fn from_config(config: &Config, store: Arc<dyn EmployeeStore>) -> Self {
        let service =
            CachedEmployeeService::with_cache_config(store, config.max_entries, config.cache_ttl());
        let credentials = Credentials::new(&config.auth_username, &config.auth_password);
        Self::new(service, credentials)
    }
}

/// Parses the `{employee_id}` path segment; blank or non-numeric ids are rejected.
fn parse_employee_id(raw: &str) -> Result<EmployeeId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidRequest(
            "employeeId cannot be blank".to_string(),
        ));
    }
    trimmed
        .parse()
        .map_err(|_| ApiError::InvalidRequest(format!("Invalid employee id: {}", trimmed)))
}

/// Handler for GET /api/v1/employees
pub async fn list_employees_handler(State(state): State<AppState>) -> Result<Json<Vec<Employee>>> {
    let employees = state.service.retrieve_all().await?;
    Ok(Json(employees))
}

/// Handler for GET /api/v1/employees/:employee_id
pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Employee>> {
    let id = parse_employee_id(&raw_id)?;
    state
        .service
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// Handler for POST /api/v1/employees
pub async fn create_employee_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<Employee>> {
    let Json(req) = payload?;
    let new = req.validate().map_err(ApiError::Validation)?;
    let stored = state.service.create(new).await?;
    Ok(Json(stored))
}

/// Handler for PUT /api/v1/employees/:employee_id
pub async fn update_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: std::result::Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<Employee>> {
    let Json(req) = payload?;
    let id = parse_employee_id(&raw_id)?;
    let new = req.validate().map_err(ApiError::Validation)?;

    if !state.service.exists(id).await? {
        return Err(ApiError::NotFound(id));
    }

    let saved = state.service.update(id, new).await?;
    Ok(Json(saved))
}

/// Handler for DELETE /api/v1/employees/:employee_id
pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_employee_id(&raw_id)?;

    if !state.service.exists(id).await? {
        return Err(ApiError::NotFound(id));
    }

    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /api/v1/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.service.cache_stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
