//! API Routes
//!
//! Configures the Axum router with the employee endpoints.

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::auth::require_basic_auth;
use super::handlers::{
    create_employee_handler, delete_employee_handler, get_employee_handler, health_handler,
    list_employees_handler, stats_handler, update_employee_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/v1/employees` - List employees (uncached)
/// - `POST /api/v1/employees` - Create an employee
/// - `GET /api/v1/employees/:employee_id` - Fetch one employee (read-through cache)
/// - `PUT /api/v1/employees/:employee_id` - Update an existing employee
/// - `DELETE /api/v1/employees/:employee_id` - Delete an existing employee
/// - `GET /api/v1/stats` - Cache statistics
/// - `GET /health` - Health check, no authentication
///
/// Everything under `/api/v1` requires HTTP Basic credentials.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/:employee_id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/stats", get(stats_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ));

    Router::new()
        .nest("/api/v1", api)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
