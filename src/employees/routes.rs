use super::handlers;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// Creates the employees router with all employee-form routes
pub fn employees_routes() -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        // Records
        .route("/api/employees", get(handlers::list_employees))
        .route("/api/employees/:index", delete(handlers::delete_employee))
        .route("/api/employees/:index/edit", post(handlers::edit_employee))
        // Draft
        .route(
            "/api/employees/draft",
            get(handlers::get_draft).patch(handlers::update_draft),
        )
        .route("/api/employees/draft/submit", post(handlers::submit_draft))
        .route("/api/employees/draft/:field", put(handlers::set_draft_field))
}
