use super::models::{
    DraftResponse, EmployeeField, EmployeeListItem, HealthResponse, ListEmployeesQuery,
    MessageResponse, SetFieldRequest, UpdateDraftRequest,
};
use super::store::EmployeeForm;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Row positions come in as text so a bad value gets the JSON error shape
fn parse_index(raw: &str) -> Result<usize, ApiError> {
    raw.parse::<usize>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid employee position '{}'", raw)))
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn draft_response(form: &EmployeeForm) -> DraftResponse {
    DraftResponse {
        draft: form.draft().clone(),
        errors: form.errors().field_map(),
    }
}

// ============================================================================
// List Handlers
// ============================================================================

/// GET /api/employees?search=q - List employees, optionally filtered by name
pub async fn list_employees(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Query(query): Query<ListEmployeesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let search = query.search.unwrap_or_default();

    let items: Vec<EmployeeListItem> = app_state
        .employees
        .search(&search)
        .into_iter()
        .map(|(index, record)| EmployeeListItem {
            index,
            record: record.clone(),
        })
        .collect();

    Ok(Json(items))
}

/// POST /api/employees/:index/edit - Load a row into the draft
pub async fn edit_employee(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(index): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let index = parse_index(&index)?;

    let mut app_state = state.write().await;
    app_state.employees.edit(index)?;

    Ok(Json(draft_response(&app_state.employees)))
}

/// DELETE /api/employees/:index - Delete a row
pub async fn delete_employee(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(index): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let index = parse_index(&index)?;

    let mut app_state = state.write().await;
    app_state.employees.delete(index)?;

    Ok(Json(MessageResponse {
        message: "Employee deleted successfully".to_string(),
    }))
}

// ============================================================================
// Draft Handlers
// ============================================================================

/// GET /api/employees/draft - Current draft and displayed errors
pub async fn get_draft(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    Ok(Json(draft_response(&app_state.employees)))
}

/// PATCH /api/employees/draft - Update any subset of draft fields
pub async fn update_draft(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    payload: Result<Json<UpdateDraftRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(payload)?;

    let mut app_state = state.write().await;
    app_state.employees.update_draft(request.into_changes());

    Ok(Json(draft_response(&app_state.employees)))
}

/// PUT /api/employees/draft/:field - Set a single draft field
pub async fn set_draft_field(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(field): Path<String>,
    payload: Result<Json<SetFieldRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let field: EmployeeField = field.parse().map_err(ApiError::BadRequest)?;
    let request = json_body(payload)?;

    let mut app_state = state.write().await;
    app_state.employees.set_field(field, request.value);

    Ok(Json(draft_response(&app_state.employees)))
}

/// POST /api/employees/draft/submit - Validate and save the draft
pub async fn submit_draft(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let mut app_state = state.write().await;
    let stored = app_state.employees.submit()?;

    Ok((StatusCode::CREATED, Json(stored)))
}

// ============================================================================
// Health
// ============================================================================

/// GET /api/health
pub async fn health(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        employees: app_state.employees.store().len(),
    }))
}
