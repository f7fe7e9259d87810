//! Employee handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use staffdir_core::activity;
use staffdir_core::directory::{
    CreateEmployeeRequest, Employee, ListActiveEmployeesRequest, ListActiveEmployeesResult,
};

use crate::{handlers::AppError, state::AppState};

/// List one page of active employees (GET /api/employees).
///
/// Query parameters: `startKey` (exclusive cursor, optional) and `forward`
/// (default `true`).
pub async fn list_active_employees(
    State(state): State<AppState>,
    Query(request): Query<ListActiveEmployeesRequest>,
) -> Result<Json<ListActiveEmployeesResult>, AppError> {
    let result = activity::list_active_employees(state.employee_repo.as_ref(), request).await?;
    Ok(Json(result))
}

/// Create a new employee (POST /api/employees).
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = activity::create_employee(state.employee_repo.as_ref(), request).await?;

    tracing::info!(
        employee_id = %result.employee.employee_id,
        status = %result.employee.employee_status,
        "Created new employee"
    );

    Ok((StatusCode::CREATED, Json(result)))
}

/// Get a single employee by ID (GET /api/employees/{id}).
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, AppError> {
    let employee = activity::get_employee(state.employee_repo.as_ref(), &id).await?;
    Ok(Json(employee))
}
