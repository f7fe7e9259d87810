//! Department handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use staffdir_core::activity;
use staffdir_core::directory::{CreateDepartmentRequest, Department};

use crate::{handlers::AppError, state::AppState};

/// Create a new department (POST /api/departments).
///
/// Rejects invalid names and IDs that are already taken with 400.
pub async fn create_department(
    State(state): State<AppState>,
    Json(request): Json<CreateDepartmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = activity::create_department(state.department_repo.as_ref(), request).await?;

    tracing::info!(
        dept_id = %result.department.dept_id,
        name = %result.department.dept_name,
        "Created new department"
    );

    Ok((StatusCode::CREATED, Json(result)))
}

/// Get a single department by ID (GET /api/departments/{id}).
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Department>, AppError> {
    let department = activity::get_department(state.department_repo.as_ref(), &id).await?;
    Ok(Json(department))
}
