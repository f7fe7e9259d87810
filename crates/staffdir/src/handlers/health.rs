//! Liveness probe.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately; does not touch the record store.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
