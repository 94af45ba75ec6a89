use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Router fallback for unmatched paths.
///
/// Responds `404` with the usual error body:
///
/// ```json
/// {"error": {"code": "not_found", "message": "No route for GET /nope", "details": {"path": "/nope"}}}
/// ```
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    AppError::not_found(
        format!("No route for {} {}", method, uri.path()),
        json!({ "path": uri.path() }),
    )
}
