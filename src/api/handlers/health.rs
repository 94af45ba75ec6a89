//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::repositories::UserRepository;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Registry**: Readable and holds at least one user
/// 2. **Sessions**: Reports the number of live sessions
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": { "status": "ok", "message": "2 users" },
///     "sessions": { "status": "ok", "message": "3 active" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let registry_check = check_registry(&state).await;
    let sessions_check = check_sessions(&state).await;

    let all_healthy = registry_check.status == "ok" && sessions_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: registry_check,
            sessions: sessions_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the registry is readable and not empty.
async fn check_registry(state: &AppState) -> CheckStatus {
    match state.registry.list_users().await {
        Ok(users) if users.is_empty() => CheckStatus {
            status: "error".to_string(),
            message: Some("Registry has no users".to_string()),
        },
        Ok(users) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} users", users.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Registry error: {}", e)),
        },
    }
}

async fn check_sessions(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{} active", state.sessions.active_count().await)),
    }
}
