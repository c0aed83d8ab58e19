//! Common routes: health, readiness, version.

use crate::error::AppError;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{extract::State, http::Method, http::StatusCode, routing::get, Router};
use serde_json::json;

async fn health() -> ApiResponse {
    ApiResponse::new(StatusCode::OK, json!({ "status": "ok" }))
}

async fn ready(State(state): State<AppState>) -> ApiResponse {
    if sqlx::query("SELECT 1").fetch_optional(&state.pool).await.is_err() {
        return ApiResponse::new(
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "status": "degraded", "database": "unavailable" }),
        );
    }
    ApiResponse::new(StatusCode::OK, json!({ "status": "ok", "database": "ok" }))
}

async fn version() -> ApiResponse {
    ApiResponse::new(
        StatusCode::OK,
        json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        }),
    )
}

async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}

/// GET /health, GET /ready (with DB check), GET /version.
pub fn common_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health).fallback(method_not_allowed))
        .route("/ready", get(ready).fallback(method_not_allowed))
        .route("/version", get(version).fallback(method_not_allowed))
}
