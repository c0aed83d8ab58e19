//! Route composition: common endpoints plus the dispatcher for the API.

pub mod api;
pub mod common;

pub use api::api_router;
pub use common::common_routes;

use crate::dispatch::dispatch;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

/// Request bodies above this size are answered with 413 before reaching a view.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    tracing::error!(error = %detail, "handler panicked");
    ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, detail).into_response()
}

/// Full application: common routes, then every other path through the URL router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .fallback(dispatch)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
}
