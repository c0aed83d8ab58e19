//! Request dispatch: body decode, route match, verb gate, view call, wire response.
//!
//! Every API request goes through [`dispatch`]. Views and the record store never write
//! to the wire; any error they return is turned into a JSON response here.

use crate::error::AppError;
use crate::response::ApiResponse;
use crate::routes::MAX_BODY_BYTES;
use crate::state::AppState;
use crate::view::{call, ApiRequest, Verb, ViewResult};
use axum::{
    body::{to_bytes, Body},
    extract::{Query, Request, State},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;
use serde_json::Value;
use std::collections::HashMap;

/// Decode a request body. Empty means absent; anything else must be valid JSON.
pub fn parse_body(bytes: &[u8]) -> Result<Option<Value>, AppError> {
    if bytes.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(|_| AppError::MalformedInput("Invalid JSON".into()))
}

fn body_error(err: axum::Error) -> AppError {
    let inner = err.into_inner();
    if inner.is::<LengthLimitError>() {
        AppError::PayloadTooLarge(MAX_BODY_BYTES)
    } else {
        AppError::MalformedInput(format!("Unable to read request body: {}", inner))
    }
}

/// axum fallback service running the URL router.
pub async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let method = parts.method.clone();
    let path = parts.uri.path().to_string();

    let reply = match handle(&state, parts, body).await {
        Ok(reply) => reply,
        Err(e) => {
            let status = e.status();
            if status.is_server_error() {
                tracing::error!(method = %method, path = %path, error = %e, "request failed");
            }
            ApiResponse::error(status, e.to_string())
        }
    };
    tracing::info!(method = %method, path = %path, status = reply.status.as_u16(), "request");
    reply.into_response()
}

async fn handle(state: &AppState, parts: Parts, body: Body) -> ViewResult {
    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(body_error)?;
    let query = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
        .map(|Query(q)| q)
        .unwrap_or_default();
    let request = ApiRequest {
        method: parts.method,
        path: parts.uri.path().to_string(),
        query,
        headers: parts.headers,
        body: parse_body(&bytes)?,
    };

    let route = state
        .router
        .resolve(&request.path)
        .ok_or_else(|| AppError::NotFound("Not found".into()))?;
    let verb = Verb::from_method(&request.method)
        .ok_or_else(|| AppError::MethodNotAllowed(request.method.clone()))?;

    let view = (route.view)(state);
    call(view.as_ref(), verb, &request, &route.params).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_absent() {
        assert_eq!(parse_body(b"").unwrap(), None);
    }

    #[test]
    fn any_json_value_is_accepted() {
        assert_eq!(parse_body(br#"{"name":"Toyota"}"#).unwrap(), Some(json!({"name": "Toyota"})));
        assert_eq!(parse_body(b"[1,2]").unwrap(), Some(json!([1, 2])));
        assert_eq!(parse_body(b"7").unwrap(), Some(json!(7)));
    }

    #[test]
    fn malformed_body_is_invalid_json() {
        let err = parse_body(b"{name:").unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)));
        assert_eq!(err.to_string(), "Invalid JSON");
    }
}
