//! Standard response envelope helpers.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{json, Value};

/// A (status, payload) pair returned by views and turned into the wire response by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

#[derive(Serialize)]
pub struct Envelope<T> {
    pub data: T,
    pub message: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        ApiResponse { status, body }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        ApiResponse::new(status, json!({ "error": message.into() }))
    }
}

impl From<(StatusCode, Value)> for ApiResponse {
    fn from((status, body): (StatusCode, Value)) -> Self {
        ApiResponse::new(status, body)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body.to_string()).into_response();
        let headers = response.headers_mut();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        response
    }
}

fn envelope<T: Serialize>(status: StatusCode, data: T, message: &str) -> ApiResponse {
    let body = serde_json::to_value(Envelope {
        data,
        message: message.to_string(),
    })
    .unwrap_or_else(|e| json!({ "error": e.to_string() }));
    ApiResponse::new(status, body)
}

pub fn success_ok<T: Serialize>(data: T, message: &str) -> ApiResponse {
    envelope(StatusCode::OK, data, message)
}

pub fn success_created<T: Serialize>(data: T, message: &str) -> ApiResponse {
    envelope(StatusCode::CREATED, data, message)
}
