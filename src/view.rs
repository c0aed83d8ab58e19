//! Views: the per-route units that implement one or more HTTP verbs.

use crate::error::AppError;
use crate::response::ApiResponse;
use crate::router::PathParam;
use crate::state::AppState;
use async_trait::async_trait;
use axum::http::{HeaderMap, Method};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn from_method(method: &Method) -> Option<Verb> {
        match *method {
            Method::GET => Some(Verb::Get),
            Method::POST => Some(Verb::Post),
            Method::PUT => Some(Verb::Put),
            Method::DELETE => Some(Verb::Delete),
            _ => None,
        }
    }

    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed inbound request. Built once per request, read-only afterwards.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

pub type ViewResult = Result<ApiResponse, AppError>;

/// Builds a fresh view for each request.
pub type ViewFactory = fn(&AppState) -> Box<dyn View>;

/// A route handler. `verbs` is the authoritative set the dispatcher gates on;
/// only the matching methods need overriding.
#[async_trait]
pub trait View: Send + Sync {
    fn verbs(&self) -> &'static [Verb];

    async fn get(&self, _req: &ApiRequest, _params: &[PathParam]) -> ViewResult {
        Err(AppError::MethodNotAllowed(Verb::Get.method()))
    }

    async fn post(&self, _req: &ApiRequest, _params: &[PathParam]) -> ViewResult {
        Err(AppError::MethodNotAllowed(Verb::Post.method()))
    }

    async fn put(&self, _req: &ApiRequest, _params: &[PathParam]) -> ViewResult {
        Err(AppError::MethodNotAllowed(Verb::Put.method()))
    }

    async fn delete(&self, _req: &ApiRequest, _params: &[PathParam]) -> ViewResult {
        Err(AppError::MethodNotAllowed(Verb::Delete.method()))
    }
}

/// Invoke the method for `verb` if the view declares it.
pub async fn call(view: &dyn View, verb: Verb, req: &ApiRequest, params: &[PathParam]) -> ViewResult {
    if !view.verbs().contains(&verb) {
        return Err(AppError::MethodNotAllowed(verb.method()));
    }
    match verb {
        Verb::Get => view.get(req, params).await,
        Verb::Post => view.post(req, params).await,
        Verb::Put => view.put(req, params).await,
        Verb::Delete => view.delete(req, params).await,
    }
}
