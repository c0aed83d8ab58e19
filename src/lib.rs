//! Rental API: vehicle and user CRUD over PostgreSQL.
//!
//! Persistence goes through [`service::Table`], which derives every statement from a
//! record's declared fields. HTTP requests go through [`dispatch::dispatch`], which
//! matches ordered URL rules and calls the verb a [`view::View`] declares.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod router;
pub mod routes;
pub mod serializers;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod view;

pub use config::{DatabaseSettings, ServerSettings, Settings};
pub use error::{AppError, ConfigError};
pub use model::{Record, User, Vehicle};
pub use response::{success_created, success_ok, ApiResponse};
pub use router::{PathParam, RouteRule, UrlRouter};
pub use routes::{api_router, app, common_routes};
pub use service::Table;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables, seed_sample_data};
pub use view::{ApiRequest, Verb, View, ViewFactory, ViewResult};
