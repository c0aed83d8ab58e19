//! Shared application state for all routes.

use crate::router::UrlRouter;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Bounded pool; every query checks a connection out and returns it on completion.
    pub pool: PgPool,
    pub router: Arc<UrlRouter>,
}

impl AppState {
    pub fn new(pool: PgPool, router: UrlRouter) -> Self {
        AppState {
            pool,
            router: Arc::new(router),
        }
    }
}
