//! Server: reads settings from the environment, prepares the database, serves the API.

use rental_api::{api_router, app, ensure_database_exists, ensure_tables, seed_sample_data, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rental_api=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    ensure_database_exists(&settings.database).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect_with(settings.database.connect_options())
        .await?;

    ensure_tables(&pool).await?;
    if settings.seed_sample_data {
        seed_sample_data(&pool).await?;
    }

    let state = AppState::new(pool, api_router()?);
    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    for rule in state.router.rules() {
        tracing::debug!(pattern = rule.pattern(), "route");
    }
    axum::serve(listener, app(state)).await?;
    Ok(())
}
