//! Database bootstrap: create the database and tables if missing, optionally seed sample rows.

use crate::config::DatabaseSettings;
use crate::error::AppError;
use crate::model::{Record, User, Vehicle};
use crate::service::Table;
use sqlx::{ConnectOptions, PgPool};

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Connect to the `postgres` maintenance database and CREATE DATABASE when the configured one is missing.
pub async fn ensure_database_exists(settings: &DatabaseSettings) -> Result<(), AppError> {
    if settings.name.is_empty() || settings.name == "postgres" {
        return Ok(());
    }
    let opts = settings.admin_connect_options();
    let mut conn = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&settings.name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %settings.name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&settings.name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Idempotent DDL for `vehicles` and `users`.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    let vehicles_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            model VARCHAR(100) NOT NULL,
            rent_rate NUMERIC(10, 2) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        quote_ident(Vehicle::TABLE)
    );
    sqlx::query(&vehicles_ddl).execute(pool).await?;

    let users_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            username VARCHAR(100) NOT NULL UNIQUE,
            vehicle_id INTEGER REFERENCES {}(id) ON DELETE SET NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        quote_ident(User::TABLE),
        quote_ident(Vehicle::TABLE)
    );
    sqlx::query(&users_ddl).execute(pool).await?;
    Ok(())
}

/// Insert a sample vehicle and a user driving it when there are no vehicles yet.
pub async fn seed_sample_data(pool: &PgPool) -> Result<bool, AppError> {
    let vehicles = Table::<Vehicle>::new(pool.clone());
    if !vehicles.list_all().await?.is_empty() {
        return Ok(false);
    }
    let mut vehicle = Vehicle::new("Toyota", "Corolla", 100.0);
    vehicles.insert(&mut vehicle).await?;
    let mut user = User::new("bishok", vehicle.id);
    Table::<User>::new(pool.clone()).insert(&mut user).await?;
    tracing::info!(vehicle_id = ?vehicle.id, user_id = ?user.id, "sample data inserted");
    Ok(true)
}
