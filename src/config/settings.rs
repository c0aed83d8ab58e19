use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;

/// PostgreSQL connection settings. Defaults match a local development database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    /// Insert one sample vehicle and user into an empty database at startup.
    pub seed_sample_data: bool,
}

impl Settings {
    /// Read settings from the process environment (call `dotenvy::dotenv()` first to honour `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());
        Ok(Settings {
            database: DatabaseSettings {
                host: text("DB_HOST", "localhost"),
                port: parsed(&lookup, "DB_PORT", 5434)?,
                name: text("DB_NAME", "python_api_db"),
                user: text("DB_USER", "admin"),
                password: text("DB_PASSWORD", "admin123"),
                max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            },
            server: ServerSettings {
                host: text("HOST", "localhost"),
                port: parsed(&lookup, "PORT", 8000)?,
            },
            seed_sample_data: parsed(&lookup, "SEED_SAMPLE_DATA", false)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
    }

    /// Same server and credentials, `postgres` maintenance database.
    pub fn admin_connect_options(&self) -> PgConnectOptions {
        self.connect_options().database("postgres")
    }
}

fn parsed<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidVar {
            name,
            value: value.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database.host, "localhost");
        assert_eq!(s.database.port, 5434);
        assert_eq!(s.database.name, "python_api_db");
        assert_eq!(s.database.user, "admin");
        assert_eq!(s.database.password, "admin123");
        assert_eq!(s.database.max_connections, 5);
        assert_eq!(s.bind_addr(), "localhost:8000");
        assert!(!s.seed_sample_data);
    }

    #[test]
    fn environment_overrides_defaults() {
        let s = settings(&[
            ("DB_HOST", "db"),
            ("DB_PORT", "5432"),
            ("PORT", "9000"),
            ("HOST", "0.0.0.0"),
            ("SEED_SAMPLE_DATA", "true"),
        ])
        .unwrap();
        assert_eq!(s.database.host, "db");
        assert_eq!(s.database.port, 5432);
        assert_eq!(s.bind_addr(), "0.0.0.0:9000");
        assert!(s.seed_sample_data);
    }

    #[test]
    fn unparsable_numbers_are_errors() {
        let err = settings(&[("DB_PORT", "five")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "DB_PORT", .. }));
    }
}
