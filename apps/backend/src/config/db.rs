use std::env;

use crate::error::AppError;

/// Which store the process talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbProfile {
    /// PostgreSQL, credentials from `DB_*` env vars
    Postgres,
    /// SQLite file; `None` falls back to `SQLITE_FILE` then `trivia.sqlite`
    SqliteFile { file: Option<String> },
    /// Private in-memory SQLite database (tests, local demos)
    InMemory,
}

impl DbProfile {
    /// Resolve the profile from `DB_BACKEND` (defaults to postgres).
    pub fn from_env() -> Result<Self, AppError> {
        let raw = env::var("DB_BACKEND").unwrap_or_else(|_| "postgres".to_string());
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbProfile::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbProfile::SqliteFile { file: None }),
            "sqlite-memory" | "memory" => Ok(DbProfile::InMemory),
            other => Err(AppError::config(format!(
                "Unsupported DB_BACKEND '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }

    pub fn is_sqlite(&self) -> bool {
        !matches!(self, DbProfile::Postgres)
    }
}

/// Builds a database URL for the given profile from environment variables
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Postgres => {
            let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("DB_NAME")?;
            let username = must_var("DB_USER")?;
            let password = must_var("DB_PASS")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbProfile::SqliteFile { file } => {
            let path = match file {
                Some(path) => path.clone(),
                None => env::var("SQLITE_FILE").unwrap_or_else(|_| "trivia.sqlite".to_string()),
            };
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
