use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

/// Retry a connection attempt with fixed interval delays
/// Returns the result of the last attempt after all retries are exhausted
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(
                        "connection_retry=success attempts={} interval_ms={}",
                        attempt, interval_ms
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    warn!(
                        "connection_retry=failed attempt={} max_attempts={} interval_ms={}",
                        attempt, max_attempts, interval_ms
                    );
                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| AppError::config("connection retry failed")))
}

fn connect_options(profile: &DbProfile, url: String) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false);

    match profile {
        // Every pooled connection to sqlite::memory: would be its own database
        DbProfile::InMemory => {
            opts.max_connections(1).min_connections(1);
        }
        DbProfile::SqliteFile { .. } => {
            opts.max_connections(1);
        }
        DbProfile::Postgres => {
            opts.max_connections(num_connections())
                .acquire_timeout(Duration::from_secs(5));
        }
    }

    opts
}

fn num_connections() -> u32 {
    std::thread::available_parallelism()
        .map(|n| (n.get() as u32) * 2)
        .unwrap_or(4)
}

/// Connect to the store for `profile` and bring its schema up to date.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;
    let attempts = if profile.is_sqlite() { 1 } else { CONNECT_ATTEMPTS };

    let conn = retry_connection(
        || {
            let opts = connect_options(profile, url.clone());
            async move { Database::connect(opts).await.map_err(AppError::from) }
        },
        attempts,
        CONNECT_INTERVAL_MS,
    )
    .await?;

    migrate(&conn, MigrationCommand::Up).await?;
    info!(profile = ?profile, "database ready");

    Ok(conn)
}
