//! Liveness plus store reachability.
//!
//! Always answers 200 while the process is up. Store failures are logged with
//! the trace id; the body only says `"error"`.

use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::warn;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::trace_ctx;

const UNKNOWN: &str = "unknown";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthReport {
    pub status: &'static str,
    pub app_version: &'static str,
    pub db: &'static str,
    /// Latest applied migration, `none` before the first one
    pub migrations: String,
    pub time: String,
}

/// Round-trip the store and read the migration table.
async fn store_version(db: &DatabaseConnection) -> Result<String, DbErr> {
    db.query_one(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1".to_string(),
    ))
    .await?;

    Ok(get_latest_migration_version(db)
        .await?
        .unwrap_or_else(|| "none".to_string()))
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (db, migrations) = match require_db(&app_state) {
        Ok(conn) => match store_version(conn).await {
            Ok(version) => ("ok", version),
            Err(e) => {
                warn!(trace_id = %trace_ctx::trace_id(), error = %e, "health.store_unreachable");
                ("error", UNKNOWN.to_string())
            }
        },
        Err(_) => {
            warn!(trace_id = %trace_ctx::trace_id(), "health.store_not_configured");
            ("error", UNKNOWN.to_string())
        }
    };

    Ok(HttpResponse::Ok().json(HealthReport {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        migrations,
        time: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| UNKNOWN.to_string()),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health))
            .default_service(web::to(super::method_not_allowed)),
    );
}
