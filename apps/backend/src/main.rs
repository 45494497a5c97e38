use actix_web::{web, App, HttpServer};
use trivia_backend::config::db::DbProfile;
use trivia_backend::config::server::ServerConfig;
use trivia_backend::infra::state::build_state;
use trivia_backend::middleware::cors::cors_middleware;
use trivia_backend::middleware::request_trace::RequestTrace;
use trivia_backend::middleware::structured_logger::StructuredLogger;
use trivia_backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let server_config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let db_profile = match DbProfile::from_env() {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting Trivia API on http://{}:{}",
        server_config.host, server_config.port
    );

    let app_state = match build_state().with_db(db_profile).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Database connected and migrated");

    let data = web::Data::new(app_state);
    let allowed_origins = server_config.allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&allowed_origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run()
    .await
}
