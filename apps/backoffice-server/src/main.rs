//! Back-office records server binary
//!
//! Loads configuration, connects to the relational store, applies
//! migrations, and serves the records REST API under `/api/v1`.

mod config;
mod openapi;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use clap::Parser;
use records_service::domain::Service;
use records_service::infra::storage::migrations::Migrator;
use records_service::infra::storage::repositories::{
    SeaOrmCategoryRepository, SeaOrmCustomerRepository, SeaOrmEmployeeRepository,
};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

/// Server command-line arguments
#[derive(Parser, Debug)]
#[command(name = "backoffice-server", version, about)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address
    #[arg(long)]
    bind: Option<String>,

    /// Override the configured port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = config::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        cfg.server.bind = bind;
    }
    if let Some(port) = args.port {
        cfg.server.port = port;
    }

    info!("Connecting to database at {}", cfg.database.url);
    let db = Database::connect(&cfg.database.url).await?;

    Migrator::up(&db, None).await?;
    info!("Database migrations completed");

    let app = build_router(Arc::new(db), &cfg);

    let addr: SocketAddr = format!("{}:{}", cfg.server.bind, cfg.server.port).parse()?;
    info!("Starting backoffice-server on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Assemble the full router: records API under the versioned prefix,
/// liveness probe, OpenAPI document, and the middleware stack.
fn build_router(db: Arc<DatabaseConnection>, cfg: &config::AppConfig) -> Router {
    let customers = Arc::new(SeaOrmCustomerRepository::new(db.clone()));
    let categories = Arc::new(SeaOrmCategoryRepository::new(db.clone()));
    let employees = Arc::new(SeaOrmEmployeeRepository::new(db));
    let service = Arc::new(Service::new(
        customers,
        categories,
        employees,
        cfg.records.clone(),
    ));

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            cfg.server.request_timeout_secs,
        )))
        // The original deployment allowed any origin with credentials;
        // very_permissive mirrors the request origin to keep that legal.
        .layer(CorsLayer::very_permissive());

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest(
            "/api/v1",
            records_service::api::rest::routes::router(service),
        )
        .layer(middleware)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
