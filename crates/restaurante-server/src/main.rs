//! Restaurant server binary.
//!
//! Loads configuration, prepares the branch/staff database and serves the
//! JSON API and web pages until SIGINT or SIGTERM.

use restaurante_db::{DbPool, MigrationError, PoolError};
use restaurante_server::config::{self, DatabaseConfig, LoggingConfig};
use restaurante_server::{app, AppState};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Failures while preparing the database before the listener opens.
#[derive(Debug, Error)]
enum StartupError {
    /// The pool could not be built or no connection could be checked out.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// The schema could not be brought up to date.
    #[error(transparent)]
    Migration(#[from] MigrationError),
}

/// Picks the config file: first CLI argument, then `RESTAURANTE_CONFIG_PATH`,
/// then `config.toml` in the working directory.
fn config_path() -> (String, &'static str) {
    let cli = std::env::args().nth(1).filter(|p| !p.trim().is_empty());
    if let Some(path) = cli {
        return (path, "cli-arg");
    }
    match std::env::var("RESTAURANTE_CONFIG_PATH") {
        Ok(path) if !path.trim().is_empty() => (path, "env-var"),
        _ => (DEFAULT_CONFIG_PATH.to_string(), "default"),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Opens the pool and makes sure the three tables exist.
fn open_database(database: &DatabaseConfig) -> Result<DbPool, StartupError> {
    let pool = restaurante_db::create_pool(&database.path, database.runtime_settings())?;

    let conn = restaurante_db::acquire(&pool)?;
    let applied = restaurante_db::run_migrations(&conn)?;
    restaurante_db::release(conn);

    tracing::info!(
        path = %database.path,
        applied,
        "sucursales, empleados and proveedores tables ready"
    );
    Ok(pool)
}

#[tokio::main]
async fn main() {
    let (path, source) = config_path();
    let config = config::load_config(Some(&path))
        .expect("failed to load configuration, the server cannot start without valid config");

    init_tracing(&config.logging);
    tracing::info!(%path, source, "configuration loaded");

    let pool = open_database(&config.database)
        .expect("failed to prepare the database, check database.path in config");

    let router = app(AppState {
        pool,
        static_dir: config.server.static_dir.clone(),
    });
    let addr = SocketAddr::new(config.server.host, config.server.port);

    let listener = TcpListener::bind(addr)
        .await
        .expect("failed to bind to address, is another process using this port?");
    tracing::info!(%addr, "restaurante server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("restaurante server stopped");
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
