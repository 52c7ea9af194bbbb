//! Restaurant management server library logic.
//!
//! Exposes branches and employees both as a JSON API and as server-rendered
//! HTML pages over the same managers.

pub mod api;
pub mod api_empleados;
pub mod api_sucursales;
pub mod config;
pub mod views;
pub mod web;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get},
    Extension, Json, Router,
};
use restaurante_db::DbPool;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Directory of static assets served under `/static`.
    pub static_dir: String,
}

/// Maximum request body size (64 KiB). Every accepted body is a few small fields.
const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/sucursales",
            get(api_sucursales::list_sucursales_handler)
                .post(api_sucursales::create_sucursal_handler),
        )
        .route(
            "/sucursales/{id}",
            get(api_sucursales::get_sucursal_handler)
                .put(api_sucursales::update_sucursal_handler)
                .delete(api_sucursales::delete_sucursal_handler),
        )
        .route(
            "/empleados",
            get(api_empleados::list_empleados_handler)
                .post(api_empleados::create_empleado_handler),
        )
        .route(
            "/empleados/sucursal/{id}",
            get(api_empleados::list_empleados_by_sucursal_handler),
        )
        .route(
            "/empleados/{id}",
            delete(api_empleados::delete_empleado_handler),
        );

    let web_routes = Router::new()
        .route("/", get(web::index_handler))
        .route("/web/sucursales", get(web::sucursales_handler))
        .route(
            "/web/sucursales/nueva",
            get(web::nueva_sucursal_handler).post(web::crear_sucursal_handler),
        )
        .route("/web/sucursales/{id}", get(web::sucursal_detalle_handler));

    let router = Router::new()
        .route("/health", get(health))
        .merge(api_routes)
        .merge(web_routes);

    let router = if std::path::Path::new(&state.static_dir).is_dir() {
        tracing::info!(path = %state.static_dir, "serving static files at /static");
        router.nest_service("/static", ServeDir::new(&state.static_dir))
    } else {
        tracing::info!(path = %state.static_dir, "static directory not found, skipping static file serving");
        router
    };

    router
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
