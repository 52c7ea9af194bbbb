//! Shared plumbing for the JSON API and the web pages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use restaurante_db::DbPool;
use restaurante_empleados::EmpleadoError;
use restaurante_sucursales::SucursalError;
use rusqlite::Connection;
use thiserror::Error;

/// Message reported when no database connection can be obtained.
pub const DB_CONNECTION_ERROR: &str = "Database connection error";

/// API error type mapping to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Store or connection failure (500).
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl ApiError {
    /// The human-readable message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg) | ApiError::InternalServerError(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<SucursalError> for ApiError {
    fn from(e: SucursalError) -> Self {
        match e {
            SucursalError::NotFound(_) => ApiError::NotFound("Sucursal not found".to_string()),
            SucursalError::Database(err) => {
                tracing::error!(error = %err, "sucursal operation failed");
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<EmpleadoError> for ApiError {
    fn from(e: EmpleadoError) -> Self {
        match e {
            EmpleadoError::NotFound(_) => ApiError::NotFound("Empleado not found".to_string()),
            EmpleadoError::SucursalNotFound(_) => {
                ApiError::NotFound("Sucursal not found".to_string())
            }
            EmpleadoError::Database(err) => {
                tracing::error!(error = %err, "empleado operation failed");
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Runs one unit of database work on a pooled connection.
///
/// The work runs on the blocking thread pool. The connection is acquired
/// before `work` runs and released after it returns, whatever the outcome.
pub async fn with_connection<T, F>(pool: &DbPool, work: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> Result<T, ApiError> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let conn = restaurante_db::acquire(&pool)
            .map_err(|_| ApiError::InternalServerError(DB_CONNECTION_ERROR.to_string()))?;
        let result = work(&*conn);
        restaurante_db::release(conn);
        result
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "database task join error");
        ApiError::InternalServerError(format!("task join error: {}", e))
    })?
}
