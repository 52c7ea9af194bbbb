//! JSON API handlers for employees.

use crate::api::{with_connection, ApiError};
use crate::AppState;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use restaurante_empleados::{
    create_empleado, delete_empleado, list_empleados, list_empleados_by_sucursal,
};
use restaurante_types::{Empleado, EmpleadoParams};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /empleados
pub async fn list_empleados_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Empleado>>, ApiError> {
    let empleados = with_connection(&state.pool, |conn| Ok(list_empleados(conn)?)).await?;
    Ok(Json(empleados))
}

/// GET /empleados/sucursal/{id}
///
/// An unknown branch yields `[]`, not a 404.
pub async fn list_empleados_by_sucursal_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(sucursal_id): Path<i64>,
) -> Result<Json<Vec<Empleado>>, ApiError> {
    let empleados = with_connection(&state.pool, move |conn| {
        Ok(list_empleados_by_sucursal(conn, sucursal_id)?)
    })
    .await?;
    Ok(Json(empleados))
}

/// POST /empleados
pub async fn create_empleado_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<EmpleadoParams>,
) -> Result<(StatusCode, Json<Empleado>), ApiError> {
    let empleado =
        with_connection(&state.pool, move |conn| Ok(create_empleado(conn, &payload)?)).await?;
    tracing::info!(
        empleado_id = empleado.id,
        sucursal_id = empleado.sucursal_id,
        "empleado created via api"
    );
    Ok((StatusCode::CREATED, Json(empleado)))
}

/// DELETE /empleados/{id}
pub async fn delete_empleado_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    with_connection(&state.pool, move |conn| Ok(delete_empleado(conn, id)?)).await?;
    tracing::info!(empleado_id = id, "empleado deleted via api");
    Ok(Json(json!({"message": "Empleado deleted successfully"})))
}
