//! JSON API handlers for branches.

use crate::api::{with_connection, ApiError};
use crate::AppState;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use restaurante_sucursales::{
    create_sucursal, delete_sucursal, get_sucursal, list_sucursales, update_sucursal,
};
use restaurante_types::{Sucursal, SucursalParams};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /sucursales
pub async fn list_sucursales_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Sucursal>>, ApiError> {
    let sucursales =
        with_connection(&state.pool, |conn| Ok(list_sucursales(conn)?)).await?;
    Ok(Json(sucursales))
}

/// GET /sucursales/{id}
pub async fn get_sucursal_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Sucursal>, ApiError> {
    let sucursal = with_connection(&state.pool, move |conn| Ok(get_sucursal(conn, id)?)).await?;
    Ok(Json(sucursal))
}

/// POST /sucursales
pub async fn create_sucursal_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<SucursalParams>,
) -> Result<(StatusCode, Json<Sucursal>), ApiError> {
    let sucursal =
        with_connection(&state.pool, move |conn| Ok(create_sucursal(conn, &payload)?)).await?;
    tracing::info!(sucursal_id = sucursal.id, "sucursal created via api");
    Ok((StatusCode::CREATED, Json(sucursal)))
}

/// PUT /sucursales/{id}
pub async fn update_sucursal_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<SucursalParams>,
) -> Result<Json<Sucursal>, ApiError> {
    let sucursal =
        with_connection(&state.pool, move |conn| Ok(update_sucursal(conn, id, &payload)?))
            .await?;
    Ok(Json(sucursal))
}

/// DELETE /sucursales/{id}
pub async fn delete_sucursal_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    with_connection(&state.pool, move |conn| Ok(delete_sucursal(conn, id)?)).await?;
    tracing::info!(sucursal_id = id, "sucursal deleted via api");
    Ok(Json(json!({"message": "Sucursal deleted successfully"})))
}
