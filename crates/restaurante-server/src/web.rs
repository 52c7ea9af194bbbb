//! HTML handlers for the web interface.
//!
//! These call the same managers as the JSON API. Any failure renders the
//! error page instead of an error status; a successful form submission
//! redirects to the listing with `303 See Other`.

use crate::api::{with_connection, ApiError};
use crate::views;
use crate::AppState;
use axum::{
    extract::{Extension, Form, Path},
    response::{Html, IntoResponse, Redirect, Response},
};
use restaurante_empleados::list_empleados_by_sucursal;
use restaurante_sucursales::{create_sucursal, get_sucursal, list_sucursales};
use restaurante_types::SucursalParams;
use serde::Deserialize;
use std::sync::Arc;

/// Fields posted by the new-branch form.
#[derive(Debug, Deserialize)]
pub struct NuevaSucursalForm {
    pub nombre: String,
    #[serde(default)]
    pub num_empleados: i64,
}

fn render_error(err: ApiError) -> Html<String> {
    tracing::warn!(error = %err, "rendering web error page");
    Html(views::error_page(err.message()))
}

/// GET /
pub async fn index_handler() -> Html<String> {
    Html(views::index_page())
}

/// GET /web/sucursales
pub async fn sucursales_handler(Extension(state): Extension<Arc<AppState>>) -> Html<String> {
    match with_connection(&state.pool, |conn| Ok(list_sucursales(conn)?)).await {
        Ok(sucursales) => Html(views::sucursales_page(&sucursales)),
        Err(e) => render_error(e),
    }
}

/// GET /web/sucursales/nueva
pub async fn nueva_sucursal_handler() -> Html<String> {
    Html(views::sucursal_form_page())
}

/// POST /web/sucursales/nueva
pub async fn crear_sucursal_handler(
    Extension(state): Extension<Arc<AppState>>,
    Form(form): Form<NuevaSucursalForm>,
) -> Response {
    let params = SucursalParams {
        num_empleados: form.num_empleados,
        ..SucursalParams::new(form.nombre)
    };

    match with_connection(&state.pool, move |conn| Ok(create_sucursal(conn, &params)?)).await {
        Ok(sucursal) => {
            tracing::info!(sucursal_id = sucursal.id, "sucursal created via web form");
            Redirect::to("/web/sucursales").into_response()
        }
        Err(e) => render_error(e).into_response(),
    }
}

/// GET /web/sucursales/{id}
pub async fn sucursal_detalle_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Html<String> {
    let result = with_connection(&state.pool, move |conn| {
        let sucursal = get_sucursal(conn, id)?;
        let empleados = list_empleados_by_sucursal(conn, id)?;
        Ok((sucursal, empleados))
    })
    .await;

    match result {
        Ok((sucursal, empleados)) => Html(views::sucursal_detalle_page(&sucursal, &empleados)),
        Err(e) => render_error(e),
    }
}
