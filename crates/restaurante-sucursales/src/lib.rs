//! Branch management for the restaurant backend.
//!
//! Implements CRUD over the `sucursales` table. Every function takes a
//! borrowed connection so the caller owns the connection's scope; nothing
//! here opens or closes connections.
//!
//! Deleting a branch does not cascade. With foreign keys enforced, deleting
//! a branch that still has employees or suppliers fails with the driver's
//! constraint error.

use restaurante_types::{Sucursal, SucursalParams};
use rusqlite::{params, Connection, OptionalExtension, Row};
use thiserror::Error;

/// Errors that can occur during branch operations.
#[derive(Debug, Error)]
pub enum SucursalError {
    /// The driver rejected a statement, including constraint violations.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No branch has the given id.
    #[error("sucursal not found: {0}")]
    NotFound(i64),
}

const SELECT_SUCURSAL: &str =
    "SELECT id, nombre, num_empleados, num_proveedores, num_pedidos FROM sucursales";

/// Lists every branch in insertion order.
pub fn list_sucursales(conn: &Connection) -> Result<Vec<Sucursal>, SucursalError> {
    let mut stmt = conn.prepare(&format!("{SELECT_SUCURSAL} ORDER BY id ASC"))?;

    let rows = stmt.query_map([], map_row_to_sucursal)?;
    let mut sucursales = Vec::new();
    for row in rows {
        sucursales.push(row?);
    }
    Ok(sucursales)
}

/// Retrieves a branch by id.
pub fn get_sucursal(conn: &Connection, id: i64) -> Result<Sucursal, SucursalError> {
    conn.query_row(
        &format!("{SELECT_SUCURSAL} WHERE id = ?1"),
        [id],
        map_row_to_sucursal,
    )
    .optional()?
    .ok_or(SucursalError::NotFound(id))
}

/// Returns whether a branch with this id exists.
pub fn sucursal_exists(conn: &Connection, id: i64) -> Result<bool, SucursalError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sucursales WHERE id = ?1)",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Inserts a branch and returns it as stored, with its generated id.
pub fn create_sucursal(
    conn: &Connection,
    params: &SucursalParams,
) -> Result<Sucursal, SucursalError> {
    conn.execute(
        "INSERT INTO sucursales (nombre, num_empleados, num_proveedores, num_pedidos)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            params.nombre,
            params.num_empleados,
            params.num_proveedores,
            params.num_pedidos,
        ],
    )?;
    let id = conn.last_insert_rowid();
    tracing::debug!(sucursal_id = id, "sucursal created");
    get_sucursal(conn, id)
}

/// Replaces all scalar fields of a branch and returns the updated row.
pub fn update_sucursal(
    conn: &Connection,
    id: i64,
    params: &SucursalParams,
) -> Result<Sucursal, SucursalError> {
    let count = conn.execute(
        "UPDATE sucursales
         SET nombre = ?1, num_empleados = ?2, num_proveedores = ?3, num_pedidos = ?4
         WHERE id = ?5",
        params![
            params.nombre,
            params.num_empleados,
            params.num_proveedores,
            params.num_pedidos,
            id,
        ],
    )?;
    if count == 0 {
        return Err(SucursalError::NotFound(id));
    }
    get_sucursal(conn, id)
}

/// Deletes a branch.
pub fn delete_sucursal(conn: &Connection, id: i64) -> Result<(), SucursalError> {
    let count = conn.execute("DELETE FROM sucursales WHERE id = ?1", [id])?;
    if count == 0 {
        return Err(SucursalError::NotFound(id));
    }
    tracing::debug!(sucursal_id = id, "sucursal deleted");
    Ok(())
}

fn map_row_to_sucursal(row: &Row) -> rusqlite::Result<Sucursal> {
    Ok(Sucursal {
        id: row.get(0)?,
        nombre: row.get(1)?,
        num_empleados: row.get(2)?,
        num_proveedores: row.get(3)?,
        num_pedidos: row.get(4)?,
    })
}
