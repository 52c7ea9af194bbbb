//! Staff management for the restaurant backend.
//!
//! Employees belong to exactly one branch. Each branch keeps a
//! denormalized `num_empleados` counter, maintained incrementally here:
//! hiring adds one and removing subtracts one. The employee write and the
//! counter write share a single transaction, so the counter can never drift
//! from a half-applied mutation.

use restaurante_sucursales::{sucursal_exists, SucursalError};
use restaurante_types::{Empleado, EmpleadoParams};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use thiserror::Error;

/// Errors that can occur during employee operations.
#[derive(Debug, Error)]
pub enum EmpleadoError {
    /// The driver rejected a statement; the transaction was rolled back.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No employee has the given id.
    #[error("empleado not found: {0}")]
    NotFound(i64),

    /// The referenced branch does not exist.
    #[error("sucursal not found: {0}")]
    SucursalNotFound(i64),
}

impl From<SucursalError> for EmpleadoError {
    fn from(e: SucursalError) -> Self {
        match e {
            SucursalError::Database(err) => EmpleadoError::Database(err),
            SucursalError::NotFound(id) => EmpleadoError::SucursalNotFound(id),
        }
    }
}

const SELECT_EMPLEADO: &str =
    "SELECT id, nombre, puesto, fecha_contratacion, sucursal_id FROM empleados";

/// Lists every employee in insertion order.
pub fn list_empleados(conn: &Connection) -> Result<Vec<Empleado>, EmpleadoError> {
    let mut stmt = conn.prepare(&format!("{SELECT_EMPLEADO} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_row_to_empleado)?;
    collect_rows(rows)
}

/// Lists the employees of one branch.
///
/// An unknown branch yields an empty list, not an error.
pub fn list_empleados_by_sucursal(
    conn: &Connection,
    sucursal_id: i64,
) -> Result<Vec<Empleado>, EmpleadoError> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_EMPLEADO} WHERE sucursal_id = ?1 ORDER BY id ASC"
    ))?;
    let rows = stmt.query_map([sucursal_id], map_row_to_empleado)?;
    collect_rows(rows)
}

/// Retrieves an employee by id.
pub fn get_empleado(conn: &Connection, id: i64) -> Result<Empleado, EmpleadoError> {
    conn.query_row(
        &format!("{SELECT_EMPLEADO} WHERE id = ?1"),
        [id],
        map_row_to_empleado,
    )
    .optional()?
    .ok_or(EmpleadoError::NotFound(id))
}

/// Hires an employee into an existing branch and bumps its counter.
///
/// Returns `SucursalNotFound` without writing anything if the branch does
/// not exist.
pub fn create_empleado(
    conn: &Connection,
    params: &EmpleadoParams,
) -> Result<Empleado, EmpleadoError> {
    let tx = begin_write(conn)?;

    if !sucursal_exists(&tx, params.sucursal_id)? {
        return Err(EmpleadoError::SucursalNotFound(params.sucursal_id));
    }

    tx.execute(
        "INSERT INTO empleados (nombre, puesto, fecha_contratacion, sucursal_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            params.nombre,
            params.puesto,
            params.fecha_contratacion,
            params.sucursal_id,
        ],
    )?;
    let id = tx.last_insert_rowid();

    tx.execute(
        "UPDATE sucursales SET num_empleados = num_empleados + 1 WHERE id = ?1",
        [params.sucursal_id],
    )?;

    let empleado = get_empleado(&tx, id)?;
    tx.commit()?;

    tracing::debug!(
        empleado_id = id,
        sucursal_id = params.sucursal_id,
        "empleado created"
    );
    Ok(empleado)
}

/// Removes an employee and decrements its branch's counter.
pub fn delete_empleado(conn: &Connection, id: i64) -> Result<(), EmpleadoError> {
    let tx = begin_write(conn)?;

    let sucursal_id: i64 = tx
        .query_row(
            "SELECT sucursal_id FROM empleados WHERE id = ?1",
            [id],
            |row| row.get(0),
        )
        .optional()?
        .ok_or(EmpleadoError::NotFound(id))?;

    tx.execute("DELETE FROM empleados WHERE id = ?1", [id])?;
    tx.execute(
        "UPDATE sucursales SET num_empleados = num_empleados - 1 WHERE id = ?1",
        [sucursal_id],
    )?;
    tx.commit()?;

    tracing::debug!(empleado_id = id, sucursal_id, "empleado deleted");
    Ok(())
}

/// Opens a transaction holding the write lock from `BEGIN`, so concurrent
/// counter updates serialize on the busy timeout.
fn begin_write(conn: &Connection) -> rusqlite::Result<Transaction<'_>> {
    Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
}

fn collect_rows<I>(rows: I) -> Result<Vec<Empleado>, EmpleadoError>
where
    I: Iterator<Item = rusqlite::Result<Empleado>>,
{
    let mut empleados = Vec::new();
    for row in rows {
        empleados.push(row?);
    }
    Ok(empleados)
}

fn map_row_to_empleado(row: &Row) -> rusqlite::Result<Empleado> {
    Ok(Empleado {
        id: row.get(0)?,
        nombre: row.get(1)?,
        puesto: row.get(2)?,
        fecha_contratacion: row.get(3)?,
        sucursal_id: row.get(4)?,
    })
}

#[cfg(test)]
mod tests;
