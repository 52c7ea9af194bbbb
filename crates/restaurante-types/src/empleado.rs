//! Employee (empleado) records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee assigned to exactly one branch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Empleado {
    /// Generated identity.
    pub id: i64,
    pub nombre: String,
    /// Role, e.g. "Mesera" or "Cocinero".
    pub puesto: String,
    /// Hire date, serialized as `YYYY-MM-DD`.
    pub fecha_contratacion: NaiveDate,
    /// The branch this employee belongs to.
    pub sucursal_id: i64,
}

/// Caller-supplied fields for hiring an employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmpleadoParams {
    pub nombre: String,
    pub puesto: String,
    pub fecha_contratacion: NaiveDate,
    pub sucursal_id: i64,
}
