//! Branch (sucursal) records.

use serde::{Deserialize, Serialize};

/// A restaurant branch as stored in the `sucursales` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sucursal {
    /// Generated identity.
    pub id: i64,
    /// Display name of the branch.
    pub nombre: String,
    /// Denormalized count of `empleados` rows referencing this branch.
    pub num_empleados: i64,
    /// Supplier count. Declared but never maintained by any operation.
    pub num_proveedores: i64,
    /// Order count. Declared but never maintained by any operation.
    pub num_pedidos: i64,
}

/// Caller-supplied fields for creating or fully replacing a branch.
///
/// `nombre` and `num_empleados` are required on the wire; the supplier and
/// order counters default to zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SucursalParams {
    pub nombre: String,
    pub num_empleados: i64,
    #[serde(default)]
    pub num_proveedores: i64,
    #[serde(default)]
    pub num_pedidos: i64,
}

impl SucursalParams {
    /// Params for a new branch with all counters at zero.
    pub fn new(nombre: impl Into<String>) -> Self {
        Self {
            nombre: nombre.into(),
            num_empleados: 0,
            num_proveedores: 0,
            num_pedidos: 0,
        }
    }
}
