//! Supplier (proveedor) records.
//!
//! The `proveedores` table exists in the schema but no manager or route
//! reads or writes it yet. These types fix the row shape for when one does.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A supplier associated with a branch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Proveedor {
    pub id: i64,
    pub nombre: String,
    /// Product supplied.
    pub producto: String,
    /// Contract start date.
    pub inicio_contrato: NaiveDate,
    pub sucursal_id: i64,
}

/// Caller-supplied fields for registering a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProveedorParams {
    pub nombre: String,
    pub producto: String,
    pub inicio_contrato: NaiveDate,
    pub sucursal_id: i64,
}
