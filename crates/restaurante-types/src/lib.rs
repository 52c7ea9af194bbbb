//! Shared record types for the restaurant management backend.
//!
//! Every row read from the `sucursales`, `empleados` and `proveedores`
//! tables is mapped into one of the typed records defined here at the
//! data-access boundary. The `*Params` types carry the caller-supplied
//! fields for an insert or full replacement; identities are always
//! generated by the store.

mod empleado;
mod proveedor;
mod sucursal;

pub use empleado::{Empleado, EmpleadoParams};
pub use proveedor::{Proveedor, ProveedorParams};
pub use sucursal::{Sucursal, SucursalParams};
