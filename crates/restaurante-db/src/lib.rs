//! Database layer for the restaurant management backend.
//!
//! Provides the SQLite connection pool (via `r2d2`), scoped connection
//! acquisition and release, and the embedded schema migrations that create
//! the `sucursales`, `empleados` and `proveedores` tables.
//!
//! Handlers never open connections themselves. They receive the pool from
//! application state, [`acquire`] a connection for one unit of work and
//! hand it back with [`release`] (or by dropping it) on every exit path.

mod migrations;
mod pool;

pub use migrations::{run_migrations, MigrationError};
pub use pool::{acquire, create_pool, release, DbConnection, DbPool, DbRuntimeSettings, PoolError};
