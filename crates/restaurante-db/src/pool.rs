//! Connection pool creation and scoped connection handling.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use std::time::Duration;
use thiserror::Error;

/// Runtime tunables for SQLite connection behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbRuntimeSettings {
    /// Busy timeout for SQLite connections, in milliseconds.
    pub busy_timeout_ms: u64,

    /// Maximum number of pooled SQLite connections.
    pub pool_max_size: u32,
}

impl Default for DbRuntimeSettings {
    fn default() -> Self {
        Self {
            busy_timeout_ms: 5_000,
            pool_max_size: 8,
        }
    }
}

/// A type alias for the SQLite connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// A connection checked out of the pool. Dropping it returns it.
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Errors that can occur when creating the pool or checking out a connection.
#[derive(Debug, Error)]
pub enum PoolError {
    /// Failed to build the connection pool.
    #[error("failed to create database connection pool: {0}")]
    PoolInit(r2d2::Error),

    /// No connection could be obtained from the pool.
    #[error("database connection error: {0}")]
    Acquire(r2d2::Error),
}

/// Creates a SQLite connection pool with WAL mode and foreign keys enabled.
///
/// The database file is created if it does not exist. Use `:memory:` for an
/// in-memory database; note that every pooled connection then sees its own
/// private database, so tests sharing state should use a file or a pool of
/// size one.
///
/// # Errors
///
/// Returns `PoolError::PoolInit` if the connection pool cannot be created.
pub fn create_pool(db_path: &str, settings: DbRuntimeSettings) -> Result<DbPool, PoolError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_FULL_MUTEX;

    let manager = SqliteConnectionManager::file(db_path)
        .with_flags(flags)
        .with_init(move |conn| {
            // Busy timeout first: concurrent pool initialisation races on the
            // journal mode switch.
            conn.busy_timeout(Duration::from_millis(settings.busy_timeout_ms))?;
            // In-memory databases report "memory", which is fine.
            let journal_mode: String =
                conn.query_row("PRAGMA journal_mode = WAL;", [], |row| row.get(0))?;
            if journal_mode != "wal" && journal_mode != "memory" {
                return Err(rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
                    Some(format!(
                        "failed to set WAL journal mode, got: {}",
                        journal_mode
                    )),
                ));
            }
            conn.execute_batch("PRAGMA foreign_keys = ON;")
        });

    Pool::builder()
        .max_size(settings.pool_max_size)
        .build(manager)
        .map_err(PoolError::PoolInit)
}

/// Checks a connection out of the pool for one unit of work.
///
/// Failures are logged here; callers only decide how to surface them.
///
/// # Errors
///
/// Returns `PoolError::Acquire` if the pool cannot hand out a connection
/// within its timeout.
pub fn acquire(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().map_err(|e| {
        tracing::warn!(error = %e, "failed to acquire database connection");
        PoolError::Acquire(e)
    })
}

/// Returns a connection to the pool.
///
/// Equivalent to dropping it; provided so the end of a unit of work reads
/// explicitly at call sites.
pub fn release(conn: DbConnection) {
    drop(conn);
    tracing::trace!("database connection released");
}
