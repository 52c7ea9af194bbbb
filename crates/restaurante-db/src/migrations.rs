//! Embedded schema migrations.
//!
//! Each migration is a SQL file compiled into the binary. Applied names are
//! recorded in `_restaurante_migrations`; a migration that is already
//! recorded is skipped, so running the list again on an existing database
//! changes nothing.

use rusqlite::Connection;
use thiserror::Error;

struct Migration {
    name: &'static str,
    sql: &'static str,
}

/// All migrations in order. New migrations are appended here.
const MIGRATIONS: &[Migration] = &[Migration {
    name: "000_init",
    sql: include_str!("migrations/000_init.sql"),
}];

/// Errors that can occur while applying migrations.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// A statement inside a migration failed.
    #[error("migration '{name}' failed: {source}")]
    ExecutionFailed {
        name: String,
        source: rusqlite::Error,
    },

    /// The tracking table could not be queried.
    #[error("failed to check migration state: {0}")]
    StateQuery(rusqlite::Error),
}

/// Applies every pending migration and returns how many were applied.
///
/// # Errors
///
/// Returns `MigrationError` if a migration fails or the tracking table
/// cannot be read. A failed migration is rolled back in full.
pub fn run_migrations(conn: &Connection) -> Result<usize, MigrationError> {
    run_migrations_from_list(conn, MIGRATIONS)
}

fn run_migrations_from_list(
    conn: &Connection,
    migrations: &[Migration],
) -> Result<usize, MigrationError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _restaurante_migrations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )
    .map_err(|e| MigrationError::ExecutionFailed {
        name: "_restaurante_migrations_bootstrap".to_string(),
        source: e,
    })?;

    let mut applied = 0;

    for migration in migrations {
        let already_applied: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM _restaurante_migrations WHERE name = ?1",
                [migration.name],
                |row| row.get(0),
            )
            .map_err(MigrationError::StateQuery)?;

        if already_applied {
            tracing::debug!(migration = migration.name, "migration already applied, skipping");
            continue;
        }

        tracing::info!(migration = migration.name, "applying migration");

        let failed = |e| MigrationError::ExecutionFailed {
            name: migration.name.to_string(),
            source: e,
        };

        let tx = conn.unchecked_transaction().map_err(failed)?;
        tx.execute_batch(migration.sql).map_err(failed)?;
        tx.execute(
            "INSERT INTO _restaurante_migrations (name) VALUES (?1)",
            [migration.name],
        )
        .map_err(failed)?;
        tx.commit().map_err(failed)?;

        applied += 1;
    }

    Ok(applied)
}
