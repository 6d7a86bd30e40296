//! `DuckDB` connection setup.

use std::path::Path;

use ::duckdb::{Config, Connection};

/// Access mode for database connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Read-only access. Scripts always open the store this way.
    ReadOnly,
    /// Read-write access, used to build fixture databases.
    ReadWrite,
}

/// Open a new database connection in the requested mode.
///
/// # Errors
/// Returns an error if the database file cannot be opened or configured.
pub fn open_connection(path: &Path, mode: AccessMode) -> Result<Connection, ::duckdb::Error> {
    let connection = match mode {
        AccessMode::ReadOnly => {
            let config = Config::default().access_mode(::duckdb::AccessMode::ReadOnly)?;
            Connection::open_with_flags(path, config)?
        }
        AccessMode::ReadWrite => Connection::open(path)?,
    };
    configure_connection(&connection)?;
    Ok(connection)
}

/// Configure a database connection with appropriate settings.
///
/// # Errors
/// Returns an error if configuration SQL fails to execute.
fn configure_connection(connection: &Connection) -> Result<(), ::duckdb::Error> {
    // Progress output would land on stderr, which the launching host treats as a failure.
    connection.execute_batch("PRAGMA disable_progress_bar;")?;
    Ok(())
}
