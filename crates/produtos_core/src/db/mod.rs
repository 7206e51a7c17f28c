//! SQLite storage bootstrap, connection configuration and schema migrations.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the produtos core.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write application data before migrations succeed.
//! - Every connection is opened fresh and released by drop; there is no pool.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory, open_with_config};

pub type DbResult<T> = Result<T, DbError>;

/// Where product data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    /// Durable single-file database.
    File(PathBuf),
    /// Private in-memory database, dropped with the connection.
    InMemory,
}

/// Connection settings handed to the storage bootstrap.
///
/// Replaces a process-wide URL/credential triple with an explicit value the
/// caller constructs, so tests and production can point at different stores
/// without touching global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub location: StorageLocation,
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            location: StorageLocation::File(PathBuf::from("produtos.db")),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

impl StorageConfig {
    /// Configuration for an in-memory store, used by tests and smoke probes.
    pub fn in_memory() -> Self {
        Self {
            location: StorageLocation::InMemory,
            ..Self::default()
        }
    }

    /// Configuration for a file-backed store at `path`.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            location: StorageLocation::File(path.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug)]
pub enum DbError {
    /// Storage is unreachable or a statement failed at the SQLite layer.
    Sqlite(rusqlite::Error),
    /// The database file was written by a newer binary than this one.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
