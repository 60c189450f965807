//! SQLite database - schema definitions and connection management
//!
//! This file contains:
//! - Database struct definition
//! - Connection management (new, in_memory, init)
//! - Schema creation
//!
//! Table operations live in the tables/ subdirectory.

use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;

use crate::error::DaoResult;

/// Main database wrapper, one connection serialized by a Mutex
pub struct Database {
    pub(crate) conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database file and initialize schema
    pub fn new(database_url: &str) -> DaoResult<Self> {
        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        log::debug!("Opening database at {}", database_url);
        let conn = Connection::open(database_url)?;
        Self::with_connection(conn)
    }

    /// Private in-memory database, used by tests and tooling
    pub fn in_memory() -> DaoResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> DaoResult<Self> {
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init()?;
        Ok(db)
    }

    /// Create all tables if they don't exist yet
    fn init(&self) -> DaoResult<()> {
        let conn = self.conn.lock();

        // Legacy extensions table; extenfeatures rows carry the feature name in typeval
        conn.execute(
            "CREATE TABLE IF NOT EXISTS extensions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                commented INTEGER NOT NULL DEFAULT 0,
                context TEXT NOT NULL DEFAULT '',
                exten TEXT NOT NULL DEFAULT '',
                type TEXT NOT NULL,
                typeval TEXT NOT NULL DEFAULT '',
                UNIQUE(exten, context)
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS extensions_type_typeval_idx ON extensions (type, typeval)",
            [],
        )?;

        // Feature extensions table (uuid keyed)
        conn.execute(
            "CREATE TABLE IF NOT EXISTS feature_extension (
                uuid TEXT PRIMARY KEY NOT NULL,
                enabled INTEGER NOT NULL DEFAULT 1,
                exten TEXT NOT NULL,
                feature TEXT NOT NULL,
                UNIQUE(exten, feature)
            )",
            [],
        )?;

        log::debug!("Database schema ready");
        Ok(())
    }
}
