//! Database connection wrapper.
//!
//! [`Db`] owns a DuckDB [`Connection`] and is the handle the runner, the
//! schema checker, and data fixtures are all given.

use crate::error::{RunnerError, RunnerResult};
use duckdb::Connection;
use std::path::Path;
use tm_core::config::is_plain_identifier;

/// Wrapper around a DuckDB connection to a migrated database.
///
/// Single-threaded: migrations run sequentially against one connection.
pub struct Db {
    conn: Connection,
}

impl Db {
    /// Open (or create) the database at `path`.
    pub fn open(path: &Path) -> RunnerResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| RunnerError::ConnectionError(format!("{e}: {}", path.display())))?;
        log::debug!("Opened database {}", path.display());
        Ok(Self { conn })
    }

    /// Create an empty in-memory database.
    pub fn open_memory() -> RunnerResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| RunnerError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Make `schema` the default for unqualified names, creating it if needed.
    ///
    /// `main` always exists and is the default, so it is a no-op.
    pub fn use_schema(&self, schema: &str) -> RunnerResult<()> {
        if schema == "main" {
            return Ok(());
        }
        if !is_plain_identifier(schema) {
            return Err(RunnerError::ConnectionError(format!(
                "invalid schema name '{schema}'"
            )));
        }
        self.conn.execute_batch(&format!(
            "CREATE SCHEMA IF NOT EXISTS {schema}; SET schema = '{schema}';"
        ))?;
        Ok(())
    }

    /// Name of the schema unqualified names resolve to.
    pub fn current_schema(&self) -> RunnerResult<String> {
        let schema: String = self
            .conn
            .query_row("SELECT current_schema()", [], |row| row.get(0))?;
        Ok(schema)
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
