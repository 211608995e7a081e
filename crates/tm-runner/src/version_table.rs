//! Bookkeeping table that records the applied revision.
//!
//! The table holds at most one row. It is created the first time an upgrade
//! has work to do and is never dropped by the runner, so a database that was
//! upgraded and then fully downgraded still carries an empty table.

use crate::error::{RunnerError, RunnerResult};
use duckdb::Connection;
use tm_core::config::is_plain_identifier;
use tm_core::RevisionId;

/// Handle on the bookkeeping table.
#[derive(Debug, Clone)]
pub struct VersionTable {
    name: String,
}

impl VersionTable {
    /// Name the table; only plain identifiers are accepted.
    pub fn new(name: &str) -> RunnerResult<Self> {
        if !is_plain_identifier(name) {
            return Err(RunnerError::VersionTable(format!(
                "invalid table name '{name}'"
            )));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the table exists in the current schema.
    pub fn exists(&self, conn: &Connection) -> RunnerResult<bool> {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM information_schema.tables \
                 WHERE table_catalog = current_database() \
                   AND table_schema = current_schema() \
                   AND table_name = ?",
                duckdb::params![self.name],
                |row| row.get(0),
            )
            .map_err(|e| {
                RunnerError::VersionTable(format!("failed to look up {}: {e}", self.name))
            })?;
        Ok(count > 0)
    }

    /// Create the table if it does not exist.
    pub fn ensure(&self, conn: &Connection) -> RunnerResult<()> {
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} (version_num VARCHAR NOT NULL);",
            self.name
        ))
        .map_err(|e| RunnerError::VersionTable(format!("failed to create {}: {e}", self.name)))?;
        Ok(())
    }

    /// Read the recorded revision; `None` when missing or empty.
    pub fn read(&self, conn: &Connection) -> RunnerResult<Option<String>> {
        if !self.exists(conn)? {
            return Ok(None);
        }

        let mut stmt = conn
            .prepare(&format!("SELECT version_num FROM {}", self.name))
            .map_err(|e| RunnerError::VersionTable(format!("failed to read {}: {e}", self.name)))?;
        let mut versions: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .map_err(|e| RunnerError::VersionTable(format!("failed to read {}: {e}", self.name)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RunnerError::VersionTable(format!("row error: {e}")))?;

        match versions.len() {
            0 => Ok(None),
            1 => Ok(versions.pop()),
            n => Err(RunnerError::VersionTable(format!(
                "{} holds {n} rows, expected at most one: {}",
                self.name,
                versions.join(", ")
            ))),
        }
    }

    /// Replace the recorded revision; `None` empties the table.
    pub fn write(&self, conn: &Connection, revision: Option<&RevisionId>) -> RunnerResult<()> {
        conn.execute(&format!("DELETE FROM {}", self.name), [])
            .map_err(|e| {
                RunnerError::VersionTable(format!("failed to clear {}: {e}", self.name))
            })?;

        if let Some(rev) = revision {
            conn.execute(
                &format!("INSERT INTO {} (version_num) VALUES (?)", self.name),
                duckdb::params![rev.as_str()],
            )
            .map_err(|e| {
                RunnerError::VersionTable(format!("failed to record revision {rev}: {e}"))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "version_table_test.rs"]
mod tests;
