//! Schema operations shared by migration steps.
//!
//! DuckDB refuses most `ALTER TABLE` forms on tables that carry indexes or
//! take part in foreign keys, so column changes go through
//! [`recreate_table`]: copy out, drop, create with the new definition, copy
//! back.

use crate::error::{RunnerError, RunnerResult};
use duckdb::Connection;

/// Prefix for the scratch table used by [`recreate_table`].
const BATCH_PREFIX: &str = "_tm_batch_";

/// `CREATE [UNIQUE] INDEX name ON table(col, ...)`
pub fn create_index(
    conn: &Connection,
    name: &str,
    table: &str,
    columns: &[&str],
    unique: bool,
) -> RunnerResult<()> {
    if columns.is_empty() {
        return Err(RunnerError::Operation(format!(
            "index {name} on {table} needs at least one column"
        )));
    }
    let unique = if unique { "UNIQUE " } else { "" };
    execute(
        conn,
        &format!(
            "CREATE {unique}INDEX {name} ON {table}({})",
            columns.join(", ")
        ),
    )
}

/// `DROP INDEX name`
pub fn drop_index(conn: &Connection, name: &str) -> RunnerResult<()> {
    execute(conn, &format!("DROP INDEX {name}"))
}

/// `DROP TABLE name`; the table's indexes go with it.
pub fn drop_table(conn: &Connection, name: &str) -> RunnerResult<()> {
    execute(conn, &format!("DROP TABLE {name}"))
}

/// Rebuild `table` from `create_sql`, carrying its rows across.
///
/// `columns` maps each column of the new table to a SQL expression over the
/// old table's columns (usually just the column name). Indexes on the old
/// table are dropped with it; the caller recreates the ones it still wants.
/// The table must not be referenced by another table's foreign key.
pub fn recreate_table(
    conn: &Connection,
    table: &str,
    create_sql: &str,
    columns: &[(&str, &str)],
) -> RunnerResult<()> {
    let scratch = format!("{BATCH_PREFIX}{table}");
    log::debug!("Recreating table {table} via {scratch}");

    execute(
        conn,
        &format!("CREATE TEMP TABLE {scratch} AS SELECT * FROM {table}"),
    )?;
    execute(conn, &format!("DROP TABLE {table}"))?;
    execute(conn, create_sql)?;

    if !columns.is_empty() {
        let targets: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
        let sources: Vec<&str> = columns.iter().map(|(_, expr)| *expr).collect();
        execute(
            conn,
            &format!(
                "INSERT INTO {table} ({}) SELECT {} FROM {scratch}",
                targets.join(", "),
                sources.join(", ")
            ),
        )?;
    }

    execute(conn, &format!("DROP TABLE {scratch}"))
}

fn execute(conn: &Connection, sql: &str) -> RunnerResult<()> {
    conn.execute_batch(sql)
        .map_err(|e| RunnerError::Operation(format!("{e}: {sql}")))
}

#[cfg(test)]
#[path = "ops_test.rs"]
mod tests;
