//! Row builders shared by the fixtures.

use duckdb::Connection;

pub(crate) fn insert_source(conn: &Connection, id: i32, designation: &str) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO sources (id, uuid, journalist_designation, last_updated)
         VALUES (?, ?, ?, TIMESTAMP '2024-01-01 12:00:00')",
        duckdb::params![id, uuid::Uuid::new_v4().to_string(), designation],
    )?;
    Ok(())
}

pub(crate) fn insert_user(conn: &Connection, id: i32, username: &str) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO users (id, username) VALUES (?, ?)",
        duckdb::params![id, username],
    )?;
    Ok(())
}

/// Whether `table` exists in the current schema
pub(crate) fn table_exists(conn: &Connection, table: &str) -> anyhow::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT count(*) FROM information_schema.tables
         WHERE table_catalog = current_database() AND table_schema = current_schema()
           AND table_name = ?",
        duckdb::params![table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Column names of `table` in declaration order
pub(crate) fn column_names(conn: &Connection, table: &str) -> anyhow::Result<Vec<String>> {
    let names = conn
        .prepare(
            "SELECT column_name FROM information_schema.columns
             WHERE table_catalog = current_database() AND table_schema = current_schema()
               AND table_name = ?
             ORDER BY ordinal_position",
        )?
        .query_map(duckdb::params![table], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(names)
}
