//! 2f5a1c7e9b04: users, sources, and messages.

use duckdb::Connection;
use tm_runner::{ops, Migration, RunnerResult};

pub const REVISION: &str = "2f5a1c7e9b04";

const CREATE_USERS: &str = "CREATE TABLE users (
    id INTEGER PRIMARY KEY,
    username VARCHAR NOT NULL,
    firstname VARCHAR,
    lastname VARCHAR
)";

const CREATE_SOURCES: &str = "CREATE TABLE sources (
    id INTEGER PRIMARY KEY,
    uuid VARCHAR NOT NULL,
    journalist_designation VARCHAR NOT NULL,
    last_updated TIMESTAMP,
    is_starred BOOLEAN NOT NULL DEFAULT false,
    interaction_count INTEGER NOT NULL DEFAULT 0
)";

const CREATE_MESSAGES: &str = "CREATE TABLE messages (
    id INTEGER PRIMARY KEY,
    source_id INTEGER NOT NULL,
    filename VARCHAR NOT NULL,
    size INTEGER NOT NULL,
    is_read BOOLEAN NOT NULL DEFAULT false,
    FOREIGN KEY (source_id) REFERENCES sources(id)
)";

pub struct InitialSchema;

impl Migration for InitialSchema {
    fn revision(&self) -> &'static str {
        REVISION
    }

    fn down_revision(&self) -> Option<&'static str> {
        None
    }

    fn description(&self) -> &'static str {
        "Initial schema: users, sources, messages"
    }

    fn upgrade(&self, conn: &Connection) -> RunnerResult<()> {
        conn.execute_batch(CREATE_USERS)?;
        ops::create_index(conn, "uq_users_username", "users", &["username"], true)?;
        conn.execute_batch(CREATE_SOURCES)?;
        ops::create_index(conn, "uq_sources_uuid", "sources", &["uuid"], true)?;
        conn.execute_batch(CREATE_MESSAGES)?;
        Ok(())
    }

    fn downgrade(&self, conn: &Connection) -> RunnerResult<()> {
        ops::drop_table(conn, "messages")?;
        ops::drop_table(conn, "sources")?;
        ops::drop_table(conn, "users")
    }
}
