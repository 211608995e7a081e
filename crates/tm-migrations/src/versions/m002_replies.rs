//! 8c41d2b7e6a3: journalist replies.

use super::m001_initial_schema;
use duckdb::Connection;
use tm_runner::{ops, Migration, RunnerResult};

pub const REVISION: &str = "8c41d2b7e6a3";

const CREATE_REPLIES: &str = "CREATE TABLE replies (
    id INTEGER PRIMARY KEY,
    source_id INTEGER NOT NULL,
    journalist_id INTEGER,
    filename VARCHAR NOT NULL,
    size INTEGER,
    FOREIGN KEY (source_id) REFERENCES sources(id),
    FOREIGN KEY (journalist_id) REFERENCES users(id)
)";

pub struct AddReplies;

impl Migration for AddReplies {
    fn revision(&self) -> &'static str {
        REVISION
    }

    fn down_revision(&self) -> Option<&'static str> {
        Some(m001_initial_schema::REVISION)
    }

    fn description(&self) -> &'static str {
        "Add replies"
    }

    fn upgrade(&self, conn: &Connection) -> RunnerResult<()> {
        conn.execute_batch(CREATE_REPLIES)?;
        ops::create_index(conn, "ix_replies_source_id", "replies", &["source_id"], false)
    }

    fn downgrade(&self, conn: &Connection) -> RunnerResult<()> {
        ops::drop_index(conn, "ix_replies_source_id")?;
        ops::drop_table(conn, "replies")
    }
}
