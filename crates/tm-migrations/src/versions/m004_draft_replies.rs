//! 5e2b9c04a7f1: draft replies and their send statuses.
//!
//! The status table is a lookup seeded with every status a draft can have.

use super::m003_message_file_counter;
use duckdb::Connection;
use tm_runner::{ops, Migration, RunnerResult};

pub const REVISION: &str = "5e2b9c04a7f1";

/// Seeded `(id, name)` rows of `reply_send_statuses`
pub const SEND_STATUSES: [(i32, &str); 2] = [(1, "PENDING"), (2, "FAILED")];

const CREATE_REPLY_SEND_STATUSES: &str = "CREATE TABLE reply_send_statuses (
    id INTEGER PRIMARY KEY,
    name VARCHAR NOT NULL
)";

const CREATE_DRAFT_REPLIES: &str = "CREATE TABLE draft_replies (
    id INTEGER PRIMARY KEY,
    uuid VARCHAR NOT NULL,
    created_at TIMESTAMP NOT NULL,
    source_id INTEGER NOT NULL,
    journalist_id INTEGER,
    file_counter INTEGER NOT NULL,
    content VARCHAR,
    send_status_id INTEGER,
    FOREIGN KEY (source_id) REFERENCES sources(id),
    FOREIGN KEY (journalist_id) REFERENCES users(id),
    FOREIGN KEY (send_status_id) REFERENCES reply_send_statuses(id)
)";

pub struct AddDraftReplies;

impl Migration for AddDraftReplies {
    fn revision(&self) -> &'static str {
        REVISION
    }

    fn down_revision(&self) -> Option<&'static str> {
        Some(m003_message_file_counter::REVISION)
    }

    fn description(&self) -> &'static str {
        "Add draft replies and reply send statuses"
    }

    fn upgrade(&self, conn: &Connection) -> RunnerResult<()> {
        conn.execute_batch(CREATE_REPLY_SEND_STATUSES)?;
        ops::create_index(
            conn,
            "uq_reply_send_statuses_name",
            "reply_send_statuses",
            &["name"],
            true,
        )?;

        let mut insert = conn.prepare("INSERT INTO reply_send_statuses (id, name) VALUES (?, ?)")?;
        for (id, name) in SEND_STATUSES {
            insert.execute(duckdb::params![id, name])?;
        }

        conn.execute_batch(CREATE_DRAFT_REPLIES)?;
        ops::create_index(conn, "uq_draft_replies_uuid", "draft_replies", &["uuid"], true)
    }

    fn downgrade(&self, conn: &Connection) -> RunnerResult<()> {
        ops::drop_table(conn, "draft_replies")?;
        ops::drop_table(conn, "reply_send_statuses")
    }
}
