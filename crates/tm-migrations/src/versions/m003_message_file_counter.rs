//! a93e0f6d1b58: number messages by the counter in their filename.
//!
//! Message files are named `<counter>-<designation>-msg.gpg`. The counter
//! moves into its own column; filenames without a numeric prefix get 0.

use super::m002_replies;
use duckdb::Connection;
use tm_runner::{ops, Migration, RunnerResult};

pub const REVISION: &str = "a93e0f6d1b58";

const MESSAGES_WITH_COUNTER: &str = "CREATE TABLE messages (
    id INTEGER PRIMARY KEY,
    source_id INTEGER NOT NULL,
    filename VARCHAR NOT NULL,
    size INTEGER NOT NULL,
    is_read BOOLEAN NOT NULL DEFAULT false,
    file_counter INTEGER NOT NULL,
    FOREIGN KEY (source_id) REFERENCES sources(id)
)";

const MESSAGES_WITHOUT_COUNTER: &str = "CREATE TABLE messages (
    id INTEGER PRIMARY KEY,
    source_id INTEGER NOT NULL,
    filename VARCHAR NOT NULL,
    size INTEGER NOT NULL,
    is_read BOOLEAN NOT NULL DEFAULT false,
    FOREIGN KEY (source_id) REFERENCES sources(id)
)";

const KEPT_COLUMNS: [(&str, &str); 5] = [
    ("id", "id"),
    ("source_id", "source_id"),
    ("filename", "filename"),
    ("size", "size"),
    ("is_read", "is_read"),
];

/// Leading counter of a message filename, 0 when there is none
pub fn file_counter(filename: &str) -> i32 {
    filename
        .split('-')
        .next()
        .and_then(|prefix| prefix.parse().ok())
        .unwrap_or(0)
}

pub struct AddMessageFileCounter;

impl Migration for AddMessageFileCounter {
    fn revision(&self) -> &'static str {
        REVISION
    }

    fn down_revision(&self) -> Option<&'static str> {
        Some(m002_replies::REVISION)
    }

    fn description(&self) -> &'static str {
        "Add file_counter to messages"
    }

    fn upgrade(&self, conn: &Connection) -> RunnerResult<()> {
        let mut columns = KEPT_COLUMNS.to_vec();
        columns.push(("file_counter", "0"));
        ops::recreate_table(conn, "messages", MESSAGES_WITH_COUNTER, &columns)?;

        let rows = conn
            .prepare("SELECT id, filename FROM messages")?
            .query_map([], |row| Ok((row.get::<_, i32>(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let total = rows.len();
        let mut update = conn.prepare("UPDATE messages SET file_counter = ? WHERE id = ?")?;
        for (id, filename) in rows {
            let counter = file_counter(&filename);
            if counter != 0 {
                update.execute(duckdb::params![counter, id])?;
            }
        }
        log::debug!("Numbered {total} messages");
        Ok(())
    }

    fn downgrade(&self, conn: &Connection) -> RunnerResult<()> {
        ops::recreate_table(conn, "messages", MESSAGES_WITHOUT_COUNTER, &KEPT_COLUMNS)
    }
}

#[cfg(test)]
#[path = "m003_message_file_counter_test.rs"]
mod tests;
