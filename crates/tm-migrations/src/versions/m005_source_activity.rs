//! c1f7a6e3d92b: source activity view and its supporting index.

use super::m004_draft_replies;
use duckdb::Connection;
use tm_runner::{ops, Migration, RunnerResult};

pub const REVISION: &str = "c1f7a6e3d92b";

const CREATE_SOURCE_ACTIVITY: &str = "CREATE VIEW v_source_activity AS \
SELECT sources.id AS source_id, \
count(messages.id) AS message_count, \
max(sources.last_updated) AS last_updated \
FROM sources LEFT JOIN messages ON messages.source_id = sources.id \
GROUP BY sources.id";

pub struct AddSourceActivity;

impl Migration for AddSourceActivity {
    fn revision(&self) -> &'static str {
        REVISION
    }

    fn down_revision(&self) -> Option<&'static str> {
        Some(m004_draft_replies::REVISION)
    }

    fn description(&self) -> &'static str {
        "Add v_source_activity and index sources.last_updated"
    }

    fn upgrade(&self, conn: &Connection) -> RunnerResult<()> {
        ops::create_index(
            conn,
            "ix_sources_last_updated",
            "sources",
            &["last_updated"],
            false,
        )?;
        conn.execute_batch(CREATE_SOURCE_ACTIVITY)?;
        Ok(())
    }

    fn downgrade(&self, conn: &Connection) -> RunnerResult<()> {
        conn.execute_batch("DROP VIEW v_source_activity")?;
        ops::drop_index(conn, "ix_sources_last_updated")
    }
}
