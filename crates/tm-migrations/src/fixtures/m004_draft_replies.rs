//! Send statuses are seeded on upgrade and drafts can point at them; the
//! downgrade drops both tables and leaves replies alone.

use super::seed::{insert_source, insert_user, table_exists};
use super::{DowngradeFixture, UpgradeFixture};
use crate::versions::m004_draft_replies::SEND_STATUSES;
use anyhow::ensure;
use duckdb::Connection;

pub fn upgrade() -> Box<dyn UpgradeFixture> {
    Box::new(Upgrade)
}

pub fn downgrade() -> Box<dyn DowngradeFixture> {
    Box::new(Downgrade::default())
}

fn load_reply(conn: &Connection) -> anyhow::Result<()> {
    insert_user(conn, 1, "dellsberg")?;
    insert_source(conn, 1, "impressive lunatic")?;
    conn.execute_batch(
        "INSERT INTO replies (id, source_id, journalist_id, filename, size)
         VALUES (1, 1, 1, '3-impressive_lunatic-reply.gpg', 512)",
    )?;
    Ok(())
}

fn reply_count(conn: &Connection) -> anyhow::Result<i64> {
    Ok(conn.query_row("SELECT count(*) FROM replies", [], |row| row.get(0))?)
}

struct Upgrade;

impl UpgradeFixture for Upgrade {
    fn load_data(&mut self, conn: &Connection) -> anyhow::Result<()> {
        load_reply(conn)
    }

    fn check_upgrade(&self, conn: &Connection) -> anyhow::Result<()> {
        let statuses: Vec<(i32, String)> = conn
            .prepare("SELECT id, name FROM reply_send_statuses ORDER BY id")?
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_, _>>()?;
        let expected: Vec<(i32, String)> = SEND_STATUSES
            .iter()
            .map(|(id, name)| (*id, name.to_string()))
            .collect();
        ensure!(statuses == expected, "unexpected send statuses: {statuses:?}");

        let (pending, _) = SEND_STATUSES[0];
        conn.execute(
            "INSERT INTO draft_replies
                 (id, uuid, created_at, source_id, journalist_id, file_counter, content, send_status_id)
             VALUES (1, ?, TIMESTAMP '2024-01-02 08:30:00', 1, 1, 4, 'draft', ?)",
            duckdb::params![uuid::Uuid::new_v4().to_string(), pending],
        )?;

        ensure!(reply_count(conn)? == 1, "replies changed on upgrade");
        Ok(())
    }
}

#[derive(Default)]
struct Downgrade {
    replies: i64,
}

impl DowngradeFixture for Downgrade {
    fn load_data(&mut self, conn: &Connection) -> anyhow::Result<()> {
        load_reply(conn)?;
        let (failed, _) = SEND_STATUSES[1];
        conn.execute(
            "INSERT INTO draft_replies
                 (id, uuid, created_at, source_id, file_counter, send_status_id)
             VALUES (1, ?, TIMESTAMP '2024-01-02 08:30:00', 1, 4, ?)",
            duckdb::params![uuid::Uuid::new_v4().to_string(), failed],
        )?;
        self.replies = reply_count(conn)?;
        Ok(())
    }

    fn check_downgrade(&self, conn: &Connection) -> anyhow::Result<()> {
        for table in ["draft_replies", "reply_send_statuses"] {
            ensure!(!table_exists(conn, table)?, "{table} survived the downgrade");
        }
        let replies = reply_count(conn)?;
        ensure!(
            replies == self.replies,
            "expected {} replies after downgrade, found {replies}",
            self.replies
        );
        Ok(())
    }
}
