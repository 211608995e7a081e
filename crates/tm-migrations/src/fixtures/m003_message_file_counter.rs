//! Message counters are parsed out of filenames on upgrade and the column
//! is dropped again on downgrade without losing messages.

use super::seed::{column_names, insert_source};
use super::{DowngradeFixture, UpgradeFixture};
use anyhow::ensure;
use duckdb::Connection;

const MESSAGES: [(i32, i32, &str, i32); 4] = [
    (1, 1, "1-impressive_lunatic-msg.gpg", 4),
    (2, 1, "2-impressive_lunatic-msg.gpg", 8),
    (3, 2, "17-concave_sparrow-msg.gpg", 15),
    (4, 2, "concave_sparrow-msg.gpg", 16),
];

pub fn upgrade() -> Box<dyn UpgradeFixture> {
    Box::new(Upgrade)
}

pub fn downgrade() -> Box<dyn DowngradeFixture> {
    Box::new(Downgrade)
}

fn load_sources(conn: &Connection) -> anyhow::Result<()> {
    insert_source(conn, 1, "impressive lunatic")?;
    insert_source(conn, 2, "concave sparrow")
}

/// `(id, filename)` of every message, by id
fn message_files(conn: &Connection) -> anyhow::Result<Vec<(i32, String)>> {
    let rows = conn
        .prepare("SELECT id, filename FROM messages ORDER BY id")?
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn expected_files() -> Vec<(i32, String)> {
    MESSAGES
        .iter()
        .map(|(id, _, filename, _)| (*id, filename.to_string()))
        .collect()
}

struct Upgrade;

impl UpgradeFixture for Upgrade {
    fn load_data(&mut self, conn: &Connection) -> anyhow::Result<()> {
        load_sources(conn)?;
        let mut insert =
            conn.prepare("INSERT INTO messages (id, source_id, filename, size) VALUES (?, ?, ?, ?)")?;
        for (id, source_id, filename, size) in MESSAGES {
            insert.execute(duckdb::params![id, source_id, filename, size])?;
        }
        Ok(())
    }

    fn check_upgrade(&self, conn: &Connection) -> anyhow::Result<()> {
        let counters: Vec<(i32, i32)> = conn
            .prepare("SELECT id, file_counter FROM messages ORDER BY id")?
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_, _>>()?;
        ensure!(
            counters == vec![(1, 1), (2, 2), (3, 17), (4, 0)],
            "unexpected file counters: {counters:?}"
        );

        let files = message_files(conn)?;
        ensure!(files == expected_files(), "messages changed: {files:?}");
        Ok(())
    }
}

struct Downgrade;

impl DowngradeFixture for Downgrade {
    fn load_data(&mut self, conn: &Connection) -> anyhow::Result<()> {
        load_sources(conn)?;
        let mut insert = conn.prepare(
            "INSERT INTO messages (id, source_id, filename, size, file_counter)
             VALUES (?, ?, ?, ?, ?)",
        )?;
        for (id, source_id, filename, size) in MESSAGES {
            let counter = crate::versions::m003_message_file_counter::file_counter(filename);
            insert.execute(duckdb::params![id, source_id, filename, size, counter])?;
        }
        Ok(())
    }

    fn check_downgrade(&self, conn: &Connection) -> anyhow::Result<()> {
        let columns = column_names(conn, "messages")?;
        ensure!(
            !columns.iter().any(|c| c == "file_counter"),
            "file_counter survived the downgrade: {columns:?}"
        );

        let files = message_files(conn)?;
        ensure!(files == expected_files(), "messages lost on downgrade: {files:?}");
        Ok(())
    }
}
