//! Shared helpers for the migration scenario tests.

#![allow(dead_code)]

use duckdb::Connection;
use tempfile::TempDir;
use tm_core::{RevisionId, Target};
use tm_migrations::DEFAULT_VERSION_TABLE;
use tm_runner::{Db, Runner};
use tm_schema::{capture_current, Snapshot};

/// A fresh on-disk database inside its own temp directory, removed on drop.
pub struct ScratchDb {
    pub db: Db,
    _dir: TempDir,
}

impl ScratchDb {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let db = Db::open(&dir.path().join("scratch.duckdb")).expect("open scratch database");
        Self { db, _dir: dir }
    }

    pub fn conn(&self) -> &Connection {
        self.db.conn()
    }

    pub fn snapshot(&self) -> Snapshot {
        capture_current(self.conn()).expect("capture schema")
    }

    pub fn upgrade(&self, runner: &Runner, target: Target) {
        runner
            .upgrade(&self.db, &target)
            .unwrap_or_else(|e| panic!("upgrade to {target} failed: {e}"));
    }

    pub fn downgrade(&self, runner: &Runner, target: Target) {
        runner
            .downgrade(&self.db, &target)
            .unwrap_or_else(|e| panic!("downgrade to {target} failed: {e}"));
    }

    pub fn current(&self, runner: &Runner) -> Option<RevisionId> {
        runner.current(&self.db).expect("read current revision")
    }
}

pub fn courier_runner() -> Runner {
    tm_migrations::runner(DEFAULT_VERSION_TABLE).expect("courier chain is valid")
}

pub fn revision(id: &RevisionId) -> Target {
    Target::Revision(id.to_string())
}

/// Schema built straight from the canonical models.
pub fn model_snapshot() -> Snapshot {
    let scratch = ScratchDb::new();
    tm_models::courier::metadata()
        .create_all(scratch.conn())
        .expect("create model schema");
    scratch.snapshot()
}

/// Every revision of the courier chain, base first
pub fn all_revisions(runner: &Runner) -> Vec<RevisionId> {
    runner
        .list_migrations(&Target::Head)
        .expect("list migrations")
}
