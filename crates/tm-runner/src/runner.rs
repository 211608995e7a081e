//! Chain execution: upgrade, downgrade, and listing.

use crate::connection::Db;
use crate::error::{Direction, RunnerError, RunnerResult};
use crate::migration::Migration;
use crate::version_table::VersionTable;
use duckdb::Connection;
use tm_core::{RevisionChain, RevisionId, Target};

/// Display row for one migration in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationInfo {
    /// Revision id
    pub revision: RevisionId,
    /// Parent revision, `None` for the first migration
    pub down_revision: Option<RevisionId>,
    /// One-line summary
    pub description: String,
}

/// Drives a database up and down a validated migration chain.
pub struct Runner {
    chain: RevisionChain,

    /// Migrations in chain order; `migrations[i]` is `chain.revisions()[i]`
    migrations: Vec<Box<dyn Migration>>,

    version_table: VersionTable,
}

impl Runner {
    /// Validate the migrations into a chain.
    ///
    /// The input order does not matter; parent pointers decide it.
    pub fn new(migrations: Vec<Box<dyn Migration>>, version_table: &str) -> RunnerResult<Self> {
        let links = migrations
            .iter()
            .map(|m| -> RunnerResult<(RevisionId, Option<RevisionId>)> {
                let rev = RevisionId::parse(m.revision())?;
                let parent = m.down_revision().map(RevisionId::parse).transpose()?;
                Ok((rev, parent))
            })
            .collect::<RunnerResult<Vec<_>>>()?;
        let chain = RevisionChain::build(&links)?;

        let mut slots: Vec<Option<Box<dyn Migration>>> = Vec::new();
        slots.resize_with(migrations.len(), || None);
        for migration in migrations {
            // Every revision is in the chain once build() succeeded
            let idx = chain
                .position(migration.revision())
                .ok_or_else(|| RunnerError::UnknownCurrent(migration.revision().to_string()))?;
            slots[idx] = Some(migration);
        }
        let migrations = slots.into_iter().flatten().collect();

        Ok(Self {
            chain,
            migrations,
            version_table: VersionTable::new(version_table)?,
        })
    }

    /// The validated chain
    pub fn chain(&self) -> &RevisionChain {
        &self.chain
    }

    /// Bookkeeping table handle
    pub fn version_table(&self) -> &VersionTable {
        &self.version_table
    }

    /// Every migration in apply order
    pub fn history(&self) -> Vec<MigrationInfo> {
        self.chain
            .revisions()
            .iter()
            .zip(&self.migrations)
            .enumerate()
            .map(|(i, (rev, migration))| MigrationInfo {
                revision: rev.clone(),
                down_revision: i.checked_sub(1).map(|p| self.chain.revisions()[p].clone()),
                description: migration.description().to_string(),
            })
            .collect()
    }

    /// Revision ids from base to `head` inclusive, in apply order.
    pub fn list_migrations(&self, head: &Target) -> RunnerResult<Vec<RevisionId>> {
        Ok(self.chain.walk_to(head)?.to_vec())
    }

    /// The revision recorded in the database, `None` at base.
    pub fn current(&self, db: &Db) -> RunnerResult<Option<RevisionId>> {
        let position = self.current_position(db.conn())?;
        Ok(self.chain.revision_at(position).cloned())
    }

    fn current_position(&self, conn: &Connection) -> RunnerResult<Option<usize>> {
        match self.version_table.read(conn)? {
            None => Ok(None),
            Some(rev) => self
                .chain
                .position(&rev)
                .map(Some)
                .ok_or(RunnerError::UnknownCurrent(rev)),
        }
    }

    /// Apply every upgrade after the current revision up to `target`.
    ///
    /// Returns the revisions applied, in order. The first failing step stops
    /// the walk; steps before it stay applied and recorded.
    pub fn upgrade(&self, db: &Db, target: &Target) -> RunnerResult<Vec<RevisionId>> {
        let conn = db.conn();
        let current = self.current_position(conn)?;
        let to = self.chain.resolve(target, current)?;

        if to < current {
            return Err(RunnerError::WrongDirection {
                direction: Direction::Upgrade,
                from: self.chain.describe(current),
                to: self.chain.describe(to),
                reason: "target is behind the current revision".to_string(),
            });
        }

        let start = current.map_or(0, |i| i + 1);
        let end = to.map_or(0, |i| i + 1);
        if start == end {
            log::debug!("Already at {}", self.chain.describe(current));
            return Ok(Vec::new());
        }

        self.version_table.ensure(conn)?;

        let mut applied = Vec::with_capacity(end - start);
        for idx in start..end {
            let rev = &self.chain.revisions()[idx];
            let migration = &self.migrations[idx];
            log::info!(
                "Running upgrade {} -> {}, {}",
                self.chain.describe(idx.checked_sub(1)),
                rev,
                migration.description()
            );

            migration
                .upgrade(conn)
                .map_err(|e| step_failed(Direction::Upgrade, rev, e))?;
            self.version_table.write(conn, Some(rev))?;
            applied.push(rev.clone());
        }
        Ok(applied)
    }

    /// Apply every downgrade from the current revision back to `target`.
    ///
    /// Returns the revisions reversed, newest first. Reaching base empties the
    /// bookkeeping table but leaves it in place.
    pub fn downgrade(&self, db: &Db, target: &Target) -> RunnerResult<Vec<RevisionId>> {
        let conn = db.conn();
        let current = self.current_position(conn)?;
        let to = self.chain.resolve(target, current)?;

        if to > current {
            return Err(RunnerError::WrongDirection {
                direction: Direction::Downgrade,
                from: self.chain.describe(current),
                to: self.chain.describe(to),
                reason: "target is ahead of the current revision".to_string(),
            });
        }

        let stop = to.map_or(0, |i| i + 1);
        let from = current.map_or(0, |i| i + 1);
        if stop == from {
            log::debug!("Already at {}", self.chain.describe(current));
            return Ok(Vec::new());
        }

        let mut reverted = Vec::with_capacity(from - stop);
        for idx in (stop..from).rev() {
            let rev = &self.chain.revisions()[idx];
            let migration = &self.migrations[idx];
            let parent = idx.checked_sub(1);
            log::info!(
                "Running downgrade {} -> {}, {}",
                rev,
                self.chain.describe(parent),
                migration.description()
            );

            migration
                .downgrade(conn)
                .map_err(|e| step_failed(Direction::Downgrade, rev, e))?;
            self.version_table
                .write(conn, self.chain.revision_at(parent))?;
            reverted.push(rev.clone());
        }
        Ok(reverted)
    }
}

fn step_failed(direction: Direction, revision: &RevisionId, source: RunnerError) -> RunnerError {
    log::warn!("{direction} {revision} failed: {source}");
    RunnerError::StepFailed {
        direction,
        revision: revision.to_string(),
        source: Box::new(source),
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
