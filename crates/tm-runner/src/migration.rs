//! The migration step abstraction.

use crate::error::RunnerResult;
use duckdb::Connection;

/// A single reversible schema (and optionally data) transformation.
///
/// Migrations get a live connection rather than returning SQL, so a step can
/// read rows, transform them in Rust, and write them back.
///
/// Implementations must leave the schema exactly as it was before
/// [`upgrade`](Self::upgrade) when [`downgrade`](Self::downgrade) runs.
pub trait Migration: Send + Sync {
    /// Revision id of this step. Never changes once published.
    fn revision(&self) -> &'static str;

    /// Revision this step builds on, `None` for the first step.
    fn down_revision(&self) -> Option<&'static str>;

    /// One-line summary shown in history and logs.
    fn description(&self) -> &'static str;

    /// Apply the step.
    fn upgrade(&self, conn: &Connection) -> RunnerResult<()>;

    /// Reverse the step.
    fn downgrade(&self, conn: &Connection) -> RunnerResult<()>;
}
