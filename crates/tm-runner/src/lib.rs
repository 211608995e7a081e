//! Migration runner for Tidemark.
//!
//! Owns the DuckDB connection wrapper, the bookkeeping table that records the
//! applied revision, the [`Migration`] trait every step implements, and the
//! [`Runner`] that walks a chain of them up or down.

pub mod connection;
pub mod error;
pub mod migration;
pub mod ops;
pub mod runner;
pub mod version_table;

pub use connection::Db;
pub use error::{Direction, RunnerError, RunnerResult};
pub use migration::Migration;
pub use runner::{MigrationInfo, Runner};
pub use version_table::VersionTable;
