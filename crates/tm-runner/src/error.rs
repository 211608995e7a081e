//! Error types for the migration runner.

use std::fmt;
use thiserror::Error;
use tm_core::CoreError;

/// Which way a migration step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Apply the step
    Upgrade,
    /// Reverse the step
    Downgrade,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Upgrade => f.write_str("upgrade"),
            Direction::Downgrade => f.write_str("downgrade"),
        }
    }
}

/// Migration runner errors.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Failed to open or create the database (R001).
    #[error("[R001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Bookkeeping table could not be created, read, or written (R002).
    #[error("[R002] Version table error: {0}")]
    VersionTable(String),

    /// A migration step's transformation failed (R003).
    #[error("[R003] {direction} {revision} failed: {source}")]
    StepFailed {
        direction: Direction,
        revision: String,
        #[source]
        source: Box<RunnerError>,
    },

    /// Target lies on the wrong side of the current revision (R004).
    #[error("[R004] Cannot {direction} from {from} to {to}: {reason}")]
    WrongDirection {
        direction: Direction,
        from: String,
        to: String,
        reason: String,
    },

    /// Bookkeeping table names a revision the chain does not know (R005).
    #[error("[R005] Database is at revision '{0}', which is not in the migration chain")]
    UnknownCurrent(String),

    /// Migration helper operation failed (R006).
    #[error("[R006] Migration operation failed: {0}")]
    Operation(String),

    /// Chain or target error from tm-core (R007).
    #[error("[R007] {0}")]
    Core(#[from] CoreError),

    /// DuckDB driver error with preserved source chain (R008).
    #[error("[R008] DuckDB error: {0}")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`RunnerError`].
pub type RunnerResult<T> = Result<T, RunnerError>;

impl From<duckdb::Error> for RunnerError {
    fn from(err: duckdb::Error) -> Self {
        RunnerError::DuckDb(err)
    }
}
