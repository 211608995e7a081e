//! Error types for schema capture and comparison.

use crate::snapshot::SchemaKey;
use thiserror::Error;

/// Errors raised while reading a schema snapshot.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Catalog query failed (S001).
    #[error("[S001] Catalog query failed: {0}")]
    CatalogQuery(String),

    /// Catalog returned an object kind we do not model (S002).
    #[error("[S002] Unknown schema object kind '{0}'")]
    UnknownKind(String),

    /// Two catalog rows share a key (S003).
    #[error("[S003] Duplicate schema object {0}")]
    DuplicateKey(SchemaKey),

    /// DuckDB driver error with preserved source chain (S004).
    #[error("[S004] DuckDB error: {0}")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`SchemaError`].
pub type SchemaResult<T> = Result<T, SchemaError>;

impl From<duckdb::Error> for SchemaError {
    fn from(err: duckdb::Error) -> Self {
        SchemaError::DuckDb(err)
    }
}

/// A difference between two snapshots.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaMismatch {
    /// Object present on the left side only (S010).
    #[error("[S010] Left contained {key} but right did not")]
    MissingOnRight { key: SchemaKey },

    /// Object present on both sides with different statements (S011).
    #[error(
        "[S011] Schema for {key} did not match:\nLeft:\n{}\nRight:\n{}",
        show(.left),
        show(.right)
    )]
    StatementMismatch {
        key: SchemaKey,
        left: Option<String>,
        right: Option<String>,
    },

    /// Objects present on the right side only (S012).
    #[error("[S012] Right had additional objects: {}", join_keys(.keys))]
    AdditionalOnRight { keys: Vec<SchemaKey> },
}

fn show(ddl: &Option<String>) -> &str {
    ddl.as_deref().unwrap_or("<no statement>")
}

fn join_keys(keys: &[SchemaKey]) -> String {
    keys.iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
