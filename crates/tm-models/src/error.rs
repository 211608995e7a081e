//! Error types for tm-models

use thiserror::Error;

/// Errors raised while validating or building a model schema
#[derive(Error, Debug)]
pub enum ModelError {
    /// MD001: Two tables or views share a name
    #[error("[MD001] Duplicate schema object: {name}")]
    DuplicateObject { name: String },

    /// MD002: Table declares no columns
    #[error("[MD002] Table '{table}' has no columns")]
    NoColumns { table: String },

    /// MD003: Column declared twice in one table
    #[error("[MD003] Duplicate column '{column}' in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    /// MD004: Index or foreign key names a column the table does not have
    #[error("[MD004] Table '{table}' has no column '{column}'")]
    UnknownColumn { table: String, column: String },

    /// MD005: Foreign key points at a missing table or column
    #[error("[MD005] Foreign key {table}.{column} references unknown {target}")]
    UnknownReference {
        table: String,
        column: String,
        target: String,
    },

    /// MD006: Index without columns
    #[error("[MD006] Index on table '{table}' has no columns")]
    EmptyIndex { table: String },

    /// MD007: Naming template could not be rendered
    #[error("[MD007] Invalid naming template '{template}': {reason}")]
    Template { template: String, reason: String },

    /// MD008: Foreign keys form a cycle between tables
    #[error("[MD008] Circular foreign keys involving table '{table}'")]
    ForeignKeyCycle { table: String },

    /// MD009: DDL statement failed against the database
    #[error("[MD009] Statement failed: {source}\n{sql}")]
    Statement {
        sql: String,
        #[source]
        source: duckdb::Error,
    },
}

/// Result type alias for ModelError
pub type ModelResult<T> = Result<T, ModelError>;
