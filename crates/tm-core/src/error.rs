//! Error types for tm-core

use thiserror::Error;

/// Core error type for Tidemark
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Revision identifier is malformed or reserved
    #[error("[E003] Invalid revision id '{id}': {reason}")]
    InvalidRevision { id: String, reason: String },

    /// E004: Two migrations share a revision id
    #[error("[E004] Duplicate revision: {id}")]
    DuplicateRevision { id: String },

    /// E005: A migration points at a parent that is not in the chain
    #[error("[E005] Revision '{id}' has unknown parent '{parent}'")]
    UnknownParent { id: String, parent: String },

    /// E006: The chain does not have exactly one root
    #[error("[E006] Revision chain must have exactly one base revision, found {count}: {roots}")]
    RootCount { count: usize, roots: String },

    /// E007: A revision has more than one child
    #[error("[E007] Revision '{parent}' branches into: {children}")]
    Branch { parent: String, children: String },

    /// E008: Parent pointers form a cycle
    #[error("[E008] Circular revision chain detected: {cycle}")]
    CircularChain { cycle: String },

    /// E009: Revision not present in the chain
    #[error("[E009] Unknown revision: {id}")]
    UnknownRevision { id: String },

    /// E010: Revision prefix matches more than one revision
    #[error("[E010] Ambiguous revision prefix '{prefix}' matches: {candidates}")]
    AmbiguousRevision { prefix: String, candidates: String },

    /// E011: Target string could not be parsed
    #[error("[E011] Invalid target '{target}': {reason}")]
    InvalidTarget { target: String, reason: String },

    /// E012: Relative target walks off either end of the chain
    #[error("[E012] Relative target {offset:+} from {from} is out of range")]
    RelativeOutOfRange { offset: i64, from: String },

    /// IO error with file path context
    #[error("IO error at {path}: {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
