//! tm-schema - Schema snapshots and equivalence checking
//!
//! Captures every table, index, and view of a DuckDB schema as its defining
//! DDL statement and compares two such snapshots while ignoring cosmetic
//! formatting: whitespace, commas, identifier quoting, and token order within
//! a statement.

pub mod compare;
pub mod error;
pub mod normalize;
pub mod snapshot;

pub use compare::{assert_equal, diff};
pub use error::{SchemaError, SchemaMismatch, SchemaResult};
pub use normalize::{equivalent, normalize};
pub use snapshot::{capture, capture_current, ObjectKind, SchemaKey, Snapshot};
