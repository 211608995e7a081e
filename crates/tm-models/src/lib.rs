//! tm-models - Declarative schema models
//!
//! Describes a database schema as plain Rust values ([`MetaData`] holding
//! [`Table`]s and [`View`]s), renders it to DuckDB DDL, and builds or tears
//! it down in foreign-key order. Index names come from a
//! [`NamingConvention`] unless an index is named explicitly.
//!
//! [`courier::metadata`] is the canonical schema the courier migration chain
//! must reproduce.

pub mod column;
pub mod courier;
pub mod error;
pub mod metadata;
pub mod naming;
pub mod table;

pub use column::{Column, ColumnType, ForeignKey};
pub use error::{ModelError, ModelResult};
pub use metadata::MetaData;
pub use naming::NamingConvention;
pub use table::{Index, Table, View};
