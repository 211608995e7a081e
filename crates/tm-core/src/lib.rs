//! tm-core - Core library for Tidemark
//!
//! This crate provides the revision identifier type, the validated migration
//! chain, upgrade/downgrade target parsing, and project configuration shared
//! by every other Tidemark crate.

pub mod chain;
pub mod config;
pub mod error;
pub mod revision;
pub mod target;

pub use chain::{ChainLink, RevisionChain};
pub use config::{Config, DatabaseConfig};
pub use error::{CoreError, CoreResult};
pub use revision::RevisionId;
pub use target::Target;
