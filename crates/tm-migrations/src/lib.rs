//! tm-migrations - The courier migration chain
//!
//! One module per revision under [`versions`], each a [`Migration`] with its
//! own upgrade and downgrade. [`all_migrations`] hands the chain to a
//! [`Runner`]; the order comes from the parent pointers, not from the list.
//!
//! With the `test-support` feature, [`fixtures`] provides the data checks
//! for the steps that move rows around.

pub mod versions;

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;

use tm_runner::{Migration, Runner, RunnerResult};

/// Default bookkeeping table name
pub const DEFAULT_VERSION_TABLE: &str = "tidemark_version";

/// Every courier migration.
pub fn all_migrations() -> Vec<Box<dyn Migration>> {
    versions::all()
}

/// A runner over the courier chain recording into `version_table`.
pub fn runner(version_table: &str) -> RunnerResult<Runner> {
    Runner::new(all_migrations(), version_table)
}
