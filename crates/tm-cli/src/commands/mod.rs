//! CLI command implementations

pub(crate) mod check;
pub(crate) mod common;
pub(crate) mod current;
pub(crate) mod downgrade;
pub(crate) mod history;
pub(crate) mod snapshot;
pub(crate) mod upgrade;
