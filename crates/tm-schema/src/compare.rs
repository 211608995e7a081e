//! Snapshot comparison.

use crate::error::SchemaMismatch;
use crate::normalize::equivalent;
use crate::snapshot::Snapshot;

/// Every difference between `left` and `right`.
///
/// Left-side problems come first, in key order; objects only present on the
/// right are collected into one trailing [`SchemaMismatch::AdditionalOnRight`].
pub fn diff(left: &Snapshot, right: &Snapshot) -> Vec<SchemaMismatch> {
    let mut remaining = right.clone().into_entries();
    let mut problems = Vec::new();

    for (key, left_ddl) in left.iter() {
        match remaining.remove(key) {
            None => problems.push(SchemaMismatch::MissingOnRight { key: key.clone() }),
            Some(right_ddl) => {
                if !equivalent(left_ddl, right_ddl.as_deref()) {
                    problems.push(SchemaMismatch::StatementMismatch {
                        key: key.clone(),
                        left: left_ddl.map(str::to_string),
                        right: right_ddl,
                    });
                }
            }
        }
    }

    if !remaining.is_empty() {
        problems.push(SchemaMismatch::AdditionalOnRight {
            keys: remaining.into_keys().collect(),
        });
    }
    problems
}

/// Require the two snapshots to describe the same schema.
///
/// Fails with the first difference: a left key missing on the right, a
/// statement that is not [`equivalent`], or, once every left key has been
/// matched, whatever is left over on the right.
pub fn assert_equal(left: &Snapshot, right: &Snapshot) -> Result<(), SchemaMismatch> {
    match diff(left, right).into_iter().next() {
        None => Ok(()),
        Some(mismatch) => Err(mismatch),
    }
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod tests;
