//! DDL token normalization.
//!
//! Two generators rarely agree on layout. One writes
//!
//! ```sql
//! column1 VARCHAR NOT NULL, column2 VARCHAR NOT NULL
//! ```
//!
//! and another
//!
//! ```sql
//! "column1" VARCHAR NOT NULL,
//! "column2" VARCHAR NOT NULL
//! ```
//!
//! Comparing sorted token lists absorbs both differences. It also treats
//! statements whose columns are declared in a different order as equal.

/// Split on whitespace runs and strip commas and double quotes from each
/// token. A lone `,` stays behind as an empty token, so `a , b` and `a b`
/// still differ.
pub fn normalize(ddl: &str) -> Vec<String> {
    ddl.split_whitespace()
        .map(|token| token.replace(|c: char| c == ',' || c == '"', ""))
        .collect()
}

/// Whether two statements describe the same object.
///
/// Two absent statements are equal (objects the catalog keeps no DDL for);
/// an absent statement never equals a present one.
pub fn equivalent(left: Option<&str>, right: Option<&str>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => sorted_tokens(left) == sorted_tokens(right),
        _ => false,
    }
}

fn sorted_tokens(ddl: &str) -> Vec<String> {
    let mut tokens = normalize(ddl);
    tokens.sort_unstable();
    tokens
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
