//! Strongly-typed revision identifier.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Symbolic names that can never be used as revision ids.
pub const RESERVED_NAMES: &[&str] = &["base", "head"];

/// Opaque identifier of a single migration.
///
/// Ids are ASCII alphanumerics and underscores, so they can never be confused
/// with a relative target (`+1`, `-2`) or a symbolic one (`head`, `base`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RevisionId(String);

impl RevisionId {
    /// Validate and wrap a revision id.
    pub fn parse(id: impl Into<String>) -> CoreResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::InvalidRevision {
                id,
                reason: "revision id must not be empty".to_string(),
            });
        }
        if let Some(bad) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(CoreError::InvalidRevision {
                reason: format!("unexpected character {bad:?}"),
                id,
            });
        }
        if RESERVED_NAMES.contains(&id.to_ascii_lowercase().as_str()) {
            return Err(CoreError::InvalidRevision {
                reason: "name is reserved for symbolic targets".to_string(),
                id,
            });
        }
        Ok(Self(id))
    }

    /// Wrap a compile-time revision id, panicking if it is invalid.
    ///
    /// Intended for the `&'static str` constants declared by migrations.
    pub fn new(id: &str) -> Self {
        match Self::parse(id) {
            Ok(rev) => rev,
            Err(e) => panic!("{e}"),
        }
    }

    /// Return the underlying id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RevisionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for RevisionId {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RevisionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RevisionId {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<RevisionId> for String {
    fn from(rev: RevisionId) -> Self {
        rev.0
    }
}

impl PartialEq<str> for RevisionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RevisionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[path = "revision_test.rs"]
mod tests;
