//! Upgrade/downgrade target parsing
//!
//! Accepted forms:
//! - `head` - the newest revision in the chain
//! - `base` - the empty schema, before any revision
//! - `+N` / `-N` - N steps forward or backward from the current revision
//! - `<revision>` - a revision id, or any unique prefix of one

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// Where an upgrade or downgrade should stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Before the first revision.
    Base,
    /// The last revision of the chain.
    Head,
    /// A revision id or unique prefix of one; resolved against the chain.
    Revision(String),
    /// Signed step count relative to the current revision.
    Relative(i64),
}

impl Target {
    /// Parse a target string
    pub fn parse(target: &str) -> CoreResult<Self> {
        let target = target.trim();
        if target.is_empty() {
            return Err(CoreError::InvalidTarget {
                target: target.to_string(),
                reason: "target must not be empty".to_string(),
            });
        }

        if target.eq_ignore_ascii_case("head") {
            return Ok(Target::Head);
        }
        if target.eq_ignore_ascii_case("base") {
            return Ok(Target::Base);
        }

        if target.starts_with('+') || target.starts_with('-') {
            let offset: i64 = target.parse().map_err(|_| CoreError::InvalidTarget {
                target: target.to_string(),
                reason: "relative targets look like +1 or -2".to_string(),
            })?;
            return Ok(Target::Relative(offset));
        }

        if let Some(bad) = target
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(CoreError::InvalidTarget {
                target: target.to_string(),
                reason: format!("unexpected character {bad:?} in revision"),
            });
        }
        Ok(Target::Revision(target.to_string()))
    }
}

impl FromStr for Target {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::parse(s)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Base => f.write_str("base"),
            Target::Head => f.write_str("head"),
            Target::Revision(rev) => f.write_str(rev),
            Target::Relative(offset) => write!(f, "{offset:+}"),
        }
    }
}

#[cfg(test)]
#[path = "target_test.rs"]
mod tests;
