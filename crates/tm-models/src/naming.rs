//! Naming conventions for generated index names.
//!
//! Templates use `%(token)s` placeholders:
//!
//! | token | expands to |
//! |---|---|
//! | `table_name` | the table name |
//! | `column_0_name` | the first indexed column |
//! | `column_0_label` | `<table>_<first column>` |
//! | `column_0N_name` | every indexed column, concatenated |
//! | `column_0_N_name` | every indexed column, joined with `_` |

use crate::error::{ModelError, ModelResult};
use crate::table::Index;

/// Template for plain indexes
pub const DEFAULT_INDEX_TEMPLATE: &str = "ix_%(column_0_label)s";

/// Template for unique indexes
pub const DEFAULT_UNIQUE_TEMPLATE: &str = "uq_%(table_name)s_%(column_0_name)s";

/// Index naming templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    pub index: String,
    pub unique: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_TEMPLATE, DEFAULT_UNIQUE_TEMPLATE)
    }
}

impl NamingConvention {
    pub fn new(index: impl Into<String>, unique: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            unique: unique.into(),
        }
    }

    /// Name for `index` on `table`: the explicit name if set, otherwise the
    /// rendered template for its kind.
    pub fn index_name(&self, table: &str, index: &Index) -> ModelResult<String> {
        if let Some(name) = &index.name {
            return Ok(name.clone());
        }
        if index.columns.is_empty() {
            return Err(ModelError::EmptyIndex {
                table: table.to_string(),
            });
        }
        let template = if index.unique {
            &self.unique
        } else {
            &self.index
        };
        render(template, table, &index.columns)
    }
}

/// Expand every `%(token)s` in `template`.
pub fn render(template: &str, table: &str, columns: &[String]) -> ModelResult<String> {
    let mut out = String::with_capacity(template.len() + table.len());
    let mut rest = template;

    while let Some(start) = rest.find("%(") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find(")s").ok_or_else(|| ModelError::Template {
            template: template.to_string(),
            reason: "unterminated placeholder".to_string(),
        })?;
        let token = &after[..end];
        let value = expand(token, table, columns).ok_or_else(|| ModelError::Template {
            template: template.to_string(),
            reason: format!("unknown token '{token}'"),
        })?;
        out.push_str(&value);
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

fn expand(token: &str, table: &str, columns: &[String]) -> Option<String> {
    if token == "table_name" {
        return Some(table.to_string());
    }
    let first = columns.first()?;
    match token {
        "column_0_name" => Some(first.clone()),
        "column_0_label" => Some(format!("{table}_{first}")),
        "column_0N_name" => Some(columns.concat()),
        "column_0_N_name" => Some(columns.join("_")),
        _ => None,
    }
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod tests;
