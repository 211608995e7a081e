//! Table, index, and view definitions

use crate::column::Column;

/// Secondary index on a table.
///
/// Unnamed indexes take their name from the schema's
/// [`NamingConvention`](crate::NamingConvention).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub unique: bool,
}

impl Index {
    /// Index over `columns`, named by convention
    pub fn on(columns: &[&str]) -> Self {
        Self {
            name: None,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            unique: false,
        }
    }

    /// Index with an explicit name
    pub fn named(name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::on(columns)
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// A table: ordered columns plus its indexes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub indexes: Vec<Index>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            indexes: Vec::new(),
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }

    /// Look up a column by name
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Tables this one references through foreign keys, self-references
    /// excluded
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter_map(|c| c.references.as_ref())
            .map(|fk| fk.table.as_str())
            .filter(move |t| *t != self.name)
    }

    /// `CREATE TABLE` statement.
    ///
    /// Single-column primary keys are written inline; composite ones and
    /// foreign keys become table constraints after the columns.
    pub fn create_sql(&self) -> String {
        let pk: Vec<&str> = self
            .columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.as_str())
            .collect();
        let inline_pk = pk.len() == 1;

        let mut lines: Vec<String> = self.columns.iter().map(|c| c.to_ddl(inline_pk)).collect();
        if pk.len() > 1 {
            lines.push(format!("PRIMARY KEY ({})", pk.join(", ")));
        }
        for column in &self.columns {
            if let Some(fk) = &column.references {
                lines.push(format!(
                    "FOREIGN KEY ({}) REFERENCES {}({})",
                    column.name, fk.table, fk.column
                ));
            }
        }

        format!("CREATE TABLE {} (\n    {}\n)", self.name, lines.join(",\n    "))
    }
}

/// A view defined by a `SELECT`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub name: String,
    pub select: String,
}

impl View {
    pub fn new(name: impl Into<String>, select: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            select: select.into(),
        }
    }

    /// `CREATE VIEW` statement
    pub fn create_sql(&self) -> String {
        format!("CREATE VIEW {} AS {}", self.name, self.select)
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
