//! A complete model schema and its DDL.

use crate::error::{ModelError, ModelResult};
use crate::naming::NamingConvention;
use crate::table::{Table, View};
use duckdb::Connection;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// Every table and view of a schema plus the naming convention for its
/// indexes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaData {
    naming: NamingConvention,
    tables: Vec<Table>,
    views: Vec<View>,
}

impl MetaData {
    pub fn new(naming: NamingConvention) -> Self {
        Self {
            naming,
            tables: Vec::new(),
            views: Vec::new(),
        }
    }

    pub fn table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn view(mut self, view: View) -> Self {
        self.views.push(view);
        self
    }

    pub fn naming(&self) -> &NamingConvention {
        &self.naming
    }

    /// Tables in declaration order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Check names, columns, index columns, and foreign-key targets.
    pub fn validate(&self) -> ModelResult<()> {
        let mut objects = HashSet::new();
        for name in self
            .tables
            .iter()
            .map(|t| &t.name)
            .chain(self.views.iter().map(|v| &v.name))
        {
            if !objects.insert(name.as_str()) {
                return Err(ModelError::DuplicateObject { name: name.clone() });
            }
        }

        let mut index_names = HashSet::new();
        for table in &self.tables {
            if table.columns.is_empty() {
                return Err(ModelError::NoColumns {
                    table: table.name.clone(),
                });
            }

            let mut columns = HashSet::new();
            for column in &table.columns {
                if !columns.insert(column.name.as_str()) {
                    return Err(ModelError::DuplicateColumn {
                        table: table.name.clone(),
                        column: column.name.clone(),
                    });
                }
            }

            for column in &table.columns {
                let Some(fk) = &column.references else {
                    continue;
                };
                let target = self.get_table(&fk.table).ok_or_else(|| {
                    ModelError::UnknownReference {
                        table: table.name.clone(),
                        column: column.name.clone(),
                        target: format!("table '{}'", fk.table),
                    }
                })?;
                if target.get_column(&fk.column).is_none() {
                    return Err(ModelError::UnknownReference {
                        table: table.name.clone(),
                        column: column.name.clone(),
                        target: format!("column '{}.{}'", fk.table, fk.column),
                    });
                }
            }

            for index in &table.indexes {
                let name = self.naming.index_name(&table.name, index)?;
                if let Some(column) = index.columns.iter().find(|c| !columns.contains(c.as_str())) {
                    return Err(ModelError::UnknownColumn {
                        table: table.name.clone(),
                        column: column.clone(),
                    });
                }
                if objects.contains(name.as_str()) || !index_names.insert(name.clone()) {
                    return Err(ModelError::DuplicateObject { name });
                }
            }
        }
        Ok(())
    }

    /// Tables ordered so that every table comes after the tables it
    /// references.
    pub fn sorted_tables(&self) -> ModelResult<Vec<&Table>> {
        let mut graph: DiGraph<usize, ()> = DiGraph::new();
        let mut node_map: HashMap<&str, NodeIndex> = HashMap::new();

        for (i, table) in self.tables.iter().enumerate() {
            node_map.insert(table.name.as_str(), graph.add_node(i));
        }
        for table in &self.tables {
            let dependent = node_map[table.name.as_str()];
            for dependency in table.dependencies() {
                if let Some(&dep_idx) = node_map.get(dependency) {
                    // Referenced table first
                    graph.add_edge(dep_idx, dependent, ());
                }
            }
        }

        let sorted = toposort(&graph, None).map_err(|cycle| ModelError::ForeignKeyCycle {
            table: self.tables[graph[cycle.node_id()]].name.clone(),
        })?;
        Ok(sorted.into_iter().map(|idx| &self.tables[graph[idx]]).collect())
    }

    /// Every statement [`MetaData::create_all`] runs, in order: each table
    /// followed by its indexes, then the views.
    pub fn create_statements(&self) -> ModelResult<Vec<String>> {
        self.validate()?;
        let mut statements = Vec::new();

        for table in self.sorted_tables()? {
            statements.push(table.create_sql());
            for index in &table.indexes {
                let name = self.naming.index_name(&table.name, index)?;
                let unique = if index.unique { "UNIQUE " } else { "" };
                statements.push(format!(
                    "CREATE {unique}INDEX {name} ON {}({})",
                    table.name,
                    index.columns.join(", ")
                ));
            }
        }
        statements.extend(self.views.iter().map(View::create_sql));
        Ok(statements)
    }

    /// Every statement [`MetaData::drop_all`] runs: views in reverse, then
    /// tables in reverse dependency order. Objects that do not exist are
    /// skipped.
    pub fn drop_statements(&self) -> ModelResult<Vec<String>> {
        let mut statements: Vec<String> = self
            .views
            .iter()
            .rev()
            .map(|v| format!("DROP VIEW IF EXISTS {}", v.name))
            .collect();
        statements.extend(
            self.sorted_tables()?
                .into_iter()
                .rev()
                .map(|t| format!("DROP TABLE IF EXISTS {}", t.name)),
        );
        Ok(statements)
    }

    /// Build the whole schema on `conn`.
    pub fn create_all(&self, conn: &Connection) -> ModelResult<()> {
        let statements = self.create_statements()?;
        log::debug!("Creating model schema ({} statements)", statements.len());
        execute_all(conn, &statements)
    }

    /// Drop the whole schema from `conn`.
    pub fn drop_all(&self, conn: &Connection) -> ModelResult<()> {
        let statements = self.drop_statements()?;
        log::debug!("Dropping model schema ({} statements)", statements.len());
        execute_all(conn, &statements)
    }
}

fn execute_all(conn: &Connection, statements: &[String]) -> ModelResult<()> {
    for sql in statements {
        conn.execute_batch(sql)
            .map_err(|source| ModelError::Statement {
                sql: sql.clone(),
                source,
            })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod tests;
