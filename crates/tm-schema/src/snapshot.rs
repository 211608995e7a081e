//! Schema snapshot types and catalog capture.

use crate::error::{SchemaError, SchemaResult};
use duckdb::Connection;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of schema object, ordered the way snapshots list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Index,
    Table,
    Trigger,
    View,
}

impl ObjectKind {
    /// Lowercase name as stored in the catalog query
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Index => "index",
            ObjectKind::Table => "table",
            ObjectKind::Trigger => "trigger",
            ObjectKind::View => "view",
        }
    }

    /// Parse a catalog kind name
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "index" => Some(ObjectKind::Index),
            "table" => Some(ObjectKind::Table),
            "trigger" => Some(ObjectKind::Trigger),
            "view" => Some(ObjectKind::View),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one schema object: (kind, name, owning table).
///
/// Tables and views own themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SchemaKey {
    pub kind: ObjectKind,
    pub name: String,
    pub table: String,
}

impl SchemaKey {
    pub fn new(kind: ObjectKind, name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            table: table.into(),
        }
    }

    /// Key for a table, which owns itself
    pub fn table(name: &str) -> Self {
        Self::new(ObjectKind::Table, name, name)
    }
}

impl fmt::Display for SchemaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.kind, self.name, self.table)
    }
}

/// Every schema object keyed by [`SchemaKey`], with its defining statement.
///
/// A `None` statement means the catalog has no DDL for the object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: BTreeMap<SchemaKey, Option<String>>,
}

impl Snapshot {
    /// An empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries, rejecting duplicate keys
    pub fn from_entries<I>(entries: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = (SchemaKey, Option<String>)>,
    {
        let mut snapshot = Self::new();
        for (key, ddl) in entries {
            snapshot.insert(key, ddl)?;
        }
        Ok(snapshot)
    }

    /// Add one object; a key may only appear once
    pub fn insert(&mut self, key: SchemaKey, ddl: Option<String>) -> SchemaResult<()> {
        if self.entries.contains_key(&key) {
            return Err(SchemaError::DuplicateKey(key));
        }
        self.entries.insert(key, ddl);
        Ok(())
    }

    /// Statement for `key`; the outer `None` means the key is absent
    pub fn get(&self, key: &SchemaKey) -> Option<Option<&str>> {
        self.entries.get(key).map(|ddl| ddl.as_deref())
    }

    pub fn contains(&self, key: &SchemaKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&SchemaKey, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k, v.as_deref()))
    }

    /// Keys in key order
    pub fn keys(&self) -> impl Iterator<Item = &SchemaKey> {
        self.entries.keys()
    }

    /// Names of all tables in the snapshot
    pub fn table_names(&self) -> Vec<&str> {
        self.entries
            .keys()
            .filter(|k| k.kind == ObjectKind::Table)
            .map(|k| k.name.as_str())
            .collect()
    }

    /// Copy without any object owned by `table` (the table itself, its
    /// indexes and triggers).
    pub fn without_table(&self, table: &str) -> Snapshot {
        Snapshot {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| k.table != table)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    pub(crate) fn into_entries(self) -> BTreeMap<SchemaKey, Option<String>> {
        self.entries
    }
}

#[derive(Serialize)]
struct EntryRef<'a> {
    #[serde(flatten)]
    key: &'a SchemaKey,
    sql: Option<&'a str>,
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(key, sql)| EntryRef { key, sql }))
    }
}

/// One row per table, index, and view of a schema in the current database.
///
/// Temporary and internal objects are skipped. DuckDB has no triggers, so
/// none are reported.
const CATALOG_QUERY: &str = "
SELECT 'table' AS kind, table_name AS name, table_name AS tbl_name, sql
FROM duckdb_tables()
WHERE database_name = current_database() AND schema_name = ?
  AND NOT temporary AND NOT internal
UNION ALL
SELECT 'index', index_name, table_name, sql
FROM duckdb_indexes()
WHERE database_name = current_database() AND schema_name = ?
UNION ALL
SELECT 'view', view_name, view_name, sql
FROM duckdb_views()
WHERE database_name = current_database() AND schema_name = ?
  AND NOT temporary AND NOT internal
ORDER BY kind, name, tbl_name
";

/// Capture every table, index, and view in `schema`.
pub fn capture(conn: &Connection, schema: &str) -> SchemaResult<Snapshot> {
    let mut stmt = conn
        .prepare(CATALOG_QUERY)
        .map_err(|e| SchemaError::CatalogQuery(e.to_string()))?;
    let rows = stmt
        .query_map(duckdb::params![schema, schema, schema], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
            ))
        })
        .map_err(|e| SchemaError::CatalogQuery(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SchemaError::CatalogQuery(format!("row error: {e}")))?;

    let mut snapshot = Snapshot::new();
    for (kind, name, table, sql) in rows {
        let kind = ObjectKind::parse(&kind).ok_or(SchemaError::UnknownKind(kind))?;
        snapshot.insert(SchemaKey::new(kind, name, table), sql)?;
    }
    log::debug!("Captured {} objects from schema {schema}", snapshot.len());
    Ok(snapshot)
}

/// Capture the schema unqualified names currently resolve to.
pub fn capture_current(conn: &Connection) -> SchemaResult<Snapshot> {
    let schema: String = conn.query_row("SELECT current_schema()", [], |row| row.get(0))?;
    capture(conn, &schema)
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
