use super::*;
use crate::column::ColumnType;

fn replies() -> Table {
    Table::new("replies")
        .column(Column::new("id", ColumnType::Integer).primary_key())
        .column(
            Column::new("source_id", ColumnType::Integer)
                .not_null()
                .references("sources", "id"),
        )
        .column(Column::new("size", ColumnType::Integer))
        .column(
            Column::new("is_deleted", ColumnType::Boolean)
                .not_null()
                .default("false"),
        )
}

#[test]
fn test_create_sql_layout() {
    assert_eq!(
        replies().create_sql(),
        "CREATE TABLE replies (\n    \
         id INTEGER PRIMARY KEY,\n    \
         source_id INTEGER NOT NULL,\n    \
         size INTEGER,\n    \
         is_deleted BOOLEAN NOT NULL DEFAULT false,\n    \
         FOREIGN KEY (source_id) REFERENCES sources(id)\n)"
    );
}

#[test]
fn test_composite_primary_key_is_a_table_constraint() {
    let table = Table::new("pairs")
        .column(Column::new("a", ColumnType::Integer).primary_key())
        .column(Column::new("b", ColumnType::Varchar).primary_key());

    let sql = table.create_sql();
    assert!(sql.contains("a INTEGER NOT NULL,"), "{sql}");
    assert!(sql.contains("b VARCHAR NOT NULL,"), "{sql}");
    assert!(sql.contains("PRIMARY KEY (a, b)"), "{sql}");
    assert!(!sql.contains("PRIMARY KEY,"), "{sql}");
}

#[test]
fn test_dependencies_skip_self_references() {
    let table = Table::new("nodes")
        .column(Column::new("id", ColumnType::Integer).primary_key())
        .column(Column::new("parent_id", ColumnType::Integer).references("nodes", "id"))
        .column(Column::new("owner_id", ColumnType::Integer).references("users", "id"));

    assert_eq!(table.dependencies().collect::<Vec<_>>(), vec!["users"]);
}

#[test]
fn test_get_column() {
    let table = replies();
    assert_eq!(
        table.get_column("size").map(|c| c.data_type),
        Some(ColumnType::Integer)
    );
    assert!(table.get_column("missing").is_none());
}

#[test]
fn test_index_builders() {
    let ix = Index::on(&["source_id"]);
    assert_eq!(ix.name, None);
    assert!(!ix.unique);

    let uq = Index::named("uq_custom", &["a", "b"]).unique();
    assert_eq!(uq.name.as_deref(), Some("uq_custom"));
    assert_eq!(uq.columns, vec!["a", "b"]);
    assert!(uq.unique);
}

#[test]
fn test_view_create_sql() {
    let view = View::new("v_ids", "SELECT id FROM replies");
    assert_eq!(view.create_sql(), "CREATE VIEW v_ids AS SELECT id FROM replies");
}
