use super::*;

fn memory_db(sql: &str) -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(sql).unwrap();
    conn
}

#[test]
fn test_capture_empty_database() {
    let conn = memory_db("");
    let snapshot = capture_current(&conn).unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn test_capture_tables_indexes_and_views() {
    let conn = memory_db(
        "CREATE TABLE users (id INTEGER PRIMARY KEY, name VARCHAR);
         CREATE INDEX ix_users_name ON users(name);
         CREATE VIEW v_names AS SELECT name FROM users;",
    );
    let snapshot = capture(&conn, "main").unwrap();

    assert_eq!(snapshot.len(), 3);
    assert!(snapshot.contains(&SchemaKey::table("users")));
    assert!(snapshot.contains(&SchemaKey::new(ObjectKind::Index, "ix_users_name", "users")));
    assert!(snapshot.contains(&SchemaKey::new(ObjectKind::View, "v_names", "v_names")));

    let table_sql = snapshot.get(&SchemaKey::table("users")).unwrap().unwrap();
    assert!(table_sql.contains("CREATE TABLE"), "{table_sql}");
    assert!(table_sql.contains("name VARCHAR"), "{table_sql}");
}

#[test]
fn test_capture_skips_temporary_tables() {
    let conn = memory_db(
        "CREATE TABLE kept (id INTEGER);
         CREATE TEMP TABLE scratch (id INTEGER);",
    );
    let snapshot = capture_current(&conn).unwrap();
    assert_eq!(snapshot.table_names(), vec!["kept"]);
}

#[test]
fn test_capture_is_scoped_to_schema() {
    let conn = memory_db(
        "CREATE TABLE in_main (id INTEGER);
         CREATE SCHEMA other;
         CREATE TABLE other.in_other (id INTEGER);",
    );
    assert_eq!(capture(&conn, "main").unwrap().table_names(), vec!["in_main"]);
    assert_eq!(capture(&conn, "other").unwrap().table_names(), vec!["in_other"]);
}

#[test]
fn test_capture_is_repeatable() {
    let conn = memory_db(
        "CREATE TABLE t (a INTEGER, b VARCHAR);
         CREATE INDEX ix_t_b ON t(b);",
    );
    assert_eq!(capture_current(&conn).unwrap(), capture_current(&conn).unwrap());
}

#[test]
fn test_duplicate_key_is_rejected() {
    let key = SchemaKey::table("t");
    let err = Snapshot::from_entries([
        (key.clone(), Some("a".to_string())),
        (key, Some("b".to_string())),
    ])
    .unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateKey(_)));
    assert!(err.to_string().contains("(table, t, t)"));
}

#[test]
fn test_without_table_drops_owned_objects() {
    let snapshot = Snapshot::from_entries([
        (SchemaKey::table("a"), Some("CREATE TABLE a".to_string())),
        (
            SchemaKey::new(ObjectKind::Index, "ix_a_x", "a"),
            Some("CREATE INDEX ix_a_x".to_string()),
        ),
        (SchemaKey::table("b"), Some("CREATE TABLE b".to_string())),
    ])
    .unwrap();

    let trimmed = snapshot.without_table("a");
    assert_eq!(trimmed.len(), 1);
    assert_eq!(trimmed.table_names(), vec!["b"]);
    assert_eq!(snapshot.len(), 3);
}

#[test]
fn test_keys_are_ordered_by_kind_then_name() {
    let snapshot = Snapshot::from_entries([
        (SchemaKey::new(ObjectKind::View, "v", "v"), None),
        (SchemaKey::table("b"), None),
        (SchemaKey::table("a"), None),
        (SchemaKey::new(ObjectKind::Index, "z", "a"), None),
    ])
    .unwrap();

    let names: Vec<_> = snapshot.keys().map(|k| k.name.as_str()).collect();
    assert_eq!(names, vec!["z", "a", "b", "v"]);
}

#[test]
fn test_get_distinguishes_absent_from_null() {
    let key = SchemaKey::new(ObjectKind::Index, "auto", "t");
    let snapshot = Snapshot::from_entries([(key.clone(), None)]).unwrap();
    assert_eq!(snapshot.get(&key), Some(None));
    assert_eq!(snapshot.get(&SchemaKey::table("t")), None);
}

#[test]
fn test_serialize_as_entry_list() {
    let snapshot = Snapshot::from_entries([(
        SchemaKey::table("users"),
        Some("CREATE TABLE users(id INTEGER);".to_string()),
    )])
    .unwrap();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "kind": "table",
            "name": "users",
            "table": "users",
            "sql": "CREATE TABLE users(id INTEGER);"
        }])
    );
}

#[test]
fn test_object_kind_round_trips_through_name() {
    for kind in [
        ObjectKind::Index,
        ObjectKind::Table,
        ObjectKind::Trigger,
        ObjectKind::View,
    ] {
        assert_eq!(ObjectKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(ObjectKind::parse("sequence"), None);
}
