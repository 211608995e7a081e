use super::*;
use crate::Db;

fn count(db: &Db, sql: &str) -> i64 {
    db.conn()
        .query_row(sql, [], |row| row.get::<_, i64>(0))
        .unwrap()
}

fn index_count(db: &Db, name: &str) -> i64 {
    count(
        db,
        &format!("SELECT COUNT(*) FROM duckdb_indexes() WHERE index_name = '{name}'"),
    )
}

#[test]
fn create_and_drop_index() {
    let db = Db::open_memory().unwrap();
    db.conn()
        .execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY, name VARCHAR)")
        .unwrap();

    create_index(db.conn(), "ix_t_name", "t", &["name"], false).unwrap();
    assert_eq!(index_count(&db, "ix_t_name"), 1);

    drop_index(db.conn(), "ix_t_name").unwrap();
    assert_eq!(index_count(&db, "ix_t_name"), 0);
}

#[test]
fn create_index_requires_columns() {
    let db = Db::open_memory().unwrap();
    let err = create_index(db.conn(), "ix_t", "t", &[], false).unwrap_err();
    assert!(matches!(err, RunnerError::Operation(_)));
}

#[test]
fn recreate_table_maps_rows_into_new_definition() {
    let db = Db::open_memory().unwrap();
    db.conn()
        .execute_batch(
            "CREATE TABLE files (id INTEGER PRIMARY KEY, filename VARCHAR NOT NULL);
             INSERT INTO files VALUES (1, '3-alpha-msg.gpg'), (2, '7-beta-doc.gz.gpg');",
        )
        .unwrap();

    recreate_table(
        db.conn(),
        "files",
        "CREATE TABLE files (id INTEGER PRIMARY KEY, filename VARCHAR NOT NULL, file_counter INTEGER NOT NULL)",
        &[
            ("id", "id"),
            ("filename", "filename"),
            ("file_counter", "CAST(split_part(filename, '-', 1) AS INTEGER)"),
        ],
    )
    .unwrap();

    assert_eq!(count(&db, "SELECT CAST(SUM(file_counter) AS BIGINT) FROM files"), 10);
    assert_eq!(
        count(
            &db,
            "SELECT COUNT(*) FROM duckdb_tables() WHERE table_name LIKE '_tm_batch_%'"
        ),
        0,
        "scratch table should be dropped"
    );
}

#[test]
fn recreate_table_drops_old_indexes() {
    let db = Db::open_memory().unwrap();
    db.conn()
        .execute_batch(
            "CREATE TABLE t (id INTEGER PRIMARY KEY, name VARCHAR);
             CREATE INDEX ix_t_name ON t(name);",
        )
        .unwrap();

    recreate_table(
        db.conn(),
        "t",
        "CREATE TABLE t (id INTEGER PRIMARY KEY)",
        &[("id", "id")],
    )
    .unwrap();
    assert_eq!(index_count(&db, "ix_t_name"), 0);
}

#[test]
fn failing_operation_reports_sql() {
    let db = Db::open_memory().unwrap();
    let err = drop_table(db.conn(), "missing_table").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("[R006]"), "{msg}");
    assert!(msg.contains("DROP TABLE missing_table"), "{msg}");
}
