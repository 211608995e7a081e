use super::*;
use crate::{runner, DEFAULT_VERSION_TABLE};
use tm_runner::Db;

const EXPECTED_ORDER: [&str; 5] = [
    m001_initial_schema::REVISION,
    m002_replies::REVISION,
    m003_message_file_counter::REVISION,
    m004_draft_replies::REVISION,
    m005_source_activity::REVISION,
];

#[test]
fn test_chain_order() {
    let runner = runner(DEFAULT_VERSION_TABLE).unwrap();
    let order: Vec<&str> = runner.chain().revisions().iter().map(|r| r.as_str()).collect();
    assert_eq!(order, EXPECTED_ORDER);
}

#[test]
fn test_only_first_revision_has_no_parent() {
    let migrations = all();
    let roots: Vec<&str> = migrations
        .iter()
        .filter(|m| m.down_revision().is_none())
        .map(|m| m.revision())
        .collect();
    assert_eq!(roots, vec![m001_initial_schema::REVISION]);
}

#[test]
fn test_history_has_descriptions() {
    let history = runner(DEFAULT_VERSION_TABLE).unwrap().history();
    assert_eq!(history.len(), EXPECTED_ORDER.len());
    assert!(history.iter().all(|info| !info.description.is_empty()));
    assert_eq!(history[0].down_revision, None);
    assert_eq!(
        history[4].down_revision.as_ref().map(|r| r.as_str()),
        Some(m004_draft_replies::REVISION)
    );
}

#[test]
fn test_seeded_send_statuses() {
    let db = Db::open_memory().unwrap();
    runner(DEFAULT_VERSION_TABLE)
        .unwrap()
        .upgrade(&db, &"head".parse().unwrap())
        .unwrap();

    let statuses: Vec<(i32, String)> = db
        .conn()
        .prepare("SELECT id, name FROM reply_send_statuses ORDER BY id")
        .unwrap()
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    let expected: Vec<(i32, String)> = m004_draft_replies::SEND_STATUSES
        .iter()
        .map(|(id, name)| (*id, name.to_string()))
        .collect();
    assert_eq!(statuses, expected);
}
