use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_parse_minimal_config() {
    let yaml = r#"
name: courier
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.name, "courier");
    assert_eq!(config.database.path, "tidemark.duckdb");
    assert_eq!(config.database.schema, "main");
    assert_eq!(config.version_table, "tidemark_version");
    config.validate().unwrap();
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
name: courier
database:
  path: data/courier.duckdb
  schema: main
version_table: courier_version
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.database.path, "data/courier.duckdb");
    assert_eq!(config.version_table, "courier_version");

    let root = std::path::PathBuf::from("/tmp/project");
    assert_eq!(
        config.database_path(&root),
        Some(root.join("data/courier.duckdb"))
    );
}

#[test]
fn test_unknown_fields_rejected() {
    let yaml = r#"
name: courier
migrations_dir: versions
"#;
    assert!(serde_yaml::from_str::<Config>(yaml).is_err());
}

#[test]
fn test_memory_database_has_no_path() {
    let yaml = r#"
name: courier
database:
  path: ":memory:"
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.database_path(std::path::Path::new("/tmp")), None);
}

#[test]
fn test_validate_rejects_unsafe_identifiers() {
    let mut config: Config = serde_yaml::from_str("name: courier").unwrap();
    config.version_table = "version; DROP TABLE users".to_string();
    assert!(matches!(
        config.validate().unwrap_err(),
        CoreError::ConfigInvalid { .. }
    ));

    let mut config: Config = serde_yaml::from_str("name: courier").unwrap();
    config.database.schema = "1schema".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_empty_name() {
    let config: Config = serde_yaml::from_str("name: ''").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_load_from_dir_prefers_yml() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tidemark.yml"), "name: from_yml\n").unwrap();
    fs::write(dir.path().join("tidemark.yaml"), "name: from_yaml\n").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "from_yml");
}

#[test]
fn test_load_from_dir_missing_config() {
    let dir = tempdir().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_is_plain_identifier() {
    assert!(is_plain_identifier("tidemark_version"));
    assert!(is_plain_identifier("_private"));
    assert!(!is_plain_identifier(""));
    assert!(!is_plain_identifier("9lives"));
    assert!(!is_plain_identifier("a-b"));
}
