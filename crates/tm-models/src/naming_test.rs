use super::*;

fn cols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_default_templates() {
    let naming = NamingConvention::default();
    assert_eq!(naming.index, "ix_%(column_0_label)s");
    assert_eq!(naming.unique, "uq_%(table_name)s_%(column_0_name)s");
}

#[test]
fn test_plain_index_uses_column_label() {
    let naming = NamingConvention::default();
    let name = naming
        .index_name("replies", &Index::on(&["source_id"]))
        .unwrap();
    assert_eq!(name, "ix_replies_source_id");
}

#[test]
fn test_unique_index_uses_table_and_column() {
    let naming = NamingConvention::default();
    let name = naming
        .index_name("users", &Index::on(&["username"]).unique())
        .unwrap();
    assert_eq!(name, "uq_users_username");
}

#[test]
fn test_explicit_name_wins() {
    let naming = NamingConvention::default();
    let name = naming
        .index_name("users", &Index::named("by_name", &["username"]))
        .unwrap();
    assert_eq!(name, "by_name");
}

#[test]
fn test_empty_index_is_rejected() {
    let naming = NamingConvention::default();
    let err = naming.index_name("users", &Index::on(&[])).unwrap_err();
    assert!(matches!(err, ModelError::EmptyIndex { .. }));
}

#[test]
fn test_multi_column_tokens() {
    let columns = cols(&["a", "b", "c"]);
    assert_eq!(render("ix_%(column_0N_name)s", "t", &columns).unwrap(), "ix_abc");
    assert_eq!(render("ix_%(column_0_N_name)s", "t", &columns).unwrap(), "ix_a_b_c");
    assert_eq!(render("%(column_0_name)s", "t", &columns).unwrap(), "a");
}

#[test]
fn test_literal_text_is_kept() {
    assert_eq!(render("fixed_name", "t", &cols(&["a"])).unwrap(), "fixed_name");
    assert_eq!(
        render("%(table_name)s__idx__%(column_0_name)s", "t", &cols(&["a"])).unwrap(),
        "t__idx__a"
    );
}

#[test]
fn test_unknown_token_is_rejected() {
    let err = render("ix_%(constraint_name)s", "t", &cols(&["a"])).unwrap_err();
    assert!(err.to_string().contains("unknown token 'constraint_name'"));
}

#[test]
fn test_unterminated_placeholder_is_rejected() {
    let err = render("ix_%(table_name", "t", &cols(&["a"])).unwrap_err();
    assert!(err.to_string().contains("unterminated"));
}
