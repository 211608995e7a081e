use super::*;

fn link(rev: &str, parent: Option<&str>) -> (RevisionId, Option<RevisionId>) {
    (RevisionId::new(rev), parent.map(RevisionId::new))
}

fn sample_chain() -> RevisionChain {
    // Deliberately out of order: the chain is defined by parent pointers
    RevisionChain::build(&[
        link("c3", Some("b2")),
        link("a1", None),
        link("b2", Some("a1")),
    ])
    .unwrap()
}

#[test]
fn test_build_orders_by_parent_pointers() {
    let chain = sample_chain();
    let order: Vec<&str> = chain.revisions().iter().map(|r| r.as_str()).collect();
    assert_eq!(order, vec!["a1", "b2", "c3"]);
    assert_eq!(chain.head().unwrap(), "c3");
    assert_eq!(chain.len(), 3);
}

#[test]
fn test_build_empty_chain() {
    let links: Vec<(RevisionId, Option<RevisionId>)> = Vec::new();
    let chain = RevisionChain::build(&links).unwrap();
    assert!(chain.is_empty());
    assert!(chain.head().is_none());
    assert_eq!(chain.resolve(&Target::Head, None).unwrap(), None);
}

#[test]
fn test_duplicate_revision_rejected() {
    let result = RevisionChain::build(&[link("a1", None), link("a1", None)]);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DuplicateRevision { .. }
    ));
}

#[test]
fn test_unknown_parent_rejected() {
    let result = RevisionChain::build(&[link("a1", None), link("b2", Some("zz"))]);
    match result.unwrap_err() {
        CoreError::UnknownParent { id, parent } => {
            assert_eq!(id, "b2");
            assert_eq!(parent, "zz");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_cycle_rejected() {
    let result = RevisionChain::build(&[
        link("a1", None),
        link("b2", Some("c3")),
        link("c3", Some("b2")),
    ]);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::CircularChain { .. }
    ));
}

#[test]
fn test_multiple_roots_rejected() {
    let result = RevisionChain::build(&[link("a1", None), link("b2", None)]);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::RootCount { count: 2, .. }
    ));
}

#[test]
fn test_branch_rejected() {
    let result = RevisionChain::build(&[
        link("a1", None),
        link("b2", Some("a1")),
        link("b3", Some("a1")),
    ]);
    match result.unwrap_err() {
        CoreError::Branch { parent, children } => {
            assert_eq!(parent, "a1");
            assert_eq!(children, "b2, b3");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_lookup_exact_and_prefix() {
    let chain = RevisionChain::build(&[
        link("abc123", None),
        link("abd456", Some("abc123")),
    ])
    .unwrap();
    assert_eq!(chain.lookup("abc123").unwrap(), 0);
    assert_eq!(chain.lookup("abd").unwrap(), 1);
    assert!(matches!(
        chain.lookup("ab").unwrap_err(),
        CoreError::AmbiguousRevision { .. }
    ));
    assert!(matches!(
        chain.lookup("zzz").unwrap_err(),
        CoreError::UnknownRevision { .. }
    ));
}

#[test]
fn test_resolve_symbolic_targets() {
    let chain = sample_chain();
    assert_eq!(chain.resolve(&Target::Base, Some(2)).unwrap(), None);
    assert_eq!(chain.resolve(&Target::Head, None).unwrap(), Some(2));
    assert_eq!(
        chain
            .resolve(&Target::Revision("b2".into()), None)
            .unwrap(),
        Some(1)
    );
}

#[test]
fn test_resolve_relative_targets() {
    let chain = sample_chain();
    assert_eq!(chain.resolve(&Target::Relative(1), None).unwrap(), Some(0));
    assert_eq!(chain.resolve(&Target::Relative(2), Some(0)).unwrap(), Some(2));
    assert_eq!(chain.resolve(&Target::Relative(-1), Some(0)).unwrap(), None);
    assert_eq!(chain.resolve(&Target::Relative(0), Some(1)).unwrap(), Some(1));
}

#[test]
fn test_resolve_relative_out_of_range() {
    let chain = sample_chain();
    assert!(matches!(
        chain.resolve(&Target::Relative(-1), None).unwrap_err(),
        CoreError::RelativeOutOfRange { offset: -1, .. }
    ));
    assert!(matches!(
        chain.resolve(&Target::Relative(1), Some(2)).unwrap_err(),
        CoreError::RelativeOutOfRange { offset: 1, .. }
    ));
}

#[test]
fn test_resolve_relative_extreme_offsets() {
    let chain = sample_chain();
    let target = Target::parse("+9223372036854775807").unwrap();
    assert!(matches!(
        chain.resolve(&target, Some(0)).unwrap_err(),
        CoreError::RelativeOutOfRange { offset: i64::MAX, .. }
    ));
    assert!(matches!(
        chain.resolve(&Target::Relative(i64::MIN), Some(2)).unwrap_err(),
        CoreError::RelativeOutOfRange { offset: i64::MIN, .. }
    ));
    assert!(matches!(
        chain.resolve(&Target::Relative(i64::MIN), None).unwrap_err(),
        CoreError::RelativeOutOfRange { offset: i64::MIN, .. }
    ));
}

#[test]
fn test_walk_to_is_inclusive_and_ascending() {
    let chain = sample_chain();
    let walk: Vec<&str> = chain
        .walk_to(&Target::Revision("b2".into()))
        .unwrap()
        .iter()
        .map(|r| r.as_str())
        .collect();
    assert_eq!(walk, vec!["a1", "b2"]);
    assert!(chain.walk_to(&Target::Base).unwrap().is_empty());
    assert_eq!(chain.walk_to(&Target::Head).unwrap().len(), 3);
}

#[test]
fn test_describe_positions() {
    let chain = sample_chain();
    assert_eq!(chain.describe(None), "base");
    assert_eq!(chain.describe(Some(1)), "b2");
}
