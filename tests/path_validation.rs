use lynx_router_rs::{PathError, RadixError, Tree};

#[test]
fn tree_when_path_is_empty_then_registration_fails() {
    let mut tree = Tree::new();

    match tree.store("", 1) {
        Err(RadixError::Path(PathError::Empty)) => {}
        other => panic!("expected an empty path error, got {other:?}"),
    }
}

#[test]
fn tree_when_path_lacks_leading_slash_then_registration_fails() {
    let mut tree = Tree::new();

    match tree.store("users/list", 1) {
        Err(RadixError::Path(PathError::MissingLeadingSlash { path })) => {
            assert_eq!(path, "users/list");
        }
        other => panic!("expected a leading slash error, got {other:?}"),
    }
}

#[test]
fn tree_when_path_has_trailing_slash_then_registration_fails() {
    let mut tree = Tree::new();

    match tree.store("/users/", 1) {
        Err(RadixError::Path(PathError::TrailingSlash { path })) => {
            assert_eq!(path, "/users/");
        }
        other => panic!("expected a trailing slash error, got {other:?}"),
    }
}

#[test]
fn tree_when_path_is_not_ascii_then_registration_fails() {
    let mut tree = Tree::new();

    // Two spellings sharing the literal prefix up to mid-code-point; both
    // must be rejected cleanly instead of splitting the trie inside a char
    match tree.store("/caf\u{e9}/:id", 1) {
        Err(RadixError::Path(PathError::NonAscii { path })) => {
            assert_eq!(path, "/caf\u{e9}/:id");
        }
        other => panic!("expected a non-ascii path error, got {other:?}"),
    }
    match tree.store("/caf\u{e8}/:id", 2) {
        Err(RadixError::Path(PathError::NonAscii { .. })) => {}
        other => panic!("expected a non-ascii path error, got {other:?}"),
    }

    match tree.merge("/caf\u{e9}", Tree::new()) {
        Err(RadixError::Path(PathError::NonAscii { .. })) => {}
        other => panic!("expected a non-ascii base error, got {other:?}"),
    }
}

#[test]
fn tree_when_path_is_root_then_registration_succeeds() {
    let mut tree = Tree::new();
    tree.store("/", 1).expect("root is not a trailing slash");
}

#[test]
fn tree_when_wildcard_follows_slash_then_registration_succeeds() {
    let mut tree = Tree::new();
    tree.store("/files/*", 1)
        .expect("the wildcard marker is not a trailing slash");
}

#[test]
fn tree_when_invalid_path_rejected_then_tree_is_unchanged() {
    let mut tree = Tree::new();
    tree.store("users", 1).expect_err("path should be rejected");
    tree.store("/users", 2).expect("valid path registers");

    let matcher = tree
        .matcher(lynx_router_rs::MatchOptions::default(), None)
        .expect("matcher should build");
    let mut params = lynx_router_rs::Params::new();

    assert_eq!(matcher.find("/users", &mut params), Some(&2));
    assert_eq!(matcher.find("users", &mut params), None);
}

#[test]
fn tree_when_merge_base_is_invalid_then_merge_fails() {
    let mut donor = Tree::new();
    donor.store("/x", 1).expect("donor registers");

    let mut tree = Tree::new();
    match tree.merge("api", donor) {
        Err(RadixError::Path(PathError::MissingLeadingSlash { path })) => {
            assert_eq!(path, "api");
        }
        other => panic!("expected a leading slash error, got {other:?}"),
    }
}
