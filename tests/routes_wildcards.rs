use lynx_router_rs::{MatchOptions, Params, Tree, WILDCARD_KEY};

fn build_matcher<T>(tree: &Tree<T>) -> lynx_router_rs::Matcher<'_, T> {
    tree.matcher(MatchOptions::default(), None)
        .expect("matcher should build")
}

#[test]
fn tree_when_wildcard_registered_then_suffix_is_captured() {
    let mut tree = Tree::new();
    tree.store("/files/*", 1).expect("route should register");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    let path = "/files/media/images/logo.png";
    assert_eq!(matcher.find(path, &mut params), Some(&1));
    assert_eq!(params.len(), 1);
    assert_eq!(
        params.value(path, WILDCARD_KEY),
        Some("media/images/logo.png")
    );
}

#[test]
fn tree_when_wildcard_registered_then_empty_suffix_matches() {
    let mut tree = Tree::new();
    tree.store("/files/*", 1).expect("route should register");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    let path = "/files/";
    assert_eq!(matcher.find(path, &mut params), Some(&1));
    assert_eq!(params.value(path, WILDCARD_KEY), Some(""));
}

#[test]
fn tree_when_wildcard_registered_then_shorter_prefix_misses() {
    let mut tree = Tree::new();
    tree.store("/files/*", 1).expect("route should register");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    assert_eq!(matcher.find("/files", &mut params), None);
}

#[test]
fn tree_when_root_wildcard_registered_then_every_path_matches() {
    let mut tree = Tree::new();
    tree.store("/*", 1).expect("route should register");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    assert_eq!(matcher.find("/", &mut params), Some(&1));
    assert_eq!(params.value("/", WILDCARD_KEY), Some(""));

    let path = "/deep/ly/nested";
    assert_eq!(matcher.find(path, &mut params), Some(&1));
    assert_eq!(params.value(path, WILDCARD_KEY), Some("deep/ly/nested"));
}

#[test]
fn tree_when_parameter_and_wildcard_compete_then_parameter_wins() {
    let mut tree = Tree::new();
    tree.store("/a/:x", 1).expect("parameter registers");
    tree.store("/a/*", 2).expect("wildcard registers");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    assert_eq!(matcher.find("/a/foo", &mut params), Some(&1));
    assert_eq!(params.value("/a/foo", "x"), Some("foo"));

    // Multi-segment suffixes exceed the parameter, falling to the wildcard
    let path = "/a/foo/bar";
    assert_eq!(matcher.find(path, &mut params), Some(&2));
    assert_eq!(params.value(path, WILDCARD_KEY), Some("foo/bar"));

    // Empty segments never bind a parameter, but the wildcard takes them
    assert_eq!(matcher.find("/a/", &mut params), Some(&2));
    assert_eq!(params.value("/a/", WILDCARD_KEY), Some(""));
}

#[test]
fn tree_when_literal_and_wildcard_compete_then_literal_wins() {
    let mut tree = Tree::new();
    tree.store("/a/b", 1).expect("literal registers");
    tree.store("/a/*", 2).expect("wildcard registers");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    assert_eq!(matcher.find("/a/b", &mut params), Some(&1));
    assert!(params.is_empty());

    assert_eq!(matcher.find("/a/c", &mut params), Some(&2));
    assert_eq!(params.value("/a/c", WILDCARD_KEY), Some("c"));
}

#[test]
fn tree_when_literal_branch_dead_ends_then_wildcard_takes_over() {
    let mut tree = Tree::new();
    tree.store("/a/bc/:id", 1).expect("literal branch registers");
    tree.store("/a/*", 2).expect("wildcard registers");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    let path = "/a/bc/7";
    assert_eq!(matcher.find(path, &mut params), Some(&1));
    assert_eq!(params.value(path, "id"), Some("7"));

    // The literal child consumes "bc" then dead-ends; the wildcard at the
    // parent picks the path up, with no stale capture left behind
    assert_eq!(matcher.find("/a/bc", &mut params), Some(&2));
    assert_eq!(params.value("/a/bc", WILDCARD_KEY), Some("bc"));
    assert_eq!(params.len(), 1);
}
