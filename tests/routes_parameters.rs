use lynx_router_rs::{MatchOptions, Params, RadixError, Tree};

fn build_matcher<T>(tree: &Tree<T>) -> lynx_router_rs::Matcher<'_, T> {
    tree.matcher(MatchOptions::default(), None)
        .expect("matcher should build")
}

#[test]
fn tree_when_parameter_registered_then_segment_is_captured() {
    let mut tree = Tree::new();
    tree.store("/user/:id", 1).expect("route should register");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    let path = "/user/42";
    assert_eq!(matcher.find(path, &mut params), Some(&1));
    assert_eq!(params.len(), 1);
    assert_eq!(params.value(path, "id"), Some("42"));
}

#[test]
fn tree_when_multiple_parameters_registered_then_all_are_captured() {
    let mut tree = Tree::new();
    tree.store("/user/:id/post/:pid", 1)
        .expect("route should register");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    let path = "/user/42/post/7";
    assert_eq!(matcher.find(path, &mut params), Some(&1));

    let map = params.to_map(path);
    assert_eq!(map.get("id").map(String::as_str), Some("42"));
    assert_eq!(map.get("pid").map(String::as_str), Some("7"));
}

#[test]
fn tree_when_parameter_has_literal_prefix_then_prefix_must_match() {
    let mut tree = Tree::new();
    tree.store("/release/v:version", 1)
        .expect("route should register");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    let path = "/release/v1.2";
    assert_eq!(matcher.find(path, &mut params), Some(&1));
    assert_eq!(params.value(path, "version"), Some("1.2"));

    assert_eq!(matcher.find("/release/1.2", &mut params), None);
}

#[test]
fn tree_when_parameter_segment_is_empty_then_route_misses() {
    let mut tree = Tree::new();
    tree.store("/user/:id", 1).expect("route should register");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    assert_eq!(matcher.find("/user/", &mut params), None);
    assert_eq!(matcher.find("/user//x", &mut params), None);
}

#[test]
fn tree_when_parameter_followed_by_literal_then_both_must_match() {
    let mut tree = Tree::new();
    tree.store("/user/:id/edit", 1).expect("route should register");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    let path = "/user/42/edit";
    assert_eq!(matcher.find(path, &mut params), Some(&1));
    assert_eq!(params.value(path, "id"), Some("42"));

    assert_eq!(matcher.find("/user/42", &mut params), None);
    assert_eq!(matcher.find("/user/42/view", &mut params), None);
}

#[test]
fn tree_when_same_position_rebound_with_other_name_then_conflict_error() {
    let mut tree = Tree::new();
    tree.store("/a/:id", 1).expect("first binding registers");

    match tree.store("/a/:user", 2) {
        Err(RadixError::ParamNameConflict { existing, given }) => {
            assert_eq!(existing, "id");
            assert_eq!(given, "user");
        }
        other => panic!("expected a parameter name conflict, got {other:?}"),
    }
}

#[test]
fn tree_when_parameter_name_is_reserved_key_then_invalid_name_error() {
    let mut tree = Tree::new();

    match tree.store("/a/:$", 1) {
        Err(RadixError::InvalidParamName { name, .. }) => assert_eq!(name, "$"),
        other => panic!("expected an invalid name error, got {other:?}"),
    }
}

#[test]
fn tree_when_parameter_name_is_malformed_then_invalid_name_error() {
    let mut tree = Tree::new();

    match tree.store("/a/:1bad", 1) {
        Err(RadixError::InvalidParamName { name, .. }) => assert_eq!(name, "1bad"),
        other => panic!("expected an invalid name error, got {other:?}"),
    }
}

#[test]
fn tree_when_adjacent_routes_share_literal_prefix_then_split_preserves_both() {
    let mut tree = Tree::new();
    tree.store("/posts/:id", 1).expect("route should register");
    tree.store("/poll/:id", 2).expect("route should register");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    assert_eq!(matcher.find("/posts/3", &mut params), Some(&1));
    assert_eq!(params.value("/posts/3", "id"), Some("3"));

    assert_eq!(matcher.find("/poll/9", &mut params), Some(&2));
    assert_eq!(params.value("/poll/9", "id"), Some("9"));
}

#[test]
fn matcher_when_find_called_again_then_previous_captures_are_cleared() {
    let mut tree = Tree::new();
    tree.store("/a/:x/:y", 1).expect("route should register");
    tree.store("/b/:z", 2).expect("route should register");

    let matcher = build_matcher(&tree);
    let mut params = Params::new();

    assert_eq!(matcher.find("/a/1/2", &mut params), Some(&1));
    assert_eq!(params.len(), 2);

    assert_eq!(matcher.find("/b/3", &mut params), Some(&2));
    assert_eq!(params.len(), 1);
    assert_eq!(params.value("/b/3", "z"), Some("3"));
}
