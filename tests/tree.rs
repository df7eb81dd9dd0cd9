use trailhead::{MatchError, Node};

#[test]
fn static_routes() {
    let mut node = Node::new();
    node.insert("/hi", "hi");
    node.insert("/contact", "contact");
    node.insert("/users/list", "list");

    assert_eq!(*node.at("/hi").unwrap().value, "hi");
    assert_eq!(*node.at("/contact").unwrap().value, "contact");

    let matched = node.at("/users/list").unwrap();
    assert_eq!(*matched.value, "list");
    assert!(matched.params.is_empty());

    assert_eq!(node.at("/missing").unwrap_err(), MatchError::NotFound);
}

#[test]
fn param_capture() {
    let mut node = Node::new();
    node.insert("/users/:id", "user");

    let matched = node.at("/users/42").unwrap();
    assert_eq!(*matched.value, "user");
    assert_eq!(matched.params.get("id"), Some("42"));
    assert_eq!(matched.params.len(), 1);
}

#[test]
fn multiple_params() {
    let mut node = Node::new();
    node.insert("/blog/:category/:post", "post");

    let matched = node.at("/blog/rust/request-routers").unwrap();
    assert_eq!(*matched.value, "post");

    let collected: Vec<_> = matched.params.iter().collect();
    assert_eq!(
        collected,
        vec![("category", "rust"), ("post", "request-routers")]
    );
}

#[test]
fn literal_beats_param() {
    let mut node = Node::new();
    node.insert("/users/:id", "param");
    node.insert("/users/me", "literal");

    let matched = node.at("/users/me").unwrap();
    assert_eq!(*matched.value, "literal");
    assert!(matched.params.is_empty());

    let matched = node.at("/users/42").unwrap();
    assert_eq!(*matched.value, "param");
    assert_eq!(matched.params.get("id"), Some("42"));
}

#[test]
fn shared_prefixes() {
    let mut node = Node::new();
    node.insert("/users", "index");
    node.insert("/users/:id", "show");
    node.insert("/users/:id/posts", "posts");

    assert_eq!(*node.at("/users").unwrap().value, "index");
    assert_eq!(*node.at("/users/7").unwrap().value, "show");

    let matched = node.at("/users/7/posts").unwrap();
    assert_eq!(*matched.value, "posts");
    assert_eq!(matched.params.get("id"), Some("7"));
}

#[test]
fn prefix_is_not_a_match() {
    let mut node = Node::new();
    node.insert("/users/:id", "user");

    // one segment short
    assert_eq!(node.at("/users").unwrap_err(), MatchError::NotFound);
    // one segment long
    assert_eq!(
        node.at("/users/42/extra").unwrap_err(),
        MatchError::NotFound
    );
}

#[test]
fn interior_node_without_value() {
    let mut node = Node::new();
    node.insert("/a/b/c", "deep");

    assert_eq!(node.at("/a").unwrap_err(), MatchError::NotFound);
    assert_eq!(node.at("/a/b").unwrap_err(), MatchError::NotFound);
    assert_eq!(*node.at("/a/b/c").unwrap().value, "deep");
}

#[test]
fn duplicate_insert_replaces_value() {
    let mut node = Node::new();
    node.insert("/x", "first");
    node.insert("/x", "second");

    assert_eq!(*node.at("/x").unwrap().value, "second");
}

#[test]
fn bare_colon_is_a_literal() {
    let mut node = Node::new();
    node.insert("/files/:", "colon");

    // ":" has no name after the colon, so it matches only itself
    assert_eq!(*node.at("/files/:").unwrap().value, "colon");
    assert!(node.at("/files/:").unwrap().params.is_empty());
    assert_eq!(node.at("/files/x").unwrap_err(), MatchError::NotFound);
}

#[test]
fn empty_and_rootless_paths() {
    let mut node = Node::new();
    node.insert("", "root");

    // "" and "/" both reduce to a single empty literal segment
    assert_eq!(*node.at("").unwrap().value, "root");
    assert_eq!(*node.at("/").unwrap().value, "root");

    // a missing leading slash degrades to the same segments
    let mut node = Node::new();
    node.insert("users/list", "list");
    assert_eq!(*node.at("/users/list").unwrap().value, "list");
}

#[test]
fn empty_segments_are_literals() {
    let mut node = Node::new();
    node.insert("/a//b", "gap");

    assert_eq!(*node.at("/a//b").unwrap().value, "gap");
    assert_eq!(node.at("/a/b").unwrap_err(), MatchError::NotFound);
}

#[test]
fn param_name_fixed_by_first_registration() {
    let mut node = Node::new();
    node.insert("/u/:id", "show");
    node.insert("/u/:uid/x", "sub");

    // the second route reuses the existing branch, so the name stays "id"
    let matched = node.at("/u/7/x").unwrap();
    assert_eq!(*matched.value, "sub");
    assert_eq!(matched.params.get("id"), Some("7"));
    assert_eq!(matched.params.get("uid"), None);
}

#[test]
fn param_matches_any_single_segment() {
    let mut node = Node::new();
    node.insert("/files/:name", "file");

    assert_eq!(
        node.at("/files/a.txt").unwrap().params.get("name"),
        Some("a.txt")
    );
    // an empty segment is still a single segment
    assert_eq!(node.at("/files/").unwrap().params.get("name"), Some(""));
}
