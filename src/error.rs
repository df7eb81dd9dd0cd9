use std::fmt;

/// A failed match attempt.
///
/// Every failure looks the same to the caller: an unknown method, a path
/// that walks off the trie, and a path that stops on a handler-less prefix
/// node all report [`MatchError::NotFound`].
///
/// ```
/// use trailhead::{MatchError, Node};
///
/// let mut node = Node::new();
/// node.insert("/home", "Welcome!");
///
/// // no routes match
/// if let Err(err) = node.at("/foobar") {
///     assert_eq!(err, MatchError::NotFound);
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchError {
    /// No matching route was found.
    NotFound,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matching route not found")
    }
}

impl std::error::Error for MatchError {}
