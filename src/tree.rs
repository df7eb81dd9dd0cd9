//! The segment trie backing the router.
//!
//! Each registered path is split on `/` and inserted one segment at a time.
//! A node keeps its literal children in a map and its parameter branch in a
//! separate slot, so a literal match always wins over a parameter match at
//! the same depth without relying on lookup order.

use std::collections::HashMap;

use crate::error::MatchError;
use crate::params::Params;

/// A node in a segment trie.
///
/// Values are stored on the node that terminates a registered path. The trie
/// is append-only: nodes are created on first registration and never removed.
///
/// `Node` is generic over the stored value, so it can hold anything from a
/// boxed handler to a plain string:
///
/// ```rust
/// use trailhead::Node;
///
/// let mut node = Node::new();
/// node.insert("/users/:id", "user");
///
/// let matched = node.at("/users/42").unwrap();
/// assert_eq!(*matched.value, "user");
/// assert_eq!(matched.params.get("id"), Some("42"));
/// ```
#[derive(Debug)]
pub struct Node<T> {
    statics: HashMap<String, Node<T>>,
    param: Option<Box<Node<T>>>,
    param_name: Option<String>,
    value: Option<T>,
}

/// A successful route lookup.
#[derive(Debug)]
pub struct Match<'a, T> {
    /// The value registered for the matched path.
    pub value: &'a T,
    /// The parameters captured while walking the path.
    pub params: Params,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            statics: HashMap::new(),
            param: None,
            param_name: None,
            value: None,
        }
    }
}

impl<T> Node<T> {
    /// Creates an empty root node.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_param_name(name: &str) -> Self {
        Self {
            param_name: Some(name.to_owned()),
            ..Self::default()
        }
    }

    /// Registers `value` under `path`.
    ///
    /// One leading `/` is stripped; the rest of the path is split on `/` and
    /// each segment becomes one level of the trie. A segment starting with
    /// `:` followed by at least one character is a named parameter; anything
    /// else, including empty segments and the bare `":"`, is a literal.
    ///
    /// Registering the same path twice silently replaces the previous value.
    /// The name of a parameter segment is fixed by the first registration
    /// that creates its branch; later registrations through the same branch
    /// reuse it. Insertion never fails.
    pub fn insert(&mut self, path: &str, value: T) {
        let path = path.strip_prefix('/').unwrap_or(path);

        let mut current = self;
        for segment in path.split('/') {
            current = if is_param(segment) {
                &mut **current
                    .param
                    .get_or_insert_with(|| Box::new(Node::with_param_name(&segment[1..])))
            } else {
                current.statics.entry(segment.to_owned()).or_default()
            };
        }

        current.value = Some(value);
    }

    /// Looks up the value registered for `path`.
    ///
    /// The walk tries the literal child for each segment first and falls back
    /// to the parameter branch, recording the segment text under the branch's
    /// parameter name. The lookup fails if a segment matches neither, if the
    /// path ends short of a registered route, or if it ends on a node that
    /// only exists as a prefix of longer routes.
    pub fn at(&self, path: &str) -> Result<Match<'_, T>, MatchError> {
        let path = path.strip_prefix('/').unwrap_or(path);

        let mut params = Params::new();
        let mut current = self;
        for segment in path.split('/') {
            if let Some(next) = current.statics.get(segment) {
                current = next;
            } else if let Some(next) = current.param.as_deref() {
                current = next;
                if let Some(name) = &current.param_name {
                    params.push(name, segment);
                }
            } else {
                return Err(MatchError::NotFound);
            }
        }

        match &current.value {
            Some(value) => Ok(Match { value, params }),
            None => Err(MatchError::NotFound),
        }
    }
}

// A parameter segment is a `:` followed by at least one character.
fn is_param(segment: &str) -> bool {
    segment.len() > 1 && segment.starts_with(':')
}
