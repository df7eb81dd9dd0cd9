use std::{fmt, slice};

/// A single URL parameter, consisting of a key and a value.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Param {
    key: String,
    value: String,
}

/// The parameters captured by a route match, in path order.
///
/// The router attaches `Params` to the matched request through its
/// extensions, so the slot is keyed by type and cannot collide with
/// unrelated request data. Handlers and middleware read it back with
/// [`RequestExt::params`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<Param>);

impl Params {
    pub(crate) fn new() -> Self {
        Params(Vec::new())
    }

    /// Returns the value of the first parameter captured under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();
        self.0
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value.as_str())
    }

    /// Returns an iterator over the captured keys and values.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter(self.0.iter())
    }

    /// Returns the number of captured parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameters were captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.0.push(Param {
            key: key.to_owned(),
            value: value.to_owned(),
        });
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator over the keys and values of a route's [parameters](Params).
pub struct ParamsIter<'a>(slice::Iter<'a, Param>);

impl<'a> Iterator for ParamsIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0
            .next()
            .map(|param| (param.key.as_str(), param.value.as_str()))
    }
}

impl ExactSizeIterator for ParamsIter<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Extension trait for reading path parameters off a request.
pub trait RequestExt {
    /// Returns the parameters captured for this request.
    ///
    /// `None` means no parameters were ever attached: either the matched
    /// route had no parameter segments, or no route matched at all.
    fn params(&self) -> Option<&Params>;
}

impl<B> RequestExt for http::Request<B> {
    fn params(&self) -> Option<&Params> {
        self.extensions().get::<Params>()
    }
}
