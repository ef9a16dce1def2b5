//! Path segment and query string encoding.

use std::fmt::Display;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::form_urlencoded;

/// Everything except RFC 3986 unreserved characters.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a flat identifier for use as one path segment.
///
/// Every reserved character is escaped, `/` included, so the identifier
/// can never change the shape of the path.
///
/// ```
/// use adobe_client::pipeline::encode_segment;
///
/// assert_eq!(encode_segment("a b/c:d@e"), "a%20b%2Fc%3Ad%40e");
/// ```
#[must_use]
pub fn encode_segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}

/// Encodes a hierarchical repository path, keeping its `/` separators.
///
/// Each segment is escaped as by [`encode_segment`]; the separators are
/// restored afterwards and the result always starts with exactly one `/`.
///
/// ```
/// use adobe_client::pipeline::encode_hierarchical;
///
/// assert_eq!(
///     encode_hierarchical("content/dam/my site/a:b"),
///     "/content/dam/my%20site/a%3Ab"
/// );
/// ```
#[must_use]
pub fn encode_hierarchical(path: &str) -> String {
    let encoded = encode_segment(path).replace("%2F", "/");
    format!("/{}", encoded.trim_start_matches('/'))
}

/// Ordered query options, each key present at most once.
///
/// Setting a key that already exists replaces its value in place, so
/// defaults can be layered under caller options without reordering.
///
/// ```
/// use adobe_client::pipeline::QueryParams;
///
/// let query = QueryParams::new()
///     .with("start", 0)
///     .with("limit", 20)
///     .with("sort", "updateTime:desc");
///
/// assert_eq!(query.encode(), "start=0&limit=20&sort=updateTime%3Adesc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty set of options.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Returns `self` with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key` to `value`, replacing an existing value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Display) {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Sets every option of `other` on `self`, in `other`'s order.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the options as `application/x-www-form-urlencoded`.
    ///
    /// Spaces become `+`. An empty set encodes to an empty string.
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Appends the encoded options to `path`.
    ///
    /// Uses `?`, or `&` when `path` already has a query. Returns `path`
    /// unchanged when there are no options.
    #[must_use]
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            return path.to_string();
        }
        let separator = if path.contains('?') { '&' } else { '?' };
        format!("{path}{separator}{}", self.encode())
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.set(key, value);
        }
        query
    }
}
