//! Route-variable storage.
//!
//! Routers extract named segment values from URL path patterns (e.g. the
//! `{id}` in `/items/{id}`) and hand them to Scribe alongside the request.
//! [`Params`] stores them as (name, value) pairs with a small-vector
//! optimization, since nearly all routes carry at most a handful.

use crate::fields::ValueMap;
use smallvec::SmallVec;

/// Maximum number of variables stored inline (stack allocated).
const INLINE_PARAMS: usize = 4;

/// Route variables extracted by the router for a single request.
///
/// Variables are stored as (name, value) pairs in the order the router
/// produced them. Lookups are linear, which beats a map for the small
/// counts seen in practice.
///
/// # Example
///
/// ```rust
/// use scribe_core::Params;
///
/// let mut params = Params::new();
/// params.push("id", "42");
///
/// assert_eq!(params.get("id"), Some("42"));
/// assert_eq!(params.get("unknown"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    inner: SmallVec<[(String, String); INLINE_PARAMS]>,
}

impl Params {
    /// Creates a new empty variable set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable to the set.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()));
    }

    /// Returns the value for a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if there are no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator over the variables in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Re-expresses the variables as a [`ValueMap`] with single-element
    /// value lists, for field-type consistency with form and query maps.
    #[must_use]
    pub fn to_value_map(&self) -> ValueMap {
        let mut map = ValueMap::with_capacity(self.inner.len());
        for (name, value) in &self.inner {
            map.append(name.clone(), value.clone());
        }
        map
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_new() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn test_params_push_and_get() {
        let mut params = Params::new();
        params.push("id", "42");
        params.push("name", "alice");

        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("name"), Some("alice"));
        assert_eq!(params.get("unknown"), None);
    }

    #[test]
    fn test_params_iter_order() {
        let mut params = Params::new();
        params.push("a", "1");
        params.push("b", "2");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_params_from_iterator() {
        let pairs = vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ];

        let params: Params = pairs.into_iter().collect();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("1"));
    }

    #[test]
    fn test_params_to_value_map() {
        let mut params = Params::new();
        params.push("id", "42");
        params.push("action", "view");

        let map = params.to_value_map();
        assert_eq!(map.get("id"), Some(&["42".to_string()][..]));
        assert_eq!(map.get("action"), Some(&["view".to_string()][..]));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_params_to_value_map_empty() {
        let params = Params::new();
        assert!(params.to_value_map().is_empty());
    }

    #[test]
    fn test_params_beyond_inline_capacity() {
        let mut params = Params::new();
        for i in 0..10 {
            params.push(format!("key{i}"), format!("value{i}"));
        }

        assert_eq!(params.len(), 10);
        assert_eq!(params.get("key5"), Some("value5"));
    }
}
