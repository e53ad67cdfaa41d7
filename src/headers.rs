// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Ordered, case-insensitive header storage for normalized history records.
//!
//! Captured history may carry header names and values that strict HTTP types
//! reject, so this map stores raw strings. Names are folded to lowercase on
//! insertion; iteration preserves insertion order, which keeps finding
//! streams deterministic for identical inputs.

use indexmap::IndexMap;
use serde::Serialize;

/// Value slot for one header name: a single value, or the ordered sequence it
/// was promoted to when the same name was inserted again with multiplicity
/// enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Single(String),
    Multi(Vec<String>),
}

impl HeaderValue {
    /// The first (or only) value.
    pub fn first(&self) -> &str {
        match self {
            HeaderValue::Single(v) => v,
            HeaderValue::Multi(vs) => vs.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// Iterate all values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            HeaderValue::Single(v) => std::slice::from_ref(v).iter().map(String::as_str),
            HeaderValue::Multi(vs) => vs.as_slice().iter().map(String::as_str),
        }
    }

    /// Render as a single string; sequences join with `", "`.
    pub fn to_joined(&self) -> String {
        match self {
            HeaderValue::Single(v) => v.clone(),
            HeaderValue::Multi(vs) => vs.join(", "),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            HeaderValue::Single(v) => {
                *self = HeaderValue::Multi(vec![std::mem::take(v), value]);
            }
            HeaderValue::Multi(vs) => vs.push(value),
        }
    }
}

/// Case-insensitive header map preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeaderMap {
    entries: IndexMap<String, HeaderValue>,
    #[serde(skip)]
    allow_multiple: bool,
}

impl HeaderMap {
    /// A map where repeated insertion of a name overwrites the stored value.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            allow_multiple: false,
        }
    }

    /// A map where repeated insertion of a name appends instead of
    /// overwriting.
    pub fn with_multiple() -> Self {
        Self {
            entries: IndexMap::new(),
            allow_multiple: true,
        }
    }

    /// Store `value` under the case-folded `name`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_lowercase();
        let value = value.into();
        if self.allow_multiple {
            match self.entries.get_mut(&name) {
                Some(existing) => existing.push(value),
                None => {
                    self.entries.insert(name, HeaderValue::Single(value));
                }
            }
        } else {
            self.entries.insert(name, HeaderValue::Single(value));
        }
    }

    /// The stored value(s) for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.entries.get(&name.to_ascii_lowercase())
    }

    /// The first stored value for `name`, or `default` when absent.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).map(HeaderValue::first).unwrap_or(default)
    }

    /// The first stored value for `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name).map(HeaderValue::first)
    }

    /// Iterate every value stored under `name`, in insertion order.
    pub fn all<'a>(&'a self, name: &str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self.get(name) {
            Some(v) => Box::new(v.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Iterate `(name, value)` entries in insertion order. Names are the
    /// case-folded forms.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Set-Cookie", "set-cookie")]
    #[case("SET-COOKIE", "set-cookie")]
    #[case("Content-Type", "CONTENT-TYPE")]
    fn lookup_is_case_insensitive(#[case] insert_as: &str, #[case] query_as: &str) {
        let mut h = HeaderMap::new();
        h.set(insert_as, "x");
        assert_eq!(h.first(query_as), Some("x"));
        assert!(h.contains(query_as));
    }

    #[test]
    fn multiplicity_enabled_promotes_to_sequence() {
        let mut h = HeaderMap::with_multiple();
        h.set("Set-Cookie", "a=1");
        h.set("set-cookie", "b=2");
        assert_eq!(
            h.get("SET-COOKIE"),
            Some(&HeaderValue::Multi(vec!["a=1".into(), "b=2".into()]))
        );
        let all: Vec<_> = h.all("set-cookie").collect();
        assert_eq!(all, vec!["a=1", "b=2"]);
    }

    #[test]
    fn multiplicity_disabled_overwrites() {
        let mut h = HeaderMap::new();
        h.set("X-Test", "first");
        h.set("x-test", "second");
        assert_eq!(h.get("x-test"), Some(&HeaderValue::Single("second".into())));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn get_or_falls_back_for_missing_names() {
        let h = HeaderMap::new();
        assert_eq!(h.get_or("missing", "fallback"), "fallback");
        assert!(h.get("missing").is_none());
        assert!(h.all("missing").next().is_none());
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut h = HeaderMap::with_multiple();
        h.set("B-Header", "1");
        h.set("A-Header", "2");
        h.set("C-Header", "3");
        let names: Vec<_> = h.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b-header", "a-header", "c-header"]);
    }

    #[test]
    fn joined_rendering_for_sequences() {
        let mut h = HeaderMap::with_multiple();
        h.set("via", "proxy-a");
        h.set("via", "proxy-b");
        assert_eq!(h.get("via").unwrap().to_joined(), "proxy-a, proxy-b");
        assert_eq!(h.get("via").unwrap().first(), "proxy-a");
    }

    #[test]
    fn serializes_as_ordered_map() {
        let mut h = HeaderMap::with_multiple();
        h.set("Server", "nginx");
        h.set("Set-Cookie", "a=1");
        h.set("Set-Cookie", "b=2");
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"server":"nginx","set-cookie":["a=1","b=2"]}"#);
    }
}
