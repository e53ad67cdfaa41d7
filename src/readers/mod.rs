// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! History readers: format-specific adapters that turn a recorded traffic
//! file into a stream of normalized [`Transaction`]s.
//!
//! `load` performs the one-time file read and structural parse; the iterator
//! returned by `entries` does the per-entry work (domain filtering, decoding,
//! header parsing) lazily, one record at a time. A reader whose load failed
//! stays "not loaded" and refuses to iterate.

use crate::transaction::Transaction;
use regex::{Regex, RegexBuilder};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod capture;
pub mod har;
pub mod proxy;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("{reader} reader: no history file has been loaded")]
    NotLoaded { reader: &'static str },

    #[error("{reader} reader: failed to read '{path}'")]
    Open {
        reader: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{reader} reader: failed to parse '{path}': {reason}")]
    Parse {
        reader: &'static str,
        path: PathBuf,
        reason: String,
    },
}

/// A source of normalized transactions.
pub trait HistoryReader {
    /// Short reader name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Read and structurally parse the history file. On failure the reader
    /// remains (or returns to) the not-loaded state.
    fn load(&mut self, path: &Path) -> Result<(), ReaderError>;

    /// Lazily yield transactions from the loaded file. Fails with
    /// [`ReaderError::NotLoaded`] when called before a successful [`load`].
    ///
    /// [`load`]: HistoryReader::load
    fn entries(&self) -> Result<Box<dyn Iterator<Item = Transaction> + '_>, ReaderError>;
}

/// Restricts which transaction URLs a reader yields.
#[derive(Debug, Clone)]
pub struct DomainFilter {
    pattern: Regex,
}

impl DomainFilter {
    /// Treat `domain` as a literal: `.` and `?` are escaped, then the result
    /// is compiled as a case-insensitive pattern searched anywhere in the
    /// URL.
    pub fn literal(domain: &str) -> Result<Self, regex::Error> {
        let escaped = domain.replace('.', "\\.").replace('?', "\\?");
        Self::pattern(&escaped)
    }

    /// Compile a caller-supplied pattern verbatim (case-insensitive).
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: RegexBuilder::new(pattern).case_insensitive(true).build()?,
        })
    }

    pub fn matches(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }
}

/// Shared skip predicate for readers holding an optional filter.
pub(crate) fn url_allowed(filter: Option<&DomainFilter>, url: &str) -> bool {
    filter.map(|f| f.matches(url)).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("example.com", "http://example.com/a", true)]
    #[case("example.com", "http://EXAMPLE.COM/a", true)]
    #[case("example.com", "http://examplexcom/a", false)]
    #[case("example.com", "http://other.org/a", false)]
    #[case("api.example.com", "https://api.example.com/v1?q=1", true)]
    fn literal_filter_escapes_dots(
        #[case] domain: &str,
        #[case] url: &str,
        #[case] expected: bool,
    ) {
        let f = DomainFilter::literal(domain).unwrap();
        assert_eq!(f.matches(url), expected);
    }

    #[test]
    fn literal_filter_escapes_question_marks() {
        let f = DomainFilter::literal("page?id").unwrap();
        assert!(f.matches("http://example.com/page?id=1"));
        assert!(!f.matches("http://example.com/pageXid=1"));
    }

    #[test]
    fn pattern_filter_is_used_verbatim() {
        let f = DomainFilter::pattern(r"(staging|prod)\.example\.com").unwrap();
        assert!(f.matches("https://staging.example.com/"));
        assert!(f.matches("https://PROD.example.com/"));
        assert!(!f.matches("https://dev.example.com/"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(DomainFilter::pattern("(unclosed").is_err());
    }

    #[test]
    fn missing_filter_allows_everything() {
        assert!(url_allowed(None, "http://anything/"));
    }
}
