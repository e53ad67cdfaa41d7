// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Shared test utilities to reduce duplication across test modules.

use crate::audit::{Finding, Severity};
use crate::config::Config;
use crate::headers::HeaderMap;
use crate::transaction::Transaction;

/// Create a minimal transaction with empty headers and bodies.
pub fn make_transaction(url: &str) -> Transaction {
    Transaction {
        url: url.to_string(),
        request_status: format!("GET {} HTTP/1.1", url),
        request_headers: HeaderMap::with_multiple(),
        request_body: String::new(),
        response_status: "HTTP/1.1 200 OK".to_string(),
        response_headers: HeaderMap::with_multiple(),
        response_body: String::new(),
    }
}

/// Create a transaction with the given response header pairs. Repeated names
/// accumulate.
pub fn make_transaction_with_response(pairs: &[(&str, &str)]) -> Transaction {
    let mut tx = make_transaction("http://example.com/");
    for (name, value) in pairs {
        tx.response_headers.set(name, *value);
    }
    tx
}

/// The severity of a single-finding result.
pub fn only_severity(findings: &[Finding]) -> Severity {
    assert_eq!(findings.len(), 1, "expected exactly one finding");
    findings[0].severity
}

/// Turn a check off in the config, the way a `[checks.<id>]` table would.
pub fn disable_check(cfg: &mut Config, check: &str) {
    let mut table = toml::map::Map::new();
    table.insert("enabled".to_string(), toml::Value::Boolean(false));
    cfg.checks
        .insert(check.to_string(), toml::Value::Table(table));
}

/// Write `content` to a fresh temp file and keep the handle alive.
pub fn write_temp_file(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}
