// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Shared helpers for the integration suites.

#![allow(dead_code)]

use audit_http::audit::{CheckEngine, Finding};
use audit_http::checks;
use audit_http::config::Config;
use audit_http::readers::HistoryReader;
use std::path::{Path, PathBuf};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Load a fixture and run the default check set over every transaction.
pub fn scan(reader: &mut dyn HistoryReader, path: &Path) -> Vec<Finding> {
    scan_with_config(reader, path, &Config::default())
}

pub fn scan_with_config(
    reader: &mut dyn HistoryReader,
    path: &Path,
    cfg: &Config,
) -> Vec<Finding> {
    reader.load(path).expect("fixture should load");
    let engine = CheckEngine::new(checks::default_checks(cfg));
    let mut findings = Vec::new();
    for tx in reader.entries().expect("loaded reader should iterate") {
        findings.extend(engine.run(&tx));
    }
    findings
}
