// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Findings, severities, and the engine that drives checks over a
//! transaction stream.

use crate::checks::Check;
use crate::headers::HeaderMap;
use crate::transaction::Transaction;
use serde::Serialize;
use tracing::debug;

/// Severity of a single finding.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Fixed marker table used by the text renderer.
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Info => "[-]",
            Severity::Warn => "[!]",
            Severity::Error => "[+]",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// One observation emitted by a check for one transaction.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Finding {
    pub severity: Severity,
    pub check: String,
    pub url: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<HeaderMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_headers: Option<HeaderMap>,
}

impl Finding {
    pub fn new(
        severity: Severity,
        check: &str,
        url: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            check: check.to_string(),
            url: url.to_string(),
            message: message.into(),
            request_headers: None,
            response_headers: None,
        }
    }

    pub fn info(check: &str, url: &str, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, check, url, message)
    }

    pub fn warn(check: &str, url: &str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warn, check, url, message)
    }

    /// Attach a snapshot of the response headers as evidence.
    pub fn with_response_headers(mut self, headers: &HeaderMap) -> Self {
        self.response_headers = Some(headers.clone());
        self
    }

    /// Attach a snapshot of the request headers as evidence.
    pub fn with_request_headers(mut self, headers: &HeaderMap) -> Self {
        self.request_headers = Some(headers.clone());
        self
    }
}

/// Runs an ordered list of checks against each transaction.
///
/// Checks run in registration order. A check that returns an error does not
/// abort the run: the failure becomes a single diagnostic finding for that
/// check/URL pair and the remaining checks still execute.
pub struct CheckEngine {
    checks: Vec<Box<dyn Check>>,
}

impl CheckEngine {
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// Ids of the registered checks, in run order.
    pub fn check_ids(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.id()).collect()
    }

    /// Run every registered check against one transaction.
    pub fn run(&self, tx: &Transaction) -> Vec<Finding> {
        let mut findings = Vec::new();
        for check in &self.checks {
            match check.inspect(tx) {
                Ok(mut batch) => findings.append(&mut batch),
                Err(e) => {
                    debug!(check = check.id(), url = %tx.url, error = %e, "check failed");
                    findings.push(Finding::new(
                        Severity::Error,
                        check.id(),
                        &tx.url,
                        format!("check failed: {}", e),
                    ));
                }
            }
        }
        findings
    }
}
