// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;
use regex::{Regex, RegexBuilder};

/// Where a signature is allowed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchScope {
    /// URL only.
    Url,
    /// Response body only.
    Body,
    /// The `X-Powered-By` response header.
    Header,
    /// URL or response body. Does not include the header.
    Both,
}

struct Signature {
    name: &'static str,
    pattern: Regex,
    scope: MatchScope,
}

/// Matches URL, body, and `X-Powered-By` against a fixed table of technology
/// signatures. All patterns compile once at construction.
pub struct FingerprintCheck {
    signatures: Vec<Signature>,
}

impl FingerprintCheck {
    pub fn new() -> Self {
        let table: &[(&str, &str, MatchScope)] = &[
            ("WordPress", "/wp-", MatchScope::Both),
            ("WordPress powered by", "Powered By WordPress", MatchScope::Body),
            ("phpMyAdmin", "/phpMyAdmin", MatchScope::Both),
            ("PHP", r"\.php", MatchScope::Url),
            ("Struts 1", r"\.do", MatchScope::Url),
            ("Struts 2", r"\.action", MatchScope::Url),
            ("ASP", r"\.asp$", MatchScope::Url),
            ("ASP.NET", r"\.aspx$", MatchScope::Url),
            ("ASP.NET header", r"ASP\.NET", MatchScope::Header),
            ("Outlook Web Access", "/owa/", MatchScope::Url),
            ("Exchange", "/exchweb", MatchScope::Url),
            ("CGI", "/cgi-?(bin)?", MatchScope::Url),
            ("ColdFusion", r"\.(cfm|cfc)", MatchScope::Url),
        ];

        let signatures = table
            .iter()
            .map(|&(name, pattern, scope)| Signature {
                name,
                pattern: RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("static pattern"),
                scope,
            })
            .collect();

        Self { signatures }
    }
}

impl Default for FingerprintCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for FingerprintCheck {
    fn id(&self) -> &'static str {
        "fingerprint"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let powered_by = tx.response_headers.first("x-powered-by").unwrap_or("");

        let mut findings = Vec::new();
        for sig in &self.signatures {
            let matched = match sig.scope {
                MatchScope::Url => sig.pattern.is_match(&tx.url),
                MatchScope::Body => sig.pattern.is_match(&tx.response_body),
                MatchScope::Header => sig.pattern.is_match(powered_by),
                MatchScope::Both => {
                    sig.pattern.is_match(&tx.url) || sig.pattern.is_match(&tx.response_body)
                }
            };
            if matched {
                findings.push(Finding::info(
                    self.id(),
                    &tx.url,
                    format!("Technology fingerprint: {}", sig.name),
                ));
            }
        }
        Ok(findings)
    }
}
