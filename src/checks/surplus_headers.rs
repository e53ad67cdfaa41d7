// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

/// Response headers the dedicated checks already cover, plus the ordinary
/// plumbing nobody needs to review by hand.
const EXPECTED_HEADERS: &[&str] = &[
    "cache-control",
    "pragma",
    "x-xss-protection",
    "x-content-type-options",
    "expires",
    "x-frame-options",
    "strict-transport-security",
    "x-powered-by",
    "server",
    "www-authenticate",
    "content-security-policy",
    "content-security-policy-report-only",
];

/// Surfaces every response header outside the expected set as an
/// informational finding, so unusual headers get a pair of human eyes.
pub struct SurplusHeadersCheck;

impl Check for SurplusHeadersCheck {
    fn id(&self) -> &'static str {
        "header_surplus"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let mut findings = Vec::new();
        for (name, value) in tx.response_headers.iter() {
            if !EXPECTED_HEADERS.contains(&name) {
                findings.push(Finding::info(
                    self.id(),
                    &tx.url,
                    format!("Response header {} with value {}", name, value.to_joined()),
                ));
            }
        }
        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Severity;
    use crate::test_helpers::make_transaction_with_response;

    #[test]
    fn unexpected_headers_are_surfaced_in_order() {
        let tx = make_transaction_with_response(&[
            ("X-Request-Id", "abc"),
            ("Server", "nginx"),
            ("X-Cache", "HIT"),
        ]);
        let findings = SurplusHeadersCheck.inspect(&tx).unwrap();
        let messages: Vec<_> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Response header x-request-id with value abc",
                "Response header x-cache with value HIT",
            ]
        );
        assert!(findings.iter().all(|f| f.severity == Severity::Info));
    }

    #[test]
    fn expected_headers_are_not_reported() {
        let tx = make_transaction_with_response(&[
            ("Cache-Control", "no-store"),
            ("Content-Security-Policy", "default-src 'self'"),
        ]);
        assert!(SurplusHeadersCheck.inspect(&tx).unwrap().is_empty());
    }
}
