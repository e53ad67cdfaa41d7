// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

/// Auxiliary CORS headers that are each worth an informational note when
/// present.
const CORS_HEADERS: &[&str] = &[
    "access-control-allow-methods",
    "access-control-allow-headers",
    "access-control-max-age",
    "access-control-expose-headers",
    "access-control-allow-credentials",
];

pub struct CorsCheck;

impl Check for CorsCheck {
    fn id(&self) -> &'static str {
        "cors"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let mut findings = Vec::new();
        let headers = &tx.response_headers;

        if let Some(origin) = headers.first("access-control-allow-origin") {
            if origin == "*" {
                findings.push(
                    Finding::warn(
                        self.id(),
                        &tx.url,
                        "Widely-scoped Access-Control-Allow-Origin header",
                    )
                    .with_response_headers(headers),
                );

                if headers.contains("access-control-allow-credentials") {
                    findings.push(
                        Finding::warn(self.id(), &tx.url, "Wildcard ACAO with credentials allowed")
                            .with_response_headers(headers),
                    );
                }

                let exposes_authorization = ["access-control-expose-headers", "access-control-allow-headers"]
                    .into_iter()
                    .any(|name| {
                        headers
                            .first(name)
                            .map(|v| v.to_ascii_lowercase().contains("authorization"))
                            .unwrap_or(false)
                    });
                if exposes_authorization {
                    findings.push(
                        Finding::warn(self.id(), &tx.url, "Wildcard ACAO with authorization allowed")
                            .with_response_headers(headers),
                    );
                }
            } else {
                findings.push(Finding::info(
                    self.id(),
                    &tx.url,
                    format!("CORS origin: {}", origin),
                ));
            }
        }

        for name in CORS_HEADERS {
            if let Some(val) = headers.get(name) {
                findings.push(Finding::info(
                    self.id(),
                    &tx.url,
                    format!("CORS header {} with value {}", name, val.to_joined()),
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
    use rstest::rstest;

    #[test]
    fn wildcard_with_credentials_yields_two_warns() {
        let tx = make_transaction_with_response(&[
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Credentials", "true"),
        ]);
        let findings = CorsCheck.inspect(&tx).unwrap();

        let warns: Vec<_> = findings
            .iter()
            .filter(|f| f.severity == Severity::Warn)
            .collect();
        assert!(warns.len() >= 2);
        assert!(warns.iter().any(|f| f.message.contains("Widely-scoped")));
        assert!(warns.iter().any(|f| f.message.contains("credentials")));
    }

    #[test]
    fn wildcard_with_authorization_exposure_warns() {
        let tx = make_transaction_with_response(&[
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Expose-Headers", "Authorization, X-Total"),
        ]);
        let findings = CorsCheck.inspect(&tx).unwrap();
        assert!(findings
            .iter()
            .any(|f| f.severity == Severity::Warn && f.message.contains("authorization")));
    }

    #[test]
    fn scoped_origin_is_informational() {
        let tx = make_transaction_with_response(&[(
            "Access-Control-Allow-Origin",
            "https://app.example.com",
        )]);
        let findings = CorsCheck.inspect(&tx).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
        assert!(findings[0].message.contains("https://app.example.com"));
    }

    #[rstest]
    #[case("Access-Control-Allow-Methods", "GET, POST")]
    #[case("Access-Control-Allow-Headers", "X-Requested-With")]
    #[case("Access-Control-Max-Age", "600")]
    #[case("Access-Control-Expose-Headers", "X-Total")]
    #[case("Access-Control-Allow-Credentials", "true")]
    fn auxiliary_headers_each_note_their_value(#[case] name: &str, #[case] value: &str) {
        let tx = make_transaction_with_response(&[(name, value)]);
        let findings = CorsCheck.inspect(&tx).unwrap();
        assert!(findings.iter().any(|f| {
            f.severity == Severity::Info
                && f.message.contains(&name.to_ascii_lowercase())
                && f.message.contains(value)
        }));
    }

    #[test]
    fn no_cors_headers_no_findings() {
        let tx = make_transaction_with_response(&[("Content-Type", "text/html")]);
        assert!(CorsCheck.inspect(&tx).unwrap().is_empty());
    }
}
