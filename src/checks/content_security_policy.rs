// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

/// Covers `Content-Security-Policy` and its report-only variant. A missing
/// enforcing policy warns; a missing report-only policy is merely noted.
pub struct ContentSecurityPolicyCheck;

impl Check for ContentSecurityPolicyCheck {
    fn id(&self) -> &'static str {
        "header_content_security_policy"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let headers = &tx.response_headers;
        let mut findings = Vec::new();

        match headers.first("content-security-policy") {
            Some(val) => findings.push(Finding::info(
                self.id(),
                &tx.url,
                format!("CSP with policy: {}", val),
            )),
            None => findings.push(Finding::warn(self.id(), &tx.url, "No CSP defined")),
        }

        match headers.first("content-security-policy-report-only") {
            Some(val) => findings.push(Finding::info(
                self.id(),
                &tx.url,
                format!("CSP-RO with policy: {}", val),
            )),
            None => findings.push(Finding::info(self.id(), &tx.url, "No CSP-RO defined")),
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
    fn both_policies_present_are_informational() {
        let tx = make_transaction_with_response(&[
            ("Content-Security-Policy", "default-src 'self'"),
            ("Content-Security-Policy-Report-Only", "default-src *"),
        ]);
        let findings = ContentSecurityPolicyCheck.inspect(&tx).unwrap();
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.severity == Severity::Info));
        assert!(findings[0].message.contains("default-src 'self'"));
    }

    #[test]
    fn missing_enforcing_policy_warns_missing_report_only_informs() {
        let tx = make_transaction_with_response(&[]);
        let findings = ContentSecurityPolicyCheck.inspect(&tx).unwrap();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].severity, Severity::Warn);
        assert!(findings[0].message.contains("No CSP defined"));
        assert_eq!(findings[1].severity, Severity::Info);
        assert!(findings[1].message.contains("No CSP-RO defined"));
    }
}
