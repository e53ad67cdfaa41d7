// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

pub struct WwwAuthenticateCheck;

impl Check for WwwAuthenticateCheck {
    fn id(&self) -> &'static str {
        "header_www_authenticate"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let Some(val) = tx.response_headers.first("www-authenticate") else {
            return Ok(Vec::new());
        };

        let finding = if val.contains("Basic realm") {
            Finding::warn(
                self.id(),
                &tx.url,
                format!("URL supports Basic authentication: {}", val),
            )
        } else {
            Finding::info(self.id(), &tx.url, format!("URL authentication: {}", val))
        };
        Ok(vec![finding])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Severity;
    use crate::test_helpers::make_transaction_with_response;
    use rstest::rstest;

    #[rstest]
    #[case("Basic realm=\"intranet\"", Severity::Warn)]
    #[case("Digest realm=\"x\", nonce=\"y\"", Severity::Info)]
    #[case("Bearer", Severity::Info)]
    fn policy(#[case] value: &str, #[case] expected: Severity) {
        let tx = make_transaction_with_response(&[("WWW-Authenticate", value)]);
        let findings = WwwAuthenticateCheck.inspect(&tx).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, expected);
    }

    #[test]
    fn absent_is_silent() {
        let tx = make_transaction_with_response(&[]);
        assert!(WwwAuthenticateCheck.inspect(&tx).unwrap().is_empty());
    }
}
