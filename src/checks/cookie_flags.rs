// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::cookie::{Cookie, SameSite};
use crate::transaction::Transaction;

/// Buckets every `Set-Cookie` in the response by missing hardening flags and
/// by SameSite mode. Each non-empty bucket yields one finding listing the
/// offending raw cookie strings.
pub struct CookieFlagsCheck;

impl Check for CookieFlagsCheck {
    fn id(&self) -> &'static str {
        "cookie_flags"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let mut missing_http_only = Vec::new();
        let mut missing_secure = Vec::new();
        let mut missing_both = Vec::new();
        let mut fully_flagged = Vec::new();
        let mut samesite_none = Vec::new();
        let mut samesite_lax = Vec::new();
        let mut samesite_missing = Vec::new();

        for raw in tx.response_headers.all("set-cookie") {
            let cookie = Cookie::parse_response(raw);

            if !cookie.http_only && !cookie.secure {
                missing_both.push(raw);
            } else if !cookie.http_only {
                missing_http_only.push(raw);
            } else if !cookie.secure {
                missing_secure.push(raw);
            } else {
                fully_flagged.push(raw);
            }

            match cookie.same_site {
                Some(SameSite::None) => samesite_none.push(raw),
                Some(SameSite::Lax) => samesite_lax.push(raw),
                None => samesite_missing.push(raw),
                Some(SameSite::Strict) | Some(SameSite::Other(_)) => {}
            }
        }

        let mut findings = Vec::new();
        let mut warn = |msg: &str, bucket: &[&str]| {
            if !bucket.is_empty() {
                findings.push(Finding::warn(
                    self.id(),
                    &tx.url,
                    format!("{}: {}", msg, bucket.join(", ")),
                ));
            }
        };

        warn("Cookies missing 'HttpOnly'", &missing_http_only);
        warn("Cookies missing 'Secure'", &missing_secure);
        warn("Cookies missing both 'Secure' and 'HttpOnly'", &missing_both);
        warn("Cookies with SameSite explicitly set to None", &samesite_none);
        warn("Cookies with SameSite explicitly set to Lax", &samesite_lax);
        warn("Cookies missing SameSite", &samesite_missing);

        if !fully_flagged.is_empty() {
            findings.push(Finding::info(
                self.id(),
                &tx.url,
                format!("Cookies with the correct flags: {}", fully_flagged.join(", ")),
            ));
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
    fn bare_cookie_lands_in_missing_both_and_missing_samesite() {
        let tx = make_transaction_with_response(&[("Set-Cookie", "id=1")]);
        let findings = CookieFlagsCheck.inspect(&tx).unwrap();

        assert!(findings
            .iter()
            .any(|f| f.severity == Severity::Warn
                && f.message.contains("missing both")
                && f.message.contains("id=1")));
        assert!(findings
            .iter()
            .any(|f| f.severity == Severity::Warn
                && f.message.contains("missing SameSite")
                && f.message.contains("id=1")));
    }

    #[test]
    fn multiple_cookies_bucket_independently() {
        let tx = make_transaction_with_response(&[
            ("Set-Cookie", "sess=a; HttpOnly; Secure; SameSite=Strict"),
            ("Set-Cookie", "pref=b; Secure"),
            ("Set-Cookie", "track=c; HttpOnly"),
        ]);
        let findings = CookieFlagsCheck.inspect(&tx).unwrap();

        assert!(findings
            .iter()
            .any(|f| f.message.contains("missing 'HttpOnly'") && f.message.contains("pref=b")));
        assert!(findings
            .iter()
            .any(|f| f.message.contains("missing 'Secure'") && f.message.contains("track=c")));
        assert!(findings
            .iter()
            .any(|f| f.severity == Severity::Info && f.message.contains("sess=a")));
    }

    #[rstest]
    #[case("a=1; SameSite=None; Secure; HttpOnly", "explicitly set to None")]
    #[case("a=1; SameSite=none; Secure; HttpOnly", "explicitly set to None")]
    #[case("a=1; SameSite=Lax; Secure; HttpOnly", "explicitly set to Lax")]
    #[case("a=1; Secure; HttpOnly", "missing SameSite")]
    fn samesite_buckets(#[case] cookie: &str, #[case] expected_fragment: &str) {
        let tx = make_transaction_with_response(&[("Set-Cookie", cookie)]);
        let findings = CookieFlagsCheck.inspect(&tx).unwrap();
        assert!(
            findings
                .iter()
                .any(|f| f.severity == Severity::Warn && f.message.contains(expected_fragment)),
            "no '{}' warn for '{}'",
            expected_fragment,
            cookie
        );
    }

    #[test]
    fn strict_samesite_is_not_flagged() {
        let tx = make_transaction_with_response(&[(
            "Set-Cookie",
            "a=1; Secure; HttpOnly; SameSite=Strict",
        )]);
        let findings = CookieFlagsCheck.inspect(&tx).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
    }

    #[test]
    fn no_set_cookie_no_findings() {
        let tx = make_transaction_with_response(&[("Content-Type", "text/html")]);
        assert!(CookieFlagsCheck.inspect(&tx).unwrap().is_empty());
    }
}
