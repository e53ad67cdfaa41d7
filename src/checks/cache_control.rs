// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

/// `Cache-Control` on the response. `private` alongside other directives is
/// flagged as contradictory; a policy without `must-revalidate` is weak.
pub struct CacheControlCheck;

impl Check for CacheControlCheck {
    fn id(&self) -> &'static str {
        "header_cache_control"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let mut findings = Vec::new();
        match tx.response_headers.first("cache-control") {
            Some(val) => {
                if val.contains("private") {
                    findings.push(Finding::warn(
                        self.id(),
                        &tx.url,
                        format!("Broken cache control: {}", val),
                    ));
                }
                if !val.contains("must-revalidate") {
                    findings.push(Finding::warn(
                        self.id(),
                        &tx.url,
                        format!("Weak Cache-Control value: {}", val),
                    ));
                } else {
                    findings.push(Finding::info(
                        self.id(),
                        &tx.url,
                        format!("Cache-Control header found: {}", val),
                    ));
                }
            }
            None => findings.push(Finding::warn(
                self.id(),
                &tx.url,
                "Cache-Control header not found",
            )),
        }
        Ok(findings)
    }
}
