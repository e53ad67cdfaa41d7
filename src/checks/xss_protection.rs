// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

pub struct XssProtectionCheck;

impl Check for XssProtectionCheck {
    fn id(&self) -> &'static str {
        "header_x_xss_protection"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let finding = match tx.response_headers.first("x-xss-protection") {
            Some("1; mode=block") => Finding::info(
                self.id(),
                &tx.url,
                "X-XSS-Protection set to blocking mode",
            ),
            Some(val) => Finding::warn(
                self.id(),
                &tx.url,
                format!("Weak X-XSS-Protection value: {}", val),
            ),
            None => Finding::warn(self.id(), &tx.url, "No X-XSS-Protection header defined"),
        };
        Ok(vec![finding])
    }
}
