// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

pub struct PragmaCheck;

impl Check for PragmaCheck {
    fn id(&self) -> &'static str {
        "header_pragma"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let finding = match tx.response_headers.first("pragma") {
            Some("no-cache") => Finding::info(self.id(), &tx.url, "Pragma set to no-cache"),
            Some(val) => Finding::warn(
                self.id(),
                &tx.url,
                format!("Site defines a Pragma header with value {}", val),
            ),
            None => Finding::warn(self.id(), &tx.url, "Pragma header not found"),
        };
        Ok(vec![finding])
    }
}
