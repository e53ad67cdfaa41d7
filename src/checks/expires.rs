// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

pub struct ExpiresCheck;

impl Check for ExpiresCheck {
    fn id(&self) -> &'static str {
        "header_expires"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let finding = match tx.response_headers.first("expires") {
            Some(val) => Finding::info(self.id(), &tx.url, format!("Expires value: {}", val)),
            None => Finding::warn(self.id(), &tx.url, "Expires header not defined"),
        };
        Ok(vec![finding])
    }
}
