// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

pub struct ContentTypeOptionsCheck;

impl Check for ContentTypeOptionsCheck {
    fn id(&self) -> &'static str {
        "header_x_content_type_options"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let finding = match tx.response_headers.first("x-content-type-options") {
            Some("nosniff") => Finding::info(
                self.id(),
                &tx.url,
                "X-Content-Type-Options set to nosniff",
            ),
            Some(val) => Finding::warn(
                self.id(),
                &tx.url,
                format!("Weak X-Content-Type-Options value: {}", val),
            ),
            None => Finding::warn(self.id(), &tx.url, "X-Content-Type-Options not found"),
        };
        Ok(vec![finding])
    }
}
