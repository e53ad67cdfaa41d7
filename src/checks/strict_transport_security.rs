// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

pub struct StrictTransportSecurityCheck;

impl Check for StrictTransportSecurityCheck {
    fn id(&self) -> &'static str {
        "header_strict_transport_security"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let finding = match tx.response_headers.first("strict-transport-security") {
            Some(val) => Finding::info(
                self.id(),
                &tx.url,
                format!("HSTS found with value: {}", val),
            ),
            None => Finding::warn(self.id(), &tx.url, "HSTS missing"),
        };
        Ok(vec![finding])
    }
}
