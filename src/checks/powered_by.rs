// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

pub struct PoweredByCheck;

impl Check for PoweredByCheck {
    fn id(&self) -> &'static str {
        "header_x_powered_by"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        match tx.response_headers.first("x-powered-by") {
            Some(val) => Ok(vec![Finding::warn(
                self.id(),
                &tx.url,
                format!("X-Powered-By value found: {}", val),
            )]),
            None => Ok(Vec::new()),
        }
    }
}
