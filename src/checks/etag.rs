// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

/// ETags can leak inode-style server state and make cached resources
/// fingerprintable across visits.
pub struct EtagCheck;

impl Check for EtagCheck {
    fn id(&self) -> &'static str {
        "etag"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        match tx.response_headers.first("etag") {
            Some(val) => Ok(vec![Finding::warn(
                self.id(),
                &tx.url,
                format!("ETag in response: {}", val),
            )]),
            None => Ok(Vec::new()),
        }
    }
}
