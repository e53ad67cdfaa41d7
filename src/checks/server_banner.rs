// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;
use regex::Regex;

/// A digit anywhere in the `Server` banner implies a specific version is
/// being disclosed.
pub struct ServerBannerCheck {
    version_re: Regex,
}

impl ServerBannerCheck {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new("[0-9]").expect("static pattern"),
        }
    }
}

impl Default for ServerBannerCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for ServerBannerCheck {
    fn id(&self) -> &'static str {
        "header_server"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let Some(val) = tx.response_headers.first("server") else {
            return Ok(Vec::new());
        };

        let finding = if self.version_re.is_match(val) {
            Finding::warn(
                self.id(),
                &tx.url,
                format!("Server with specific version found: \"{}\"", val),
            )
        } else {
            Finding::info(self.id(), &tx.url, format!("Server value found: \"{}\"", val))
        };
        Ok(vec![finding])
    }
}
