// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use crate::audit::Finding;
use crate::checks::Check;
use crate::transaction::Transaction;

/// Classifies `X-Frame-Options` rather than judging it: every present value is
/// informational, only a missing header warns.
pub struct FrameOptionsCheck;

impl Check for FrameOptionsCheck {
    fn id(&self) -> &'static str {
        "header_x_frame_options"
    }

    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>> {
        let finding = match tx.response_headers.first("x-frame-options") {
            Some(val) if val.eq_ignore_ascii_case("deny") => {
                Finding::info(self.id(), &tx.url, "Site denies framing")
            }
            Some(val) if val.eq_ignore_ascii_case("sameorigin") => {
                Finding::info(self.id(), &tx.url, "Site allows framing from same origin")
            }
            Some(val) if val.to_ascii_lowercase().starts_with("allow") => Finding::info(
                self.id(),
                &tx.url,
                format!("Site allows framing from: {}", val),
            ),
            Some(val) => Finding::info(
                self.id(),
                &tx.url,
                format!("Non-standard X-Frame-Options value: {}", val),
            ),
            None => Finding::warn(self.id(), &tx.url, "X-Frame-Options header not defined"),
        };
        Ok(vec![finding])
    }
}
