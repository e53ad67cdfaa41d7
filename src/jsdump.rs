// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Optional observer that persists JavaScript bodies from the transaction
//! stream.
//!
//! Not a check: it never emits findings and the engine never sees it. Only
//! fresh `200` responses for `.js` paths are written; cache hits (304) and
//! already-dumped files are left alone.

use crate::transaction::Transaction;
use std::path::PathBuf;
use tracing::{debug, info};
use url::Url;

pub struct JsDumper {
    out_dir: PathBuf,
}

impl JsDumper {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Observe one transaction; returns the written path when a body was
    /// dumped.
    pub fn observe(&self, tx: &Transaction) -> anyhow::Result<Option<PathBuf>> {
        let Ok(url) = Url::parse(&tx.url) else {
            debug!(url = %tx.url, "unparseable URL, not dumping");
            return Ok(None);
        };

        if !url.path().ends_with(".js") {
            return Ok(None);
        }
        if tx.response_code() != Some(200) {
            return Ok(None);
        }

        let Some(name) = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|s| !s.is_empty())
        else {
            return Ok(None);
        };

        let target = self.out_dir.join(name);
        if target.exists() {
            debug!(path = %target.display(), "already dumped, skipping");
            return Ok(None);
        }

        std::fs::write(&target, &tx.response_body)?;
        info!(path = %target.display(), url = %tx.url, "dumped JavaScript body");
        Ok(Some(target))
    }
}
