// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Reader for HAR (HTTP Archive) JSON documents.
//!
//! Status lines do not exist in HAR, so they are synthesized:
//! `"{method} {url} {httpVersion}"` for requests and
//! `"{httpVersion} {status} {statusText}"` for responses.

use crate::headers::HeaderMap;
use crate::readers::{url_allowed, DomainFilter, HistoryReader, ReaderError};
use crate::transaction::Transaction;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct HarFile {
    log: HarLog,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct HarLog {
    entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
struct HarEntry {
    #[serde(default)]
    request: HarRequest,
    #[serde(default)]
    response: Option<HarResponse>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct HarRequest {
    method: String,
    url: String,
    #[serde(rename = "httpVersion")]
    http_version: String,
    headers: Vec<HarHeader>,
    #[serde(rename = "bodySize")]
    body_size: i64,
    #[serde(rename = "postData")]
    post_data: Option<HarPostData>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct HarResponse {
    status: u16,
    #[serde(rename = "statusText")]
    status_text: String,
    #[serde(rename = "httpVersion")]
    http_version: String,
    headers: Vec<HarHeader>,
    #[serde(rename = "bodySize")]
    body_size: i64,
    content: Option<HarContent>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct HarHeader {
    name: String,
    value: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct HarPostData {
    text: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct HarContent {
    text: Option<String>,
}

pub struct HarReader {
    filter: Option<DomainFilter>,
    log: Option<HarLog>,
}

impl HarReader {
    pub fn new(filter: Option<DomainFilter>) -> Self {
        Self { filter, log: None }
    }
}

impl HistoryReader for HarReader {
    fn name(&self) -> &'static str {
        "har"
    }

    fn load(&mut self, path: &Path) -> Result<(), ReaderError> {
        self.log = None;

        let text = std::fs::read_to_string(path).map_err(|source| ReaderError::Open {
            reader: self.name(),
            path: path.to_path_buf(),
            source,
        })?;
        let har: HarFile = serde_json::from_str(&text).map_err(|e| ReaderError::Parse {
            reader: self.name(),
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        self.log = Some(har.log);
        Ok(())
    }

    fn entries(&self) -> Result<Box<dyn Iterator<Item = Transaction> + '_>, ReaderError> {
        let log = self.log.as_ref().ok_or(ReaderError::NotLoaded {
            reader: self.name(),
        })?;

        let iter = log.entries.iter().filter_map(move |entry| {
            if !url_allowed(self.filter.as_ref(), &entry.request.url) {
                return None;
            }

            let response = match &entry.response {
                Some(r) => r,
                None => {
                    debug!(url = %entry.request.url, "skipping entry without response");
                    return None;
                }
            };

            let req = &entry.request;
            let request_status =
                format!("{} {} {}", req.method, req.url, req.http_version);
            let request_body = if req.body_size <= 0 {
                String::new()
            } else {
                req.post_data
                    .as_ref()
                    .map(|p| p.text.clone())
                    .unwrap_or_default()
            };

            let response_status = format!(
                "{} {} {}",
                response.http_version, response.status, response.status_text
            );
            let response_body = if response.body_size <= 0 {
                String::new()
            } else {
                response
                    .content
                    .as_ref()
                    .and_then(|c| c.text.clone())
                    .unwrap_or_default()
            };

            Some(Transaction {
                url: req.url.clone(),
                request_status,
                request_headers: header_map(&req.headers),
                request_body,
                response_status,
                response_headers: header_map(&response.headers),
                response_body,
            })
        });

        Ok(Box::new(iter))
    }
}

fn header_map(headers: &[HarHeader]) -> HeaderMap {
    let mut map = HeaderMap::with_multiple();
    for h in headers {
        map.set(&h.name, h.value.as_str());
    }
    map
}
