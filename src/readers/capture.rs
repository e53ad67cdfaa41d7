// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Reader for browser network-capture XML (`entries/entry` trees with nested
//! `request`/`response` elements).
//!
//! Uses the same synthesized status-line shapes as the HAR reader, since the
//! format carries the same fields.

use crate::headers::HeaderMap;
use crate::readers::{url_allowed, DomainFilter, HistoryReader, ReaderError};
use crate::transaction::Transaction;
use roxmltree::Node;
use std::path::Path;
use tracing::debug;

/// Owned per-message fields pulled out of the tree at load time.
#[derive(Debug, Default)]
struct RawMessage {
    method: String,
    url: String,
    status: String,
    status_text: String,
    version: String,
    headers: Vec<(String, String)>,
    body_size: i64,
    content_text: Option<String>,
}

#[derive(Debug)]
struct RawEntry {
    request: RawMessage,
    response: Option<RawMessage>,
}

pub struct BrowserCaptureReader {
    filter: Option<DomainFilter>,
    entries: Option<Vec<RawEntry>>,
}

impl BrowserCaptureReader {
    pub fn new(filter: Option<DomainFilter>) -> Self {
        Self {
            filter,
            entries: None,
        }
    }
}

impl HistoryReader for BrowserCaptureReader {
    fn name(&self) -> &'static str {
        "browser-capture"
    }

    fn load(&mut self, path: &Path) -> Result<(), ReaderError> {
        self.entries = None;

        let text = std::fs::read_to_string(path).map_err(|source| ReaderError::Open {
            reader: self.name(),
            path: path.to_path_buf(),
            source,
        })?;
        let doc = roxmltree::Document::parse(&text).map_err(|e| ReaderError::Parse {
            reader: self.name(),
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut entries = Vec::new();
        let container = doc
            .descendants()
            .find(|n| n.has_tag_name("entries"));
        if let Some(container) = container {
            for entry in container.children().filter(|n| n.has_tag_name("entry")) {
                let request = entry
                    .children()
                    .find(|n| n.has_tag_name("request"))
                    .map(|n| extract_message(&n))
                    .unwrap_or_default();
                let response = entry
                    .children()
                    .find(|n| n.has_tag_name("response"))
                    .map(|n| extract_message(&n));
                entries.push(RawEntry { request, response });
            }
        }

        self.entries = Some(entries);
        Ok(())
    }

    fn entries(&self) -> Result<Box<dyn Iterator<Item = Transaction> + '_>, ReaderError> {
        let entries = self.entries.as_ref().ok_or(ReaderError::NotLoaded {
            reader: self.name(),
        })?;

        let iter = entries.iter().filter_map(move |entry| {
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
            Some(Transaction {
                url: req.url.clone(),
                request_status: format!("{} {} {}", req.method, req.url, req.version),
                request_headers: header_map(&req.headers),
                request_body: body_of(req),
                response_status: format!(
                    "{} {} {}",
                    response.version, response.status, response.status_text
                ),
                response_headers: header_map(&response.headers),
                response_body: body_of(response),
            })
        });

        Ok(Box::new(iter))
    }
}

fn child_text(node: &Node, tag: &str) -> Option<String> {
    node.children()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
        .map(str::to_string)
}

fn extract_message(node: &Node) -> RawMessage {
    let mut msg = RawMessage {
        method: child_text(node, "method").unwrap_or_default(),
        url: child_text(node, "url").unwrap_or_default(),
        status: child_text(node, "status").unwrap_or_default(),
        status_text: child_text(node, "statusText").unwrap_or_default(),
        version: child_text(node, "httpVersion").unwrap_or_default(),
        headers: Vec::new(),
        body_size: child_text(node, "bodySize")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0),
        content_text: None,
    };

    if let Some(headers) = node.children().find(|n| n.has_tag_name("headers")) {
        for header in headers.children().filter(|n| n.has_tag_name("header")) {
            let name = child_text(&header, "name").unwrap_or_default();
            let value = child_text(&header, "value").unwrap_or_default();
            if !name.is_empty() {
                msg.headers.push((name, value));
            }
        }
    }

    // Binary or undecodable content ships without a text node; that reads as
    // an empty body, not a failure.
    msg.content_text = node
        .children()
        .find(|n| n.has_tag_name("content"))
        .and_then(|c| child_text(&c, "text"));

    msg
}

fn body_of(msg: &RawMessage) -> String {
    if msg.body_size == 0 {
        String::new()
    } else {
        msg.content_text.clone().unwrap_or_default()
    }
}

fn header_map(pairs: &[(String, String)]) -> HeaderMap {
    let mut map = HeaderMap::with_multiple();
    for (name, value) in pairs {
        map.set(name, value.as_str());
    }
    map
}
