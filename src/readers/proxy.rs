// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Reader for proxy export XML: a tree of `<item>` elements carrying the
//! captured URL plus raw or base64-encoded HTTP/1.x request and response
//! text.

use crate::headers::HeaderMap;
use crate::readers::{url_allowed, DomainFilter, HistoryReader, ReaderError};
use crate::transaction::Transaction;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::path::Path;
use tracing::debug;

/// Per-item raw text captured at load time; decoding and header parsing
/// happen lazily during iteration.
struct RawItem {
    url: String,
    request: Option<String>,
    response: Option<String>,
}

pub struct ProxyExportReader {
    filter: Option<DomainFilter>,
    items: Option<Vec<RawItem>>,
}

impl ProxyExportReader {
    pub fn new(filter: Option<DomainFilter>) -> Self {
        Self {
            filter,
            items: None,
        }
    }
}

impl HistoryReader for ProxyExportReader {
    fn name(&self) -> &'static str {
        "proxy-export"
    }

    fn load(&mut self, path: &Path) -> Result<(), ReaderError> {
        self.items = None;

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

        let mut items = Vec::new();
        for item in doc
            .root_element()
            .children()
            .filter(|n| n.has_tag_name("item"))
        {
            let mut raw = RawItem {
                url: String::new(),
                request: None,
                response: None,
            };
            for child in item.children() {
                match child.tag_name().name() {
                    "url" => raw.url = child.text().unwrap_or("").to_string(),
                    "request" => raw.request = child.text().map(str::to_string),
                    "response" => raw.response = child.text().map(str::to_string),
                    _ => {}
                }
            }
            items.push(raw);
        }

        self.items = Some(items);
        Ok(())
    }

    fn entries(&self) -> Result<Box<dyn Iterator<Item = Transaction> + '_>, ReaderError> {
        let items = self.items.as_ref().ok_or(ReaderError::NotLoaded {
            reader: self.name(),
        })?;

        let iter = items.iter().filter_map(move |item| {
            if !url_allowed(self.filter.as_ref(), &item.url) {
                return None;
            }

            // A failed exchange has no response text; never surface it.
            let response = match &item.response {
                Some(r) => r,
                None => {
                    debug!(url = %item.url, "skipping item without response");
                    return None;
                }
            };

            let request = item.request.as_deref().unwrap_or("");
            let (request_status, request_headers, request_body) =
                split_message(&decode_text(request));
            let (response_status, response_headers, response_body) =
                split_message(&decode_text(response));

            Some(Transaction {
                url: item.url.clone(),
                request_status,
                request_headers,
                request_body,
                response_status,
                response_headers,
                response_body,
            })
        });

        Ok(Box::new(iter))
    }
}

/// Base64-decode captured message text, falling back to the raw text when it
/// is not valid base64 (exports mix both encodings).
fn decode_text(text: &str) -> String {
    let trimmed = text.trim();
    match BASE64.decode(trimmed) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(decoded) => decoded,
            Err(_) => text.to_string(),
        },
        Err(_) => text.to_string(),
    }
}

/// Split raw HTTP/1.x text into status line, header map, and body at the
/// first blank line. XML transport normalizes CRLF to LF, so a bare `\n\n`
/// separator is accepted too. Text without a blank line is all head; header
/// lines without a colon are ignored.
fn split_message(text: &str) -> (String, HeaderMap, String) {
    let (head, body) = match text.split_once("\r\n\r\n") {
        Some((head, body)) => (head, body),
        None => match text.split_once("\n\n") {
            Some((head, body)) => (head, body),
            None => (text, ""),
        },
    };

    let mut lines = head.lines();
    let status = lines.next().unwrap_or("").to_string();

    let mut headers = HeaderMap::with_multiple();
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            headers.set(name.trim(), value.trim_start());
        }
    }

    (status, headers, body.to_string())
}
