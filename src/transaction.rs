// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Canonical transaction record produced by every history reader.

use crate::headers::HeaderMap;
use serde::Serialize;

/// One normalized request/response pair from a history source.
///
/// Every field is always populated; an empty string or empty map is a valid
/// value. Readers never yield a transaction whose response was unavailable.
/// Records are read-only once handed to the checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub url: String,
    pub request_status: String,
    pub request_headers: HeaderMap,
    pub request_body: String,
    pub response_status: String,
    pub response_headers: HeaderMap,
    pub response_body: String,
}

impl Transaction {
    /// The numeric status code parsed out of the response status line
    /// (`"HTTP/1.1 200 OK"` → `200`), when the line has one.
    pub fn response_code(&self) -> Option<u16> {
        self.response_status
            .split_ascii_whitespace()
            .nth(1)
            .and_then(|tok| tok.parse().ok())
    }
}
