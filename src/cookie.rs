// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Cookie parsing for `Set-Cookie` (response) and `Cookie` (request) header
//! values.
//!
//! Flags default to `false`, which the checks read as "not present on the
//! wire"; recorded history cannot distinguish an explicitly disabled flag
//! from an omitted one.

use std::collections::BTreeMap;

/// SameSite mode as written in the header, case-folded to the known variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SameSite {
    None,
    Lax,
    Strict,
    /// A literal the header carried that is none of the standard modes.
    Other(String),
}

impl SameSite {
    fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("none") {
            SameSite::None
        } else if raw.eq_ignore_ascii_case("lax") {
            SameSite::Lax
        } else if raw.eq_ignore_ascii_case("strict") {
            SameSite::Strict
        } else {
            SameSite::Other(raw.to_string())
        }
    }
}

/// One parsed cookie.
///
/// `same_site` is `None` when the attribute never appeared, mirroring the
/// flag defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub http_only: bool,
    pub secure: bool,
    pub same_site: Option<SameSite>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub expires: Option<String>,
    pub comment: Option<String>,
    /// Attributes the parser does not recognize, in name order. Bare tokens
    /// are stored with the value `"true"`.
    pub other: BTreeMap<String, String>,
}

impl Cookie {
    /// Parse one `Set-Cookie` header value. Never fails: segments that do not
    /// fit the grammar degrade (a first segment without `=` becomes a cookie
    /// with an empty value).
    pub fn parse_response(value: &str) -> Cookie {
        let value = strip_prefix_ci(value, "set-cookie2:")
            .or_else(|| strip_prefix_ci(value, "set-cookie:"))
            .unwrap_or(value);

        let mut segments = value.split(';');

        let mut cookie = Cookie::default();
        if let Some(first) = segments.next() {
            match first.trim().split_once('=') {
                Some((n, v)) => {
                    cookie.name = n.to_string();
                    cookie.value = v.to_string();
                }
                None => {
                    cookie.name = first.trim().to_string();
                }
            }
        }

        for segment in segments {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            match segment.split_once('=') {
                Some((key, val)) => {
                    let key = key.trim().to_ascii_lowercase();
                    let val = val.trim();
                    match key.as_str() {
                        "domain" => cookie.domain = Some(val.to_string()),
                        "path" => cookie.path = Some(val.to_string()),
                        "expires" => cookie.expires = Some(val.to_string()),
                        "comment" => cookie.comment = Some(val.to_string()),
                        "samesite" => cookie.same_site = Some(SameSite::parse(val)),
                        _ => {
                            cookie.other.insert(key, val.to_string());
                        }
                    }
                }
                None => {
                    let token = segment.to_ascii_lowercase();
                    match token.as_str() {
                        "httponly" => cookie.http_only = true,
                        "secure" => cookie.secure = true,
                        _ => {
                            cookie.other.insert(token, "true".to_string());
                        }
                    }
                }
            }
        }

        cookie
    }

    /// Parse one `Cookie` request header value into its bare name/value
    /// pairs. Request cookies carry no flags, so every segment must be
    /// `name=value`; a segment without `=` is an error.
    pub fn parse_request(value: &str) -> Result<Vec<Cookie>, String> {
        let value = strip_prefix_ci(value, "cookie:").unwrap_or(value);

        let mut cookies = Vec::new();
        for segment in value.split(';') {
            let segment = segment.trim();
            match segment.split_once('=') {
                Some((n, v)) => cookies.push(Cookie {
                    name: n.to_string(),
                    value: v.to_string(),
                    ..Cookie::default()
                }),
                None => {
                    return Err(format!(
                        "request cookie segment without '=': '{}'",
                        segment
                    ))
                }
            }
        }
        Ok(cookies)
    }
}

fn strip_prefix_ci<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    if value.len() >= prefix.len() && value[..prefix.len()].eq_ignore_ascii_case(prefix) {
        Some(&value[prefix.len()..])
    } else {
        None
    }
}
