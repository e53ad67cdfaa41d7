// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! End-to-end runs over the browser-capture fixture.

mod common;

use audit_http::audit::Severity;
use audit_http::readers::capture::BrowserCaptureReader;
use audit_http::readers::HistoryReader;
use common::{fixture, scan};

#[test]
fn status_lines_use_the_har_convention() {
    let mut reader = BrowserCaptureReader::new(None);
    reader.load(&fixture("capture.xml")).unwrap();
    let txs: Vec<_> = reader.entries().unwrap().collect();

    assert_eq!(txs.len(), 2);
    assert_eq!(
        txs[0].request_status,
        "GET http://fixture.example/default.aspx HTTP/1.1"
    );
    assert_eq!(txs[0].response_status, "HTTP/1.1 200 OK");
}

#[test]
fn binary_content_without_text_reads_as_empty_body() {
    let mut reader = BrowserCaptureReader::new(None);
    reader.load(&fixture("capture.xml")).unwrap();
    let txs: Vec<_> = reader.entries().unwrap().collect();

    assert_eq!(txs[0].response_body, "<html>hello</html>");
    assert_eq!(txs[1].url, "http://fixture.example/logo.png");
    assert_eq!(txs[1].response_body, "");
}

#[test]
fn aspx_stack_is_fingerprinted_from_url_and_header() {
    let mut reader = BrowserCaptureReader::new(None);
    let findings = scan(&mut reader, &fixture("capture.xml"));
    let prints: Vec<_> = findings
        .iter()
        .filter(|f| f.check == "fingerprint" && f.url.contains("default.aspx"))
        .map(|f| f.message.as_str())
        .collect();

    assert!(prints.iter().any(|m| m.ends_with("ASP.NET")));
    assert!(prints.iter().any(|m| m.contains("ASP.NET header")));
}

#[test]
fn versioned_server_banner_and_bare_session_cookie_warn() {
    let mut reader = BrowserCaptureReader::new(None);
    let findings = scan(&mut reader, &fixture("capture.xml"));

    assert!(findings.iter().any(|f| {
        f.check == "header_server"
            && f.severity == Severity::Warn
            && f.message.contains("Microsoft-IIS/10.0")
    }));
    assert!(findings.iter().any(|f| {
        f.check == "cookie_flags"
            && f.severity == Severity::Warn
            && f.message.contains("ASP.NET_SessionId")
    }));
}
