// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Rendering of the finding stream.
//!
//! The core has no opinion on presentation; these writers turn the ordered
//! finding sequence into line-oriented text, CSV, or JSON on any sink.

use crate::audit::Finding;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Csv,
    Json,
}

pub fn write_report(
    out: &mut dyn Write,
    format: ReportFormat,
    findings: &[Finding],
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => write_text(out, findings),
        ReportFormat::Csv => write_csv(out, findings),
        ReportFormat::Json => write_json(out, findings),
    }
}

fn write_text(out: &mut dyn Write, findings: &[Finding]) -> anyhow::Result<()> {
    for f in findings {
        writeln!(
            out,
            "{} ({}) {} for {}",
            f.severity.marker(),
            f.check,
            f.message,
            f.url
        )?;
    }
    Ok(())
}

fn write_csv(out: &mut dyn Write, findings: &[Finding]) -> anyhow::Result<()> {
    writeln!(out, "severity,check,url,message")?;
    for f in findings {
        writeln!(
            out,
            "{},{},{},{}",
            f.severity.label(),
            csv_escape(&f.check),
            csv_escape(&f.url),
            csv_escape(&f.message),
        )?;
    }
    Ok(())
}

fn write_json(out: &mut dyn Write, findings: &[Finding]) -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct Report<'a> {
        findings: &'a [Finding],
    }

    serde_json::to_writer_pretty(&mut *out, &Report { findings })?;
    writeln!(out)?;
    Ok(())
}

/// Quote a CSV field when it carries commas, quotes, or newlines.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
