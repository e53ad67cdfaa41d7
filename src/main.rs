// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use audit_http::audit::CheckEngine;
use audit_http::checks;
use audit_http::config::Config;
use audit_http::jsdump::JsDumper;
use audit_http::readers::capture::BrowserCaptureReader;
use audit_http::readers::har::HarReader;
use audit_http::readers::proxy::ProxyExportReader;
use audit_http::readers::{DomainFilter, HistoryReader};
use audit_http::report::{write_report, ReportFormat};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HistoryFormat {
    /// Proxy export XML (<item> tree, base64 or raw HTTP text)
    Proxy,
    /// HAR JSON (log.entries[])
    Har,
    /// Browser network-capture XML (entries/entry tree)
    Capture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Csv => ReportFormat::Csv,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "audit-http")]
struct Args {
    /// History file to audit
    file: PathBuf,

    /// Format of the history file
    #[arg(long, value_enum)]
    format: HistoryFormat,

    /// Only audit URLs matching this domain (literal, case-insensitive)
    #[arg(long)]
    domain: Option<String>,

    /// Treat --domain as a regular expression instead of a literal
    #[arg(long)]
    domain_regex: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    output_file: Option<PathBuf>,

    /// Dump JavaScript bodies (.js, status 200) from the history
    #[arg(long)]
    dump_js: bool,

    /// Directory for dumped JavaScript files
    #[arg(long, default_value = ".")]
    dump_dir: PathBuf,

    /// Optional config TOML path (check toggles)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let cfg = if let Some(ref p) = args.config {
        Config::load_from_path(p).unwrap_or_else(|e| {
            warn!(path = %p.display(), %e, "failed to load config, using defaults");
            Config::default()
        })
    } else {
        Config::default()
    };

    let filter = match &args.domain {
        Some(d) if args.domain_regex => Some(DomainFilter::pattern(d)?),
        Some(d) => Some(DomainFilter::literal(d)?),
        None => None,
    };

    let mut reader: Box<dyn HistoryReader> = match args.format {
        HistoryFormat::Proxy => Box::new(ProxyExportReader::new(filter)),
        HistoryFormat::Har => Box::new(HarReader::new(filter)),
        HistoryFormat::Capture => Box::new(BrowserCaptureReader::new(filter)),
    };

    reader.load(&args.file)?;
    info!(file = %args.file.display(), reader = reader.name(), "history loaded");

    let engine = CheckEngine::new(checks::default_checks(&cfg));
    tracing::debug!(checks = ?engine.check_ids(), "engine ready");
    let dumper = args.dump_js.then(|| JsDumper::new(&args.dump_dir));

    let mut findings = Vec::new();
    for tx in reader.entries()? {
        if let Some(dumper) = &dumper {
            if let Err(e) = dumper.observe(&tx) {
                warn!(url = %tx.url, %e, "js dump failed");
            }
        }
        findings.extend(engine.run(&tx));
    }

    info!(findings = findings.len(), "scan complete");

    match &args.output_file {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            write_report(&mut file, args.output.into(), &findings)?;
        }
        None => {
            let stdout = std::io::stdout();
            write_report(&mut stdout.lock(), args.output.into(), &findings)?;
        }
    }

    Ok(())
}
