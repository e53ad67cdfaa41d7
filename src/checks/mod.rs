// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! The check catalog.
//!
//! Every check is side-effect free and inspects one transaction at a time.
//! Compiled patterns live in fields set at construction; nothing is cached
//! lazily. New checks plug in by implementing [`Check`] and joining
//! [`default_checks`].

use crate::audit::Finding;
use crate::config::Config;
use crate::transaction::Transaction;

pub trait Check {
    /// Stable identifier, used in findings and config toggles.
    fn id(&self) -> &'static str;

    /// Inspect one transaction and emit zero or more findings. An `Err` is
    /// surfaced by the engine as a diagnostic finding for this check.
    fn inspect(&self, tx: &Transaction) -> anyhow::Result<Vec<Finding>>;
}

pub mod cache_control;
pub mod content_security_policy;
pub mod content_type_options;
pub mod cookie_flags;
pub mod cors;
pub mod etag;
pub mod expires;
pub mod fingerprint;
pub mod frame_options;
pub mod powered_by;
pub mod pragma;
pub mod server_banner;
pub mod strict_transport_security;
pub mod surplus_headers;
pub mod www_authenticate;
pub mod xss_protection;

/// Build the full check list in registration order, honoring config toggles.
pub fn default_checks(cfg: &Config) -> Vec<Box<dyn Check>> {
    let all: Vec<Box<dyn Check>> = vec![
        Box::new(cors::CorsCheck),
        Box::new(cookie_flags::CookieFlagsCheck),
        Box::new(xss_protection::XssProtectionCheck),
        Box::new(content_type_options::ContentTypeOptionsCheck),
        Box::new(frame_options::FrameOptionsCheck),
        Box::new(strict_transport_security::StrictTransportSecurityCheck),
        Box::new(content_security_policy::ContentSecurityPolicyCheck),
        Box::new(www_authenticate::WwwAuthenticateCheck),
        Box::new(powered_by::PoweredByCheck),
        Box::new(server_banner::ServerBannerCheck::new()),
        Box::new(cache_control::CacheControlCheck),
        Box::new(pragma::PragmaCheck),
        Box::new(expires::ExpiresCheck),
        Box::new(surplus_headers::SurplusHeadersCheck),
        Box::new(etag::EtagCheck),
        Box::new(fingerprint::FingerprintCheck::new()),
    ];

    all.into_iter().filter(|c| cfg.is_enabled(c.id())).collect()
}
