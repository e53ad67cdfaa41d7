// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Configuration loading and check toggles.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub checks: HashMap<String, toml::Value>,
}

impl Config {
    /// Load configuration from a TOML file. Format:
    ///
    /// ```toml
    /// [checks.etag]
    /// enabled = false
    ///
    /// [checks.fingerprint]
    /// enabled = true
    /// ```
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path.as_ref())?;
        let cfg: Self = toml::from_str(&s)?;
        Ok(cfg)
    }

    /// Returns true unless the check has a `[checks.<id>]` table with
    /// `enabled = false`. Every check runs out of the box.
    pub fn is_enabled(&self, check: &str) -> bool {
        match self.checks.get(check) {
            Some(toml::Value::Table(table)) => {
                !matches!(table.get("enabled"), Some(toml::Value::Boolean(false)))
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::disable_check;
    use std::io::Write;

    #[test]
    fn default_enables_every_check() {
        let cfg = Config::default();
        assert!(cfg.is_enabled("cors"));
        assert!(cfg.is_enabled("anything-at-all"));
    }

    #[test]
    fn explicit_disable_wins() {
        let mut cfg = Config::default();
        disable_check(&mut cfg, "etag");
        assert!(!cfg.is_enabled("etag"));
        assert!(cfg.is_enabled("cors"));
    }

    #[test]
    fn table_without_enabled_stays_on() {
        let mut cfg = Config::default();
        let mut table = toml::map::Map::new();
        table.insert("note".to_string(), toml::Value::String("x".to_string()));
        cfg.checks
            .insert("cors".to_string(), toml::Value::Table(table));
        assert!(cfg.is_enabled("cors"));
    }

    #[test]
    fn load_toml_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            "[checks.etag]\nenabled = false\n\n[checks.fingerprint]\nenabled = true\n"
        )?;
        let cfg = Config::load_from_path(file.path())?;
        assert!(!cfg.is_enabled("etag"));
        assert!(cfg.is_enabled("fingerprint"));
        assert!(cfg.is_enabled("cors"));
        Ok(())
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(Config::load_from_path("/nonexistent/audit-http.toml").is_err());
    }

    #[test]
    fn load_invalid_toml_errors() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "checks = \"not a table\"")?;
        assert!(Config::load_from_path(file.path()).is_err());
        Ok(())
    }
}
