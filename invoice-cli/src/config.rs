//! CLI configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | INVOICE_LOG_LEVEL | info | log filter when `RUST_LOG` is unset |
//! | INVOICE_LOG_JSON | false | JSON log lines |
//! | INVOICE_LOG_DIR | (unset) | daily rolling log files go here if it exists |
//! | INVOICE_PAPER_WIDTH | 80 | text invoice width in characters |
//! | INVOICE_OUTPUT_DIR | . | directory for exported spreadsheets |
//!
//! A `.env` file in the working directory is loaded first. Command-line flags
//! override the environment.

use shared::{AppError, AppResult, ErrorCode};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub paper_width: usize,
    pub output_dir: PathBuf,
}

/// Parse an optional variable, keeping `default` when it is unset or empty
fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> AppResult<T> {
    match lookup(key).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| {
            AppError::new(ErrorCode::ConfigError)
                .with_detail("variable", key)
                .with_detail("value", value)
        }),
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// [`ErrorCode::ConfigError`] when `INVOICE_PAPER_WIDTH` or
    /// `INVOICE_LOG_JSON` is set but cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        Ok(Self {
            log_level: lookup("INVOICE_LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: parse_var(&lookup, "INVOICE_LOG_JSON", false)?,
            log_dir: lookup("INVOICE_LOG_DIR").filter(|d| !d.is_empty()),
            paper_width: parse_var(&lookup, "INVOICE_PAPER_WIDTH", 80)?,
            output_dir: lookup("INVOICE_OUTPUT_DIR")
                .filter(|d| !d.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        })
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, paper_width: Option<usize>, output_dir: Option<PathBuf>) -> Self {
        if let Some(width) = paper_width {
            self.paper_width = width;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> AppResult<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    fn config(vars: &[(&str, &str)]) -> Config {
        load(vars).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.log_json);
        assert_eq!(cfg.log_dir, None);
        assert_eq!(cfg.paper_width, 80);
        assert_eq!(cfg.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_env_values() {
        let cfg = config(&[
            ("INVOICE_LOG_LEVEL", "debug"),
            ("INVOICE_LOG_JSON", "true"),
            ("INVOICE_LOG_DIR", "/var/log/invoice"),
            ("INVOICE_PAPER_WIDTH", "120"),
            ("INVOICE_OUTPUT_DIR", "/tmp/out"),
        ]);
        assert_eq!(cfg.log_level, "debug");
        assert!(cfg.log_json);
        assert_eq!(cfg.log_dir.as_deref(), Some("/var/log/invoice"));
        assert_eq!(cfg.paper_width, 120);
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_empty_values_fall_back() {
        let cfg = config(&[
            ("INVOICE_PAPER_WIDTH", ""),
            ("INVOICE_LOG_JSON", ""),
            ("INVOICE_OUTPUT_DIR", ""),
        ]);
        assert_eq!(cfg.paper_width, 80);
        assert!(!cfg.log_json);
        assert_eq!(cfg.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_unparsable_paper_width_is_config_error() {
        let err = load(&[("INVOICE_PAPER_WIDTH", "wide")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(err.message, "Configuration error");
        let details = err.details.unwrap();
        assert_eq!(details.get("variable").unwrap(), "INVOICE_PAPER_WIDTH");
        assert_eq!(details.get("value").unwrap(), "wide");
    }

    #[test]
    fn test_unparsable_log_json_is_config_error() {
        let err = load(&[("INVOICE_LOG_JSON", "yes")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(
            err.details.unwrap().get("variable").unwrap(),
            "INVOICE_LOG_JSON"
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(config(&[("INVOICE_PAPER_WIDTH", " 96 ")]).paper_width, 96);
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[("INVOICE_PAPER_WIDTH", "100")])
            .with_overrides(Some(132), Some(PathBuf::from("exports")));
        assert_eq!(cfg.paper_width, 132);
        assert_eq!(cfg.output_dir, PathBuf::from("exports"));

        let cfg = config(&[("INVOICE_PAPER_WIDTH", "100")]).with_overrides(None, None);
        assert_eq!(cfg.paper_width, 100);
    }
}
