use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use dashboard_engine::{Clock, SubmitSettings};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("page_size must be at least 1")]
    ZeroPageSize,
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

/// Settings read from an optional RON file. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub page_size: usize,
    pub submit_latency_ms: u64,
    pub vendor_submit_latency_ms: u64,
    pub submit_timeout_ms: u64,
    pub simulate_outage: bool,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: dashboard_core::DEFAULT_PAGE_SIZE,
            submit_latency_ms: 300,
            vendor_submit_latency_ms: 1000,
            submit_timeout_ms: 5000,
            simulate_outage: false,
            log_level: "info".to_string(),
            log_file: PathBuf::from("./dashboard.log"),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }

    pub fn submit_settings(&self, accepted_utc: Clock) -> SubmitSettings {
        SubmitSettings {
            latency: Duration::from_millis(self.submit_latency_ms),
            collection_latency: HashMap::from([(
                "vendor".to_string(),
                Duration::from_millis(self.vendor_submit_latency_ms),
            )]),
            timeout: self.submit_timeout(),
            simulate_outage: self.simulate_outage,
            accepted_utc,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let file = write_config("(page_size: 3, simulate_outage: true)");
        let config = AppConfig::load(file.path()).expect("load");
        assert_eq!(
            config,
            AppConfig {
                page_size: 3,
                simulate_outage: true,
                ..AppConfig::default()
            }
        );
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let file = write_config("(page_size: 0)");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageSize));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let file = write_config("(log_level: \"chatty\")");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert_eq!(err.to_string(), "unknown log level \"chatty\"");
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let file = write_config("(page_size: ");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = AppConfig::load(&dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn submit_settings_follow_the_config() {
        let config = AppConfig {
            submit_latency_ms: 10,
            vendor_submit_latency_ms: 40,
            submit_timeout_ms: 900,
            ..AppConfig::default()
        };
        let settings = config.submit_settings(Arc::new(|| "now".to_string()));
        assert_eq!(settings.latency_for("order"), Duration::from_millis(10));
        assert_eq!(settings.latency_for("vendor"), Duration::from_millis(40));
        assert_eq!(settings.timeout, Duration::from_millis(900));
        assert_eq!((settings.accepted_utc)(), "now");
    }
}
