use std::env;
use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::types::MonitorError;

use super::{paths, Config};

pub const API_URL_ENV: &str = "PENDING_API_URL";
pub const POLL_INTERVAL_ENV: &str = "PENDING_POLL_INTERVAL_MS";

impl Config {
    /// Load configuration from config.json in the app directory
    /// Falls back to defaults if the file doesn't exist or can't be parsed
    pub async fn load() -> Self {
        let config_path = paths::get_config_path();
        let mut config = if config_path.exists() {
            match Self::load_from(&config_path).await {
                Ok(config) => config,
                Err(err) => {
                    warn!(error = ?err, "Failed to load config.json, using defaults");
                    Self::default()
                }
            }
        } else {
            warn!(path = %config_path.display(), "Config file not found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        info!(
            base_url = %config.base_url,
            endpoint = %config.endpoint_path,
            interval_ms = config.poll_interval_ms,
            targets = config.targets.len(),
            "Loaded configuration"
        );
        config
    }

    pub async fn load_from(path: &Path) -> Result<Self, MonitorError> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|err| MonitorError::Config(format!("Failed to read config file: {err}")))?;

        let config: Config = serde_json::from_str(&contents)
            .map_err(|err| MonitorError::Config(format!("Failed to parse config.json: {err}")))?;

        if config.targets.iter().any(|t| t.id.trim().is_empty()) {
            return Err(MonitorError::Config(
                "Display target with empty id".to_string(),
            ));
        }

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            env::var(API_URL_ENV).ok().as_deref(),
            env::var(POLL_INTERVAL_ENV).ok().as_deref(),
        );
    }

    pub(super) fn apply_overrides(&mut self, api_url: Option<&str>, interval_ms: Option<&str>) {
        if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.base_url = url.to_string();
        }

        if let Some(raw) = interval_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => self.poll_interval_ms = ms,
                _ => warn!(value = %raw, "Ignoring invalid {POLL_INTERVAL_ENV}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::config::TargetKind;

    #[tokio::test]
    async fn missing_fields_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"base_url": "http://library.local"}}"#).unwrap();

        let config = Config::load_from(file.path()).await.unwrap();
        assert_eq!(config.base_url, "http://library.local");
        assert_eq!(config.endpoint_path, "/api/pending_count");
        assert_eq!(config.poll_interval_ms, 5000);
        assert_eq!(config.target_ids(), vec!["pending-count", "pending-count-2"]);
    }

    #[tokio::test]
    async fn parses_target_kinds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"targets": [
                {{"id": "bar", "kind": "file", "path": "/tmp/pending"}},
                {{"id": "mem", "kind": "memory"}}
            ]}}"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).await.unwrap();
        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].kind, TargetKind::File);
        assert_eq!(config.targets[1].kind, TargetKind::Memory);
        assert!(config.targets[1].path.is_none());
    }

    #[tokio::test]
    async fn rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Config::load_from(file.path()).await.unwrap_err();
        assert!(matches!(err, MonitorError::Config(_)));
    }

    #[tokio::test]
    async fn rejects_blank_target_id() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"targets": [{{"id": "  "}}]}}"#).unwrap();

        assert!(Config::load_from(file.path()).await.is_err());
    }

    #[test]
    fn default_interval_matches_poller_default() {
        let config = Config::default();
        assert_eq!(config.poll_interval(), crate::poller::DEFAULT_POLL_INTERVAL);
    }

    #[test]
    fn overrides_replace_url_and_interval() {
        let mut config = Config::default();
        config.apply_overrides(Some(" http://10.0.0.2:8000 "), Some("250"));
        assert_eq!(config.base_url, "http://10.0.0.2:8000");
        assert_eq!(config.poll_interval_ms, 250);
    }

    #[test]
    fn invalid_interval_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(Some(""), Some("0"));
        config.apply_overrides(None, Some("soon"));
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.poll_interval_ms, 5000);
    }
}
