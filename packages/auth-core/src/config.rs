use anyhow::{Context, Result};
use baynana_api::BaynanaClient;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::session::{FileStorage, SessionStore};

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub session_file: PathBuf,
    /// `None` keeps the HTTP client's default
    pub http_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = var("BAYNANA_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        url::Url::parse(&api_url).context("BAYNANA_API_URL must be a valid URL")?;

        let http_timeout = var("BAYNANA_HTTP_TIMEOUT_SECS")
            .map(|secs| {
                secs.parse::<u64>()
                    .context("BAYNANA_HTTP_TIMEOUT_SECS must be a whole number of seconds")
            })
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            api_url,
            session_file: var("BAYNANA_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(FileStorage::default_path),
            http_timeout,
        })
    }

    /// REST client for the configured backend
    pub fn api_client(&self) -> Result<BaynanaClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.http_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(BaynanaClient::new(&self.api_url)
            .context("Invalid API URL")?
            .with_http_client(http))
    }

    /// Session store backed by the configured file
    pub fn session_store(&self) -> SessionStore<FileStorage> {
        SessionStore::new(FileStorage::new(&self.session_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.http_timeout, None);
        assert_eq!(config.session_file, FileStorage::default_path());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("BAYNANA_API_URL", "https://api.baynana.example"),
            ("BAYNANA_SESSION_FILE", "/tmp/baynana-test.json"),
            ("BAYNANA_HTTP_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.baynana.example");
        assert_eq!(config.session_file, PathBuf::from("/tmp/baynana-test.json"));
        assert_eq!(config.http_timeout, Some(Duration::from_secs(15)));
        assert!(config.api_client().is_ok());
    }

    #[test]
    fn test_rejects_bad_url() {
        assert!(Config::from_vars(vars(&[("BAYNANA_API_URL", "nope")])).is_err());
    }

    #[test]
    fn test_rejects_bad_timeout() {
        assert!(Config::from_vars(vars(&[("BAYNANA_HTTP_TIMEOUT_SECS", "soon")])).is_err());
    }
}
