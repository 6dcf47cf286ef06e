// src/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 60;

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub api_key: Option<String>,
    pub static_dir: PathBuf,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub provider_timeout: Duration,
}

// Keeps the credential out of logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("static_dir", &self.static_dir)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("gemini_model", &self.gemini_model)
            .field("provider_timeout", &self.provider_timeout)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_key: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            provider_timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Load settings from the process environment, after a `.env` file if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            None => defaults.port,
        };

        let provider_timeout = match get("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("Invalid PROVIDER_TIMEOUT_SECS value: {raw}"))?;
                if secs == 0 {
                    bail!("Invalid PROVIDER_TIMEOUT_SECS value: {raw} (must be at least 1)");
                }
                Duration::from_secs(secs)
            }
            None => defaults.provider_timeout,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            api_key: get("GOOGLE_GEMINI_API_KEY"),
            static_dir: get("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            gemini_base_url: get("GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_base_url),
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            provider_timeout,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.host, "0.0.0.0");
        assert!(settings.api_key.is_none());
        assert_eq!(settings.static_dir, PathBuf::from("public"));
        assert_eq!(settings.gemini_model, "gemini-pro");
        assert_eq!(settings.provider_timeout, Duration::from_secs(60));
        assert_eq!(settings.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("GOOGLE_GEMINI_API_KEY", "abc"),
            ("GEMINI_BASE_URL", "http://127.0.0.1:9000/v1beta/"),
            ("PROVIDER_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.api_key.as_deref(), Some("abc"));
        assert_eq!(settings.gemini_base_url, "http://127.0.0.1:9000/v1beta");
        assert_eq!(settings.provider_timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_api_key_is_missing() {
        let settings = Settings::from_lookup(lookup(&[("GOOGLE_GEMINI_API_KEY", "  ")])).unwrap();
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Settings::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn zero_timeout_is_an_error() {
        let err = Settings::from_lookup(lookup(&[("PROVIDER_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(err.to_string().contains("PROVIDER_TIMEOUT_SECS"));

        let err = Settings::from_lookup(lookup(&[("PROVIDER_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("PROVIDER_TIMEOUT_SECS"));
    }

    #[test]
    fn debug_output_hides_key() {
        let settings = Settings {
            api_key: Some("super-secret".to_string()),
            ..Default::default()
        };
        let printed = format!("{settings:?}");
        assert!(!printed.contains("super-secret"));
    }
}
