use std::{path::PathBuf, time::Duration};

use anyhow::Context;

use crate::core::{
    api::ApiClient,
    session::{Session, SessionDb},
};

pub const BASE_URL_ENV: &str = "GEOLOOKUP_BASE_URL";
/// Read when [`BASE_URL_ENV`] is unset, so existing `.env` files keep working.
pub const FALLBACK_BASE_URL_ENV: &str = "VITE_BASE_URL";
pub const SESSION_FILE_ENV: &str = "GEOLOOKUP_SESSION_FILE";
pub const DEFAULT_SESSION_FILE: &str = "geolookup_session.db";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub session_file: PathBuf,
    pub timeout: Duration,
}

impl Config {
    /// An explicit base URL wins; otherwise the environment is consulted.
    pub fn new(base_url: Option<String>, session_file: PathBuf, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = resolve_base_url(base_url, |key| std::env::var(key).ok())
            .with_context(|| {
                format!("No API base URL: pass --base-url or set {BASE_URL_ENV}")
            })?;
        Ok(Self {
            base_url,
            session_file,
            timeout,
        })
    }

    pub fn api_client(&self) -> anyhow::Result<ApiClient> {
        ApiClient::new(&self.base_url, self.timeout)
            .with_context(|| format!("Failed to build API client for {}", self.base_url))
    }

    pub async fn open_session(&self) -> anyhow::Result<Session> {
        let store = SessionDb::open(&self.session_file).await?;
        Session::load(store).await
    }
}

/// First non-blank of the explicit value, [`BASE_URL_ENV`], [`FALLBACK_BASE_URL_ENV`].
fn resolve_base_url(
    explicit: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    let non_blank = |url: &String| !url.trim().is_empty();
    explicit
        .filter(non_blank)
        .or_else(|| lookup(BASE_URL_ENV).filter(non_blank))
        .or_else(|| lookup(FALLBACK_BASE_URL_ENV).filter(non_blank))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_url_is_kept() {
        let config = Config::new(
            Some("http://localhost:8000".to_string()),
            PathBuf::from(DEFAULT_SESSION_FILE),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.api_client().is_ok());
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn base_url_falls_back_through_env() {
        let both = env_of(&[
            (BASE_URL_ENV, "http://primary"),
            (FALLBACK_BASE_URL_ENV, "http://fallback"),
        ]);
        assert_eq!(resolve_base_url(None, &both).as_deref(), Some("http://primary"));
        assert_eq!(
            resolve_base_url(Some("http://flag".to_string()), &both).as_deref(),
            Some("http://flag")
        );

        let fallback_only = env_of(&[(FALLBACK_BASE_URL_ENV, "http://fallback")]);
        assert_eq!(
            resolve_base_url(None, fallback_only).as_deref(),
            Some("http://fallback")
        );

        assert_eq!(resolve_base_url(None, env_of(&[])), None);
    }

    #[test]
    fn blank_base_urls_are_skipped() {
        let blank_primary = env_of(&[(BASE_URL_ENV, "  "), (FALLBACK_BASE_URL_ENV, "http://fallback")]);
        assert_eq!(
            resolve_base_url(Some(String::new()), blank_primary).as_deref(),
            Some("http://fallback")
        );
        let all_blank = env_of(&[(BASE_URL_ENV, ""), (FALLBACK_BASE_URL_ENV, " ")]);
        assert_eq!(resolve_base_url(None, all_blank), None);
    }

    #[test]
    fn missing_base_url_is_an_error() {
        // Only this test touches these variables.
        unsafe {
            std::env::remove_var(BASE_URL_ENV);
            std::env::set_var(FALLBACK_BASE_URL_ENV, "http://localhost:9000/api");
        }
        let config = Config::new(
            None,
            PathBuf::from(DEFAULT_SESSION_FILE),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/api");

        unsafe {
            std::env::remove_var(FALLBACK_BASE_URL_ENV);
        }
        let err = Config::new(
            None,
            PathBuf::from(DEFAULT_SESSION_FILE),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
        .unwrap_err();
        assert!(err.to_string().contains(BASE_URL_ENV));
    }
}
