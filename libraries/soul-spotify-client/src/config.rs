//! Client configuration.

use crate::error::{Result, SpotifyError};
use serde::Deserialize;

/// Base URL of the public Spotify Web API.
pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";

/// Configuration for a [`SpotifyClient`](crate::SpotifyClient).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// OAuth access token, obtained elsewhere
    #[serde(default)]
    pub access_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
        }
    }
}

impl ClientConfig {
    /// Create a config for a custom base URL without a token.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: None,
        }
    }

    /// Create a config with an existing access token.
    pub fn with_token(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: Some(access_token.into()),
        }
    }

    /// Load configuration from the environment.
    ///
    /// Reads `SPOTIFY_BASE_URL` and `SPOTIFY_ACCESS_TOKEN`; anything unset
    /// falls back to [`ClientConfig::default`].
    pub fn load() -> Result<Self> {
        Self::load_from(config::Environment::with_prefix("SPOTIFY"))
    }

    pub(crate) fn load_from(environment: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(environment)
            .build()
            .map_err(|e| SpotifyError::Config(e.to_string()))?;

        let mut config: Self = settings
            .try_deserialize()
            .map_err(|e| SpotifyError::Config(e.to_string()))?;

        // An exported but empty token means "no token"
        if config.access_token.as_deref().is_some_and(str::is_empty) {
            config.access_token = None;
        }

        Ok(config)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        config::Environment::with_prefix("SPOTIFY").source(Some(source))
    }

    #[test]
    fn test_default_points_at_spotify() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.spotify.com/v1");
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_with_token() {
        let config = ClientConfig::with_token("http://localhost:9000", "abc");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.access_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_load_from_empty_environment() {
        let config = ClientConfig::load_from(environment(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_load_from_environment() {
        let config = ClientConfig::load_from(environment(&[
            ("SPOTIFY_ACCESS_TOKEN", "env_token"),
            ("SPOTIFY_BASE_URL", "http://127.0.0.1:8080/v1"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:8080/v1");
        assert_eq!(config.access_token.as_deref(), Some("env_token"));
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let config =
            ClientConfig::load_from(environment(&[("SPOTIFY_ACCESS_TOKEN", "")])).unwrap();
        assert!(config.access_token.is_none());
    }
}
