//! Client configuration at ~/.config/agenda/config.toml.
//!
//! Where the token comes from (login flow, secret manager) is not this
//! tool's business; it is read from the config file or the environment
//! and handed to the session as-is.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Raw file shape before environment overrides are applied.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_url: Option<String>,
    token: Option<String>,
    page_size: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the event API, e.g. "http://localhost:8080/api/".
    pub api_url: Url,
    /// Bearer token obtained out of band.
    pub token: Option<String>,
    /// Rows per page in the list view.
    pub page_size: u32,
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("agenda");
        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, then apply AGENDA_API_URL / AGENDA_TOKEN
    /// overrides from the environment.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut raw: RawConfig = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Invalid config at {}", path.display()))?
        } else {
            RawConfig::default()
        };

        if let Ok(url) = std::env::var("AGENDA_API_URL") {
            raw.api_url = Some(url);
        }
        if let Ok(token) = std::env::var("AGENDA_TOKEN") {
            raw.token = Some(token);
        }

        let api_url = raw.api_url.with_context(|| {
            format!(
                "No API URL configured. Set api_url in {} or the AGENDA_API_URL variable",
                path.display()
            )
        })?;
        let api_url = Self::parse_base_url(&api_url)?;

        Ok(Config {
            api_url,
            token: raw.token,
            page_size: raw.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }

    /// Parse the base URL, ensuring a trailing slash so `Url::join`
    /// keeps the last path segment.
    fn parse_base_url(s: &str) -> Result<Url> {
        let normalized = if s.ends_with('/') {
            s.to_string()
        } else {
            format!("{s}/")
        };
        Url::parse(&normalized).with_context(|| format!("Invalid api_url '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_a_trailing_slash() {
        let url = Config::parse_base_url("http://localhost:8080/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/");
        assert_eq!(url.join("event").unwrap().path(), "/api/event");
    }

    #[test]
    fn already_slashed_base_url_is_untouched() {
        let url = Config::parse_base_url("http://localhost:8080/api/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/");
    }
}
