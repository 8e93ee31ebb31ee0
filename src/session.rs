use std::fmt;

use anyhow::{Context, Result};
use reqwest::header::ACCEPT;

use crate::config::Config;
use crate::http_client::{http_client, read_success_bytes, read_success_text};
use crate::logo::proxied_logo_url;
use crate::source::{DataSource, Endpoint};

#[derive(Clone)]
pub struct Session {
    api_key: String,
    api_base: String,
    image_proxy: String,
}

impl Session {
    pub fn new(api_key: &str, config: &Config) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            image_proxy: config.image_proxy.clone(),
        }
    }

    pub fn url_for(&self, endpoint: Endpoint<'_>) -> String {
        format!("{}{}", self.api_base, endpoint.path_and_query())
    }
}

// Keeps the token out of any debug output that reaches the console.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("image_proxy", &self.image_proxy)
            .finish()
    }
}

impl DataSource for Session {
    fn get_json(&self, endpoint: Endpoint<'_>) -> Result<String> {
        let client = http_client()?;
        let url = self.url_for(endpoint);
        let resp = client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .with_context(|| format!("{} request failed", endpoint.label()))?;
        read_success_text(resp)
    }

    fn proxy_image(&self, logo_url: &str) -> Result<Vec<u8>> {
        let client = http_client()?;
        let url = proxied_logo_url(&self.image_proxy, logo_url);
        let resp = client.get(&url).send().context("logo request failed")?;
        read_success_bytes(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_base: "https://api.example.test/".to_string(),
            image_proxy: "https://proxy.example.test/?url=".to_string(),
            default_year: "2022".to_string(),
            default_conference: None,
        }
    }

    #[test]
    fn session_trims_key_and_base() {
        let session = Session::new("  abc123 \n", &config());
        assert_eq!(session.api_key, "abc123");
        assert_eq!(
            session.url_for(Endpoint::Records { year: "2022" }),
            "https://api.example.test/records?year=2022"
        );
    }

    #[test]
    fn games_url_percent_encodes_team() {
        let session = Session::new("k", &config());
        let url = session.url_for(Endpoint::Games {
            year: "2022",
            team: "Texas A&M",
        });
        assert_eq!(
            url,
            "https://api.example.test/games?year=2022&team=Texas%20A%26M"
        );
    }

    #[test]
    fn debug_output_hides_key() {
        let session = Session::new("super-secret", &config());
        let dbg = format!("{session:?}");
        assert!(!dbg.contains("super-secret"));
        assert!(dbg.contains("<redacted>"));
    }
}
