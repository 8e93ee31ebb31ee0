use std::env;

use chrono::Datelike;

pub const DEFAULT_API_BASE: &str = "https://apinext.collegefootballdata.com";
pub const DEFAULT_IMAGE_PROXY: &str = "https://images.weserv.nl/?url=";

// The API key is typed into the form and lives only inside a `Session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub image_proxy: String,
    pub default_year: String,
    pub default_conference: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            image_proxy: DEFAULT_IMAGE_PROXY.to_string(),
            default_year: chrono::Local::now().year().to_string(),
            default_conference: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = opt_env("CFB_API_BASE") {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(proxy) = opt_env("CFB_IMAGE_PROXY") {
            config.image_proxy = proxy;
        }
        if let Some(year) = opt_env("CFB_DEFAULT_YEAR").filter(|y| y.parse::<i32>().is_ok()) {
            config.default_year = year;
        }
        config.default_conference = opt_env("CFB_DEFAULT_CONFERENCE");
        config
    }
}

fn opt_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
