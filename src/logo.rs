use anyhow::{Context, Result};
use serde::Deserialize;

use crate::panel::names_match;
use crate::source::{DataSource, Endpoint};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDirectoryEntry {
    pub school: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub alternate_names: Option<Vec<String>>,
    #[serde(default)]
    pub logos: Option<Vec<String>>,
}

impl TeamDirectoryEntry {
    fn matches(&self, team: &str) -> bool {
        if names_match(&self.school, team) {
            return true;
        }
        if let Some(abbr) = self.abbreviation.as_deref() {
            if names_match(abbr, team) {
                return true;
            }
        }
        self.alternate_names
            .as_ref()
            .is_some_and(|names| names.iter().any(|name| names_match(name, team)))
    }

    pub fn first_logo(&self) -> Option<&str> {
        self.logos
            .as_ref()
            .and_then(|logos| logos.first())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoView {
    pub url: String,
    pub alt: String,
}

#[derive(Debug)]
pub enum LogoLookup {
    Found(LogoView),
    Missing,
}

pub fn parse_teams_json(raw: &str) -> Result<Vec<TeamDirectoryEntry>> {
    serde_json::from_str(raw.trim()).context("invalid teams json")
}

pub fn resolve_team<'a>(
    entries: &'a [TeamDirectoryEntry],
    team: &str,
) -> Option<&'a TeamDirectoryEntry> {
    entries.iter().find(|entry| entry.matches(team))
}

pub fn upgrade_to_https(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}

pub fn proxied_logo_url(proxy_base: &str, logo_url: &str) -> String {
    let bare = logo_url
        .strip_prefix("https://")
        .or_else(|| logo_url.strip_prefix("http://"))
        .unwrap_or(logo_url);
    format!("{proxy_base}{}", urlencoding::encode(bare))
}

pub fn lookup_logo(entries: &[TeamDirectoryEntry], team: &str) -> LogoLookup {
    let Some(entry) = resolve_team(entries, team) else {
        return LogoLookup::Missing;
    };
    let Some(url) = entry.first_logo() else {
        return LogoLookup::Missing;
    };
    LogoLookup::Found(LogoView {
        url: upgrade_to_https(url),
        alt: format!("{} Logo", entry.school),
    })
}

pub fn fetch_logo(source: &dyn DataSource, year: &str, team: &str) -> Result<LogoLookup> {
    let body = source.get_json(Endpoint::Teams { year })?;
    let entries = parse_teams_json(&body)?;
    Ok(lookup_logo(&entries, team))
}
