use anyhow::{Context, Result};
use serde::Deserialize;

use crate::form::TeamQuery;
use crate::panel::{Panel, display_or_dash};
use crate::source::{DataSource, Endpoint};

pub const GAMES_HEADING: &str = "Season Game-By-Game Scores";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEntry {
    pub week: u32,
    pub home_team: String,
    #[serde(default)]
    pub home_points: Option<u32>,
    pub away_team: String,
    #[serde(default)]
    pub away_points: Option<u32>,
}

impl GameEntry {
    pub fn line(&self) -> String {
        format!(
            "{}: {} ({}) @ {} ({})",
            self.week,
            self.away_team,
            display_or_dash(self.away_points),
            self.home_team,
            display_or_dash(self.home_points)
        )
    }
}

// Response order; the server already filtered by team and year.
pub fn parse_games_json(raw: &str) -> Result<Vec<GameEntry>> {
    serde_json::from_str(raw.trim()).context("invalid games json")
}

pub fn fetch_games(source: &dyn DataSource, query: &TeamQuery) -> Result<Vec<GameEntry>> {
    let body = source.get_json(Endpoint::Games {
        year: &query.year,
        team: &query.team,
    })?;
    parse_games_json(&body)
}

pub fn games_panel(outcome: &Result<Vec<GameEntry>>, team: &str, year: &str) -> Panel {
    match outcome {
        Ok(games) if games.is_empty() => {
            Panel::notice(GAMES_HEADING, format!("No games found for {team} in {year}."))
        }
        Ok(games) => Panel::items(GAMES_HEADING, games.iter().map(GameEntry::line).collect()),
        Err(_) => Panel::error(GAMES_HEADING, "Error getting game data."),
    }
}
