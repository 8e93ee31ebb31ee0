use anyhow::{Context, Result};
use serde::Deserialize;

use crate::form::TeamQuery;
use crate::panel::{Panel, display_or_dash, names_match};
use crate::source::{DataSource, Endpoint};

pub const RECORD_HEADING: &str = "Season Record";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonRecord {
    pub team: String,
    pub conference: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

#[derive(Debug, Deserialize)]
struct RecordRow {
    team: String,
    #[serde(default)]
    conference: Option<String>,
    total: RecordTotals,
}

#[derive(Debug, Deserialize)]
struct RecordTotals {
    wins: u32,
    losses: u32,
    ties: u32,
}

pub fn parse_records_json(raw: &str) -> Result<Vec<SeasonRecord>> {
    let rows: Vec<RecordRow> = serde_json::from_str(raw.trim()).context("invalid records json")?;
    Ok(rows
        .into_iter()
        .map(|row| SeasonRecord {
            team: row.team,
            conference: row.conference,
            wins: row.total.wins,
            losses: row.total.losses,
            ties: row.total.ties,
        })
        .collect())
}

pub fn find_record<'a>(records: &'a [SeasonRecord], team: &str) -> Option<&'a SeasonRecord> {
    records.iter().find(|r| names_match(&r.team, team))
}

pub fn fetch_record(source: &dyn DataSource, query: &TeamQuery) -> Result<Option<SeasonRecord>> {
    let body = source.get_json(Endpoint::Records { year: &query.year })?;
    let records = parse_records_json(&body)?;
    Ok(find_record(&records, &query.team).cloned())
}

pub fn record_panel(outcome: &Result<Option<SeasonRecord>>, team: &str) -> Panel {
    match outcome {
        Ok(Some(record)) => Panel::fields(
            RECORD_HEADING,
            vec![
                ("Team".to_string(), record.team.clone()),
                (
                    "Conference".to_string(),
                    display_or_dash(record.conference.as_deref()),
                ),
                (
                    "Record".to_string(),
                    format!("{}-{}-{}", record.wins, record.losses, record.ties),
                ),
            ],
        ),
        Ok(None) => Panel::notice(RECORD_HEADING, format!("No record found for {team}.")),
        Err(_) => Panel::error(RECORD_HEADING, "Error getting team record."),
    }
}
