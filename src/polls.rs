use anyhow::{Context, Result};
use serde::Deserialize;

use crate::form::TeamQuery;
use crate::panel::{Panel, display_or_dash, names_match};
use crate::source::{DataSource, Endpoint};

pub const POLLS_HEADING: &str = "Season Poll Data";

#[derive(Debug, Clone, Deserialize)]
pub struct RankingWeek {
    pub season: i32,
    pub week: u32,
    #[serde(default)]
    pub polls: Vec<Poll>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Poll {
    pub poll: String,
    #[serde(default)]
    pub ranks: Vec<RankedSchool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSchool {
    pub rank: u32,
    pub school: String,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub first_place_votes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollRankEntry {
    pub week: u32,
    pub poll: String,
    pub rank: u32,
    pub points: Option<u32>,
    pub first_place_votes: Option<u32>,
}

impl PollRankEntry {
    pub fn line(&self) -> String {
        format!(
            "Week {}: {}: #{} ({} pts, {} 1st-place votes)",
            self.week,
            self.poll,
            self.rank,
            display_or_dash(self.points),
            display_or_dash(self.first_place_votes)
        )
    }
}

pub fn parse_rankings_json(raw: &str) -> Result<Vec<RankingWeek>> {
    serde_json::from_str(raw.trim()).context("invalid rankings json")
}

/// A year that is not an integer matches no week.
pub fn collect_poll_ranks(weeks: &[RankingWeek], year: &str, team: &str) -> Vec<PollRankEntry> {
    let Ok(season) = year.trim().parse::<i32>() else {
        return Vec::new();
    };
    weeks
        .iter()
        .filter(|week| week.season == season)
        .flat_map(|week| week.polls.iter().map(move |poll| (week, poll)))
        .flat_map(|(week, poll)| poll.ranks.iter().map(move |rank| (week, poll, rank)))
        .filter(|(_, _, rank)| names_match(&rank.school, team))
        .map(|(week, poll, rank)| PollRankEntry {
            week: week.week,
            poll: poll.poll.clone(),
            rank: rank.rank,
            points: rank.points,
            first_place_votes: rank.first_place_votes,
        })
        .collect()
}

pub fn fetch_poll_ranks(source: &dyn DataSource, query: &TeamQuery) -> Result<Vec<PollRankEntry>> {
    let body = source.get_json(Endpoint::Rankings { year: &query.year })?;
    let weeks = parse_rankings_json(&body)?;
    Ok(collect_poll_ranks(&weeks, &query.year, &query.team))
}

pub fn polls_panel(outcome: &Result<Vec<PollRankEntry>>, team: &str, year: &str) -> Panel {
    match outcome {
        Ok(entries) if entries.is_empty() => Panel::notice(
            POLLS_HEADING,
            format!("{team} was not ranked in any poll for {year}."),
        ),
        Ok(entries) => Panel::items(
            POLLS_HEADING,
            entries.iter().map(PollRankEntry::line).collect(),
        ),
        Err(_) => Panel::error(POLLS_HEADING, "Error fetching poll data."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(season: i32, week: u32, polls: Vec<Poll>) -> RankingWeek {
        RankingWeek {
            season,
            week,
            polls,
        }
    }

    fn poll(name: &str, schools: &[(u32, &str)]) -> Poll {
        Poll {
            poll: name.to_string(),
            ranks: schools
                .iter()
                .map(|(rank, school)| RankedSchool {
                    rank: *rank,
                    school: school.to_string(),
                    points: Some(1500 - rank * 10),
                    first_place_votes: Some(0),
                })
                .collect(),
        }
    }

    #[test]
    fn collects_across_weeks_and_polls_in_order() {
        let weeks = vec![
            week(
                2022,
                1,
                vec![
                    poll("AP Top 25", &[(1, "Alabama"), (3, "Georgia")]),
                    poll("Coaches Poll", &[(2, "georgia")]),
                ],
            ),
            week(2022, 2, vec![poll("AP Top 25", &[(1, "GEORGIA")])]),
        ];
        let found = collect_poll_ranks(&weeks, "2022", "Georgia");
        let summary: Vec<(u32, &str, u32)> = found
            .iter()
            .map(|e| (e.week, e.poll.as_str(), e.rank))
            .collect();
        assert_eq!(
            summary,
            vec![(1, "AP Top 25", 3), (1, "Coaches Poll", 2), (2, "AP Top 25", 1)]
        );
    }

    #[test]
    fn other_seasons_are_ignored() {
        let weeks = vec![week(2021, 1, vec![poll("AP Top 25", &[(1, "Georgia")])])];
        assert!(collect_poll_ranks(&weeks, "2022", "Georgia").is_empty());
    }

    #[test]
    fn non_numeric_year_matches_nothing() {
        let weeks = vec![week(2022, 1, vec![poll("AP Top 25", &[(1, "Georgia")])])];
        assert!(collect_poll_ranks(&weeks, "twenty", "Georgia").is_empty());
    }

    #[test]
    fn null_votes_render_as_dash() {
        let entry = PollRankEntry {
            week: 10,
            poll: "Playoff Committee Rankings".to_string(),
            rank: 4,
            points: None,
            first_place_votes: None,
        };
        assert_eq!(
            entry.line(),
            "Week 10: Playoff Committee Rankings: #4 (- pts, - 1st-place votes)"
        );
    }
}
