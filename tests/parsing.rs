mod common;

use cfb_terminal::games::parse_games_json;
use cfb_terminal::logo::parse_teams_json;
use cfb_terminal::polls::parse_rankings_json;
use cfb_terminal::records::parse_records_json;

use common::read_fixture;

#[test]
fn parses_records_fixture() {
    let records =
        parse_records_json(&read_fixture("records_2022.json")).expect("fixture should parse");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].team, "Georgia");
    assert_eq!(records[0].conference.as_deref(), Some("SEC"));
    assert_eq!(
        (records[0].wins, records[0].losses, records[0].ties),
        (15, 0, 0)
    );
    assert_eq!(records[2].conference, None);
}

#[test]
fn parses_games_fixture_in_response_order() {
    let games =
        parse_games_json(&read_fixture("games_2022_georgia.json")).expect("fixture should parse");
    assert_eq!(games.len(), 3);
    assert_eq!(games[0].line(), "1: Georgia (49) @ Oregon (3)");
    assert_eq!(games[1].line(), "2: Samford (0) @ Georgia (33)");
    assert_eq!(games[2].home_points, None);
    assert_eq!(games[2].line(), "1: TCU (-) @ Georgia (-)");
}

#[test]
fn parses_rankings_fixture() {
    let weeks =
        parse_rankings_json(&read_fixture("rankings_2022.json")).expect("fixture should parse");
    assert_eq!(weeks.len(), 3);
    assert_eq!(weeks[0].polls.len(), 2);
    assert_eq!(weeks[1].season, 2021);
    assert_eq!(weeks[2].polls[0].ranks[1].points, None);
}

#[test]
fn parses_teams_fixture_with_null_optionals() {
    let teams = parse_teams_json(&read_fixture("teams_2022.json")).expect("fixture should parse");
    assert_eq!(teams.len(), 3);
    assert_eq!(teams[1].abbreviation.as_deref(), Some("UGA"));
    assert_eq!(teams[2].abbreviation, None);
    assert_eq!(teams[2].alternate_names, None);
    assert_eq!(teams[2].first_logo(), None);
}

#[test]
fn malformed_bodies_are_errors() {
    assert!(parse_records_json("{\"error\":\"unauthorized\"}").is_err());
    assert!(parse_games_json("").is_err());
    assert!(parse_rankings_json("null").is_err());
    assert!(parse_teams_json("<html>").is_err());
}

#[test]
fn record_row_without_totals_is_rejected() {
    assert!(parse_records_json(r#"[{"team":"Georgia"}]"#).is_err());
    assert!(parse_records_json(r#"[{"team":"Georgia","conference":"SEC"}]"#).is_err());
    assert!(
        parse_records_json(r#"[{"team":"Georgia","total":{"wins":15,"losses":0}}]"#).is_err()
    );
}
