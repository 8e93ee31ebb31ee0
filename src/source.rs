use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Records { year: &'a str },
    Games { year: &'a str, team: &'a str },
    Teams { year: &'a str },
    Rankings { year: &'a str },
}

impl Endpoint<'_> {
    pub fn path_and_query(&self) -> String {
        match self {
            Endpoint::Records { year } => format!("/records?year={}", urlencoding::encode(year)),
            Endpoint::Games { year, team } => format!(
                "/games?year={}&team={}",
                urlencoding::encode(year),
                urlencoding::encode(team)
            ),
            Endpoint::Teams { year } => format!("/teams?year={}", urlencoding::encode(year)),
            Endpoint::Rankings { year } => {
                format!("/rankings?year={}", urlencoding::encode(year))
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::Records { .. } => "records",
            Endpoint::Games { .. } => "games",
            Endpoint::Teams { .. } => "teams",
            Endpoint::Rankings { .. } => "rankings",
        }
    }
}

pub trait DataSource: Send + Sync {
    // Non-success statuses are errors.
    fn get_json(&self, endpoint: Endpoint<'_>) -> Result<String>;

    fn proxy_image(&self, logo_url: &str) -> Result<Vec<u8>>;
}
