use crate::config::Config;

pub const CONFERENCES: [&str; 11] = [
    "ACC",
    "American Athletic",
    "Big 12",
    "Big Ten",
    "Conference USA",
    "FBS Independents",
    "Mid-American",
    "Mountain West",
    "Pac-12",
    "SEC",
    "Sun Belt",
];

pub const DIVISIONS: [&str; 4] = ["fbs", "fcs", "ii", "iii"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamQuery {
    pub year: String,
    pub team: String,
    pub conference: String,
    pub division: Option<String>,
}

impl TeamQuery {
    pub fn summary(&self) -> String {
        match &self.division {
            Some(division) => format!(
                "{} {} ({}, {})",
                self.year, self.team, self.conference, division
            ),
            None => format!("{} {} ({})", self.year, self.team, self.conference),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    MissingApiKey,
    Incomplete,
    Ready { api_key: String, query: TeamQuery },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ApiKey,
    Team,
    Year,
    Conference,
    Division,
}

const FIELD_ORDER: [FormField; 5] = [
    FormField::ApiKey,
    FormField::Team,
    FormField::Year,
    FormField::Conference,
    FormField::Division,
];

#[derive(Debug, Clone)]
pub struct FormState {
    pub api_key: String,
    pub team: String,
    pub year: String,
    pub conference: Option<usize>,
    pub division: Option<usize>,
    pub focus: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl FormState {
    pub fn new(config: &Config) -> Self {
        let conference = config.default_conference.as_deref().and_then(|wanted| {
            CONFERENCES
                .iter()
                .position(|c| c.eq_ignore_ascii_case(wanted))
        });
        Self {
            api_key: String::new(),
            team: String::new(),
            year: config.default_year.clone(),
            conference,
            division: None,
            focus: FormField::ApiKey,
        }
    }

    pub fn submit(&self) -> Submission {
        let api_key = self.api_key.trim();
        if api_key.is_empty() {
            return Submission::MissingApiKey;
        }

        let team = self.team.trim();
        let year = self.year.trim();
        let Some(conference) = self.conference_value() else {
            return Submission::Incomplete;
        };
        if team.is_empty() || year.is_empty() {
            return Submission::Incomplete;
        }

        Submission::Ready {
            api_key: api_key.to_string(),
            query: TeamQuery {
                year: year.to_string(),
                team: team.to_string(),
                conference: conference.to_string(),
                division: self.division_value().map(str::to_string),
            },
        }
    }

    pub fn conference_value(&self) -> Option<&'static str> {
        self.conference.and_then(|idx| CONFERENCES.get(idx).copied())
    }

    pub fn division_value(&self) -> Option<&'static str> {
        self.division.and_then(|idx| DIVISIONS.get(idx).copied())
    }

    pub fn focus_next(&mut self) {
        let idx = self.focus_index();
        self.focus = FIELD_ORDER[(idx + 1) % FIELD_ORDER.len()];
    }

    pub fn focus_prev(&mut self) {
        let idx = self.focus_index();
        self.focus = FIELD_ORDER[(idx + FIELD_ORDER.len() - 1) % FIELD_ORDER.len()];
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        match self.focus {
            FormField::ApiKey => self.api_key.push(ch),
            FormField::Team => self.team.push(ch),
            FormField::Year => {
                if ch.is_ascii_digit() {
                    self.year.push(ch);
                }
            }
            FormField::Conference | FormField::Division => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::ApiKey => {
                self.api_key.pop();
            }
            FormField::Team => {
                self.team.pop();
            }
            FormField::Year => {
                self.year.pop();
            }
            FormField::Conference => self.conference = None,
            FormField::Division => self.division = None,
        }
    }

    pub fn clear_focused(&mut self) {
        match self.focus {
            FormField::ApiKey => self.api_key.clear(),
            FormField::Team => self.team.clear(),
            FormField::Year => self.year.clear(),
            FormField::Conference => self.conference = None,
            FormField::Division => self.division = None,
        }
    }

    pub fn cycle_option(&mut self, forward: bool) {
        match self.focus {
            FormField::Conference => {
                self.conference = cycle(self.conference, CONFERENCES.len(), forward)
            }
            FormField::Division => self.division = cycle(self.division, DIVISIONS.len(), forward),
            _ => {}
        }
    }

    pub fn masked_api_key(&self) -> String {
        "*".repeat(self.api_key.chars().count())
    }

    fn focus_index(&self) -> usize {
        FIELD_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }
}

fn cycle(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (current, forward) {
        (None, true) => Some(0),
        (None, false) => Some(len - 1),
        (Some(idx), true) if idx + 1 >= len => None,
        (Some(idx), true) => Some(idx + 1),
        (Some(0), false) => None,
        (Some(idx), false) => Some(idx - 1),
    }
}

pub fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::ApiKey => "API key",
        FormField::Team => "Team",
        FormField::Year => "Year",
        FormField::Conference => "Conference",
        FormField::Division => "Division",
    }
}
