use std::collections::VecDeque;

use crate::config::Config;
use crate::form::{FormState, TeamQuery};
use crate::games::GAMES_HEADING;
use crate::logo::LogoView;
use crate::panel::Panel;
use crate::polls::POLLS_HEADING;
use crate::records::RECORD_HEADING;
use crate::theme::{LogoArt, Theme};

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataRegion {
    Record,
    Games,
    Polls,
}

pub struct AppState {
    pub form: FormState,
    pub record: Panel,
    pub games: Panel,
    pub polls: Panel,
    pub logo: Option<LogoView>,
    pub logo_art: Option<LogoArt>,
    pub theme: Option<Theme>,
    pub query: Option<TeamQuery>,
    pub generation: u64,
    pub alert: Option<String>,
    pub help_overlay: bool,
    pub logs: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            form: FormState::new(config),
            record: Panel::idle(RECORD_HEADING),
            games: Panel::idle(GAMES_HEADING),
            polls: Panel::idle(POLLS_HEADING),
            logo: None,
            logo_art: None,
            theme: None,
            query: None,
            generation: 0,
            alert: None,
            help_overlay: false,
            logs: VecDeque::new(),
        }
    }

    pub fn begin_submission(&mut self, query: TeamQuery) -> u64 {
        self.generation += 1;
        self.push_log(format!("[INFO] Loading {}", query.summary()));
        self.query = Some(query);
        self.generation
    }

    pub fn panel(&self, region: DataRegion) -> &Panel {
        match region {
            DataRegion::Record => &self.record,
            DataRegion::Games => &self.games,
            DataRegion::Polls => &self.polls,
        }
    }

    fn panel_mut(&mut self, region: DataRegion) -> &mut Panel {
        match region {
            DataRegion::Record => &mut self.record,
            DataRegion::Games => &mut self.games,
            DataRegion::Polls => &mut self.polls,
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

#[derive(Debug, Clone)]
pub enum Delta {
    SetPanel {
        generation: u64,
        region: DataRegion,
        panel: Panel,
    },
    SetLogo {
        generation: u64,
        logo: LogoView,
    },
    SetLogoArt {
        generation: u64,
        art: LogoArt,
    },
    SetTheme {
        generation: u64,
        theme: Theme,
    },
    Log(String),
}

/// Updates tagged with an older generation belong to a superseded submission
/// and are dropped.
pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetPanel {
            generation,
            region,
            panel,
        } => {
            if state.is_current(generation) {
                *state.panel_mut(region) = panel;
            }
        }
        Delta::SetLogo { generation, logo } => {
            if state.is_current(generation) {
                state.logo = Some(logo);
                state.logo_art = None;
            }
        }
        Delta::SetLogoArt { generation, art } => {
            if state.is_current(generation) {
                state.logo_art = Some(art);
            }
        }
        Delta::SetTheme { generation, theme } => {
            if state.is_current(generation) {
                state.push_log(format!(
                    "[INFO] Theme {} with {} text",
                    theme.background,
                    theme.text.label()
                ));
                state.theme = Some(theme);
            }
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
