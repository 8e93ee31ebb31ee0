#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub heading: &'static str,
    pub body: PanelBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    Idle,
    Fields(Vec<(String, String)>),
    Items(Vec<String>),
    Notice(String),
    Error(String),
}

impl Panel {
    pub fn idle(heading: &'static str) -> Self {
        Self {
            heading,
            body: PanelBody::Idle,
        }
    }

    pub fn fields(heading: &'static str, fields: Vec<(String, String)>) -> Self {
        Self {
            heading,
            body: PanelBody::Fields(fields),
        }
    }

    pub fn items(heading: &'static str, items: Vec<String>) -> Self {
        Self {
            heading,
            body: PanelBody::Items(items),
        }
    }

    pub fn notice(heading: &'static str, text: impl Into<String>) -> Self {
        Self {
            heading,
            body: PanelBody::Notice(text.into()),
        }
    }

    pub fn error(heading: &'static str, text: impl Into<String>) -> Self {
        Self {
            heading,
            body: PanelBody::Error(text.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, PanelBody::Error(_))
    }

    pub fn lines(&self) -> Vec<String> {
        match &self.body {
            PanelBody::Idle => Vec::new(),
            PanelBody::Fields(fields) => fields
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect(),
            PanelBody::Items(items) => items.clone(),
            PanelBody::Notice(text) | PanelBody::Error(text) => vec![text.clone()],
        }
    }
}

pub(crate) fn display_or_dash<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn names_match(candidate: &str, wanted: &str) -> bool {
    candidate.to_lowercase() == wanted.to_lowercase()
}
