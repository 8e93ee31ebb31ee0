use std::io;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use cfb_terminal::config::Config;
use cfb_terminal::dispatch::dispatch_submission;
use cfb_terminal::form::{FormField, Submission, field_label};
use cfb_terminal::panel::{Panel, PanelBody};
use cfb_terminal::session::Session;
use cfb_terminal::source::DataSource;
use cfb_terminal::state::{AppState, DataRegion, Delta, apply_delta};
use cfb_terminal::theme::{LogoArt, TextTone, Theme};

const MISSING_KEY_ALERT: &str = "Please enter an API key.";

struct App {
    state: AppState,
    config: Config,
    should_quit: bool,
    tx: mpsc::Sender<Delta>,
}

impl App {
    fn new(config: Config, tx: mpsc::Sender<Delta>) -> Self {
        Self {
            state: AppState::new(&config),
            config,
            should_quit: false,
            tx,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('u') => self.state.form.clear_focused(),
                _ => {}
            }
            return;
        }

        if self.state.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.alert = None;
            }
            return;
        }

        if self.state.help_overlay {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                self.state.help_overlay = false;
            }
            return;
        }

        match key.code {
            KeyCode::F(1) => self.state.help_overlay = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.focus_prev(),
            KeyCode::Left => self.state.form.cycle_option(false),
            KeyCode::Right => self.state.form.cycle_option(true),
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Enter => self.submit(),
            KeyCode::Char(ch) => self.state.form.insert_char(ch),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.state.form.submit() {
            Submission::MissingApiKey => {
                self.state.alert = Some(MISSING_KEY_ALERT.to_string());
            }
            Submission::Incomplete => {}
            Submission::Ready { api_key, query } => {
                let session: Arc<dyn DataSource> = Arc::new(Session::new(&api_key, &self.config));
                let generation = self.state.begin_submission(query.clone());
                dispatch_submission(session, query, generation, self.tx.clone());
            }
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let config = Config::from_env();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let mut app = App::new(config, tx);
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let state = &app.state;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Min(6),
            Constraint::Length(5),
            Constraint::Length(2),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(44),
            Constraint::Min(24),
            Constraint::Length(20),
        ])
        .split(chunks[1]);
    render_form(frame, top[0], state);
    render_panel(frame, top[1], state.panel(DataRegion::Record), state.theme.as_ref());
    render_logo(frame, top[2], state);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_panel(frame, middle[0], state.panel(DataRegion::Games), state.theme.as_ref());
    render_panel(frame, middle[1], state.panel(DataRegion::Polls), state.theme.as_ref());

    let console = Paragraph::new(console_text(state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[3]);

    let footer = Paragraph::new(
        "Tab/↑/↓ Field | ←/→ Option | Enter Submit | Ctrl-U Clear | F1 Help | Ctrl-C Quit",
    )
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[4]);

    if state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
    if let Some(alert) = &state.alert {
        render_alert(frame, frame.size(), alert);
    }
}

fn header_text(state: &AppState) -> String {
    let title = match &state.query {
        Some(query) => format!("CFB TERMINAL | {}", query.summary()),
        None => "CFB TERMINAL".to_string(),
    };
    let line1 = format!("   __   {title}");
    let line2 = "  (__)".to_string();
    let line3 = "   ''".to_string();
    format!("{line1}\n{line2}\n{line3}")
}

fn themed_style(theme: Option<&Theme>) -> Style {
    let Some(theme) = theme else {
        return Style::default();
    };
    let [r, g, b] = theme.rgb;
    let fg = match theme.text {
        TextTone::White => Color::White,
        TextTone::Black => Color::Black,
    };
    Style::default().bg(Color::Rgb(r, g, b)).fg(fg)
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.form;
    let style = themed_style(state.theme.as_ref());
    let fields = [
        (FormField::ApiKey, form.masked_api_key()),
        (FormField::Team, form.team.clone()),
        (FormField::Year, form.year.clone()),
        (
            FormField::Conference,
            option_text(form.conference_value(), "(select)"),
        ),
        (
            FormField::Division,
            option_text(form.division_value(), "(any)"),
        ),
    ];

    let lines: Vec<Line> = fields
        .into_iter()
        .map(|(field, value)| {
            let focused = field == form.focus;
            let marker = if focused { "> " } else { "  " };
            let label = format!("{marker}{:<11}", format!("{}:", field_label(field)));
            let value_style = if focused {
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            Line::from(vec![Span::raw(label), Span::styled(value, value_style)])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(style)
        .block(Block::default().title("Team Lookup").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn option_text(value: Option<&str>, empty: &str) -> String {
    match value {
        Some(v) => format!("< {v} >"),
        None => format!("< {empty} >"),
    }
}

fn render_panel(frame: &mut Frame, area: Rect, panel: &Panel, theme: Option<&Theme>) {
    let text = match &panel.body {
        PanelBody::Idle => Text::styled(
            "Submit a team to load this section",
            Style::default().fg(Color::DarkGray),
        ),
        PanelBody::Items(items) => Text::from(
            items
                .iter()
                .map(|item| Line::from(format!("• {item}")))
                .collect::<Vec<_>>(),
        ),
        PanelBody::Error(msg) => {
            Text::styled(msg.clone(), Style::default().add_modifier(Modifier::BOLD))
        }
        PanelBody::Fields(_) | PanelBody::Notice(_) => Text::from(
            panel
                .lines()
                .into_iter()
                .map(Line::from)
                .collect::<Vec<_>>(),
        ),
    };

    let paragraph = Paragraph::new(text)
        .style(themed_style(theme))
        .wrap(Wrap { trim: false })
        .block(Block::default().title(panel.heading).borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_logo(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(logo) = &state.logo else {
        let empty = Paragraph::new("")
            .block(Block::default().title("Logo").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let block = Block::default().title(logo.alt.as_str()).borders(Borders::ALL);
    let text = match &state.logo_art {
        Some(art) => logo_art_text(art),
        None => Text::styled(logo.url.clone(), Style::default().fg(Color::DarkGray)),
    };
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}

// Two image rows per terminal row: upper half as foreground, lower as background.
fn logo_art_text(art: &LogoArt) -> Text<'static> {
    let mut lines = Vec::new();
    for y in (0..art.height).step_by(2) {
        let spans: Vec<Span> = (0..art.width)
            .map(|x| {
                let top = art.pixel(x, y);
                let bottom = art.pixel(x, y + 1);
                if top.is_none() && bottom.is_none() {
                    return Span::raw(" ");
                }
                let style = Style::default()
                    .fg(rgb_or_reset(top))
                    .bg(rgb_or_reset(bottom));
                Span::styled("▀", style)
            })
            .collect();
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

fn rgb_or_reset(pixel: Option<[u8; 3]>) -> Color {
    match pixel {
        Some([r, g, b]) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    let start = state.logs.len().saturating_sub(3);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let popup_area = centered_rect(40, 20, area);
    frame.render_widget(Clear, popup_area);
    let text = format!("{message}\n\nEnter / Esc to dismiss");
    let alert = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().title("Alert").borders(Borders::ALL))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(alert, popup_area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "CFB Terminal - Help",
        "",
        "Form:",
        "  Tab / ↓       Next field",
        "  Shift-Tab / ↑ Previous field",
        "  ← / →         Cycle conference / division",
        "  Backspace     Delete character",
        "  Ctrl-U        Clear field",
        "  Enter         Submit",
        "",
        "Global:",
        "  F1            Toggle help",
        "  Ctrl-C        Quit",
        "",
        "The API key is kept in memory only and must be re-entered each launch.",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
