//! Interactive playlist analyzer.
//!
//! A single screen: a URL input, and below it whatever the analysis state
//! machine currently holds (hint, progress, error, or results). Analyses run
//! on an [`AnalysisWorker`] thread so the screen keeps redrawing while a
//! playlist is fetched.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::{info, warn};

use super::app::status_footer::{render_footer, render_status_line};
use super::app::App;
use crate::analysis::{
    AggregateResult, AnalysisOutcome, AnalysisState, AnalysisWorker, Analyzer, CopyFeedback,
    SubmitOutcome,
};
use crate::clipboard::Copy;
use crate::duration::describe;
use crate::playlist::PlaylistId;
use crate::report;
use crate::theme::{current_theme, Theme};

const TICK_RATE: Duration = Duration::from_millis(100);

const IDLE_HINT: &str = "Paste a YouTube playlist URL and press Enter.";
const RUNNING_TEXT: &str = "Analyzing...";
const COPIED_TEXT: &str = "Copied!";

const FOOTER_KEYS: &[(&str, &str)] = &[
    ("Enter", "analyze"),
    ("Ctrl+Y", "copy results"),
    ("Ctrl+U", "clear"),
    ("Esc", "quit"),
];

/// What the runner should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Start fetching this playlist in the background.
    Analyze(PlaylistId),
    /// Put this text on the clipboard.
    Copy(String),
}

/// Screen state, independent of the terminal.
#[derive(Debug, Default)]
pub struct AnalyzerScreen {
    pub input: String,
    pub state: AnalysisState,
    pub copy_feedback: CopyFeedback,
}

impl AnalyzerScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a key press to an edit or an [`Action`].
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if ctrl => Action::Quit,
            KeyCode::Char('y') if ctrl => self.copy_action(),
            // The input is locked while a playlist is being fetched.
            _ if self.state.is_running() => Action::None,
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                Action::None
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.input.pop();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            _ => Action::None,
        }
    }

    /// Insert pasted text into the input, dropping line breaks.
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.is_running() {
            return;
        }
        self.input
            .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
    }

    /// Submit the current input. An empty input is ignored.
    pub fn submit(&mut self) -> Action {
        if self.input.trim().is_empty() {
            return Action::None;
        }
        match self.state.submit(&self.input) {
            SubmitOutcome::Started(playlist_id) => {
                self.copy_feedback.clear();
                Action::Analyze(playlist_id)
            }
            SubmitOutcome::Invalid => {
                self.copy_feedback.clear();
                Action::None
            }
            SubmitOutcome::Busy => Action::None,
        }
    }

    /// Record a finished background analysis.
    pub fn finish(&mut self, outcome: AnalysisOutcome) {
        if let Ok(result) = &outcome.result {
            info!(playlist = %outcome.playlist_id, videos = result.video_count, "Analysis finished");
        }
        self.state.complete(outcome.result);
    }

    fn copy_action(&self) -> Action {
        match self.state.result() {
            Some(result) => Action::Copy(report::render(result)),
            None => Action::None,
        }
    }

    pub fn render(&self, frame: &mut Frame, now: Instant) {
        let theme = current_theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            "playtime - YouTube playlist length",
            theme.accent_bold_style(),
        )));
        frame.render_widget(title, chunks[0]);

        self.render_input(frame, chunks[1], &theme);
        self.render_body(frame, chunks[2], &theme);

        if self.copy_feedback.is_visible(now) {
            render_status_line(frame, chunks[3], COPIED_TEXT, theme.success_style());
        } else if self.state.result().is_some() {
            render_status_line(
                frame,
                chunks[3],
                "Press Ctrl+Y to copy the results",
                theme.text_secondary_style(),
            );
        }

        render_footer(frame, chunks[4], FOOTER_KEYS);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let line = Line::from(vec![
            Span::styled(self.input.clone(), theme.text_style()),
            Span::styled("_", theme.accent_style()),
        ]);
        let input = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style())
                .title(Span::styled(" Playlist URL ", theme.accent_style())),
        );
        frame.render_widget(input, area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let body = match &self.state {
            AnalysisState::Idle => {
                Paragraph::new(Span::styled(IDLE_HINT, theme.text_secondary_style()))
            }
            AnalysisState::Running { .. } => {
                Paragraph::new(Span::styled(RUNNING_TEXT, theme.accent_style()))
            }
            AnalysisState::Failed(error) => {
                Paragraph::new(Span::styled(error.user_message(), theme.error_style()))
            }
            AnalysisState::Succeeded(result) => result_panel(result, theme),
        };
        frame.render_widget(body.wrap(Wrap { trim: false }), area);
    }
}

/// The results block for a finished analysis.
fn result_panel<'a>(result: &'a AggregateResult, theme: &Theme) -> Paragraph<'a> {
    let label = |text: &'a str| Span::styled(text, theme.text_secondary_style());
    let value = |text: String| Span::styled(text, theme.text_style());

    let mut lines = vec![
        Line::from(vec![label("Creator: "), value(result.creator.clone())]),
        Line::from(vec![
            label("Videos: "),
            value(format!(
                "{} ({} unavailable)",
                result.video_count, result.unavailable_count
            )),
        ]),
        Line::from(vec![
            label("Average length: "),
            value(describe(result.average_seconds)),
        ]),
        Line::from(vec![
            label("Total length: "),
            value(describe(result.total_seconds)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Watching time", theme.accent_style())),
    ];
    lines.extend(result.speed_times.iter().map(|speed| {
        Line::from(vec![
            Span::styled(format!("  At {}: ", speed.label()), theme.accent_style()),
            value(describe(speed.seconds)),
        ])
    }));

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.text_secondary_style())
            .title(Span::styled(
                format!(" {} ", result.title),
                theme.accent_bold_style(),
            )),
    )
}

/// Terminal-backed analyzer application.
pub struct AnalyzerApp {
    app: App,
    screen: AnalyzerScreen,
    worker: AnalysisWorker,
    clipboard: Copy,
}

impl AnalyzerApp {
    pub fn new(analyzer: Analyzer) -> Result<Self> {
        Ok(Self {
            app: App::new(TICK_RATE)?,
            screen: AnalyzerScreen::new(),
            worker: AnalysisWorker::new(analyzer),
            clipboard: Copy::new(),
        })
    }

    /// Pre-fill the input with `url` and start analyzing it.
    pub fn start_with(&mut self, url: &str) {
        self.screen.input = url.to_string();
        let action = self.screen.submit();
        self.perform(action);
    }

    /// Run until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if let Some(outcome) = self.worker.poll() {
                self.screen.finish(outcome);
            }

            let screen = &self.screen;
            self.app.draw(|frame| screen.render(frame, Instant::now()))?;

            let action = match self.app.next_event()? {
                Some(Event::Key(key)) => self.screen.handle_key(key),
                Some(Event::Paste(text)) => {
                    self.screen.handle_paste(&text);
                    Action::None
                }
                _ => Action::None,
            };

            if action == Action::Quit {
                return Ok(());
            }
            self.perform(action);
        }
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Analyze(playlist_id) => self.worker.spawn(playlist_id),
            Action::Copy(text) => match self.clipboard.text(&text) {
                Ok(result) => {
                    info!("{}", result.message());
                    self.screen.copy_feedback.show(Instant::now());
                }
                Err(e) => warn!(error = %e, "Failed to copy results"),
            },
            Action::None | Action::Quit => {}
        }
    }
}
