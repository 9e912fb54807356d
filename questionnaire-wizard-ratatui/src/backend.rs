//! Ratatui wizard driving a survey controller.
//!
//! Provides a terminal UI with a header, progress bar, question panel and
//! keyboard help, one question at a time.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use questionnaire::{
    OptionView, QuestionView, ResultLine, Screen, SliderView, SurveyController, SurveyDefinition,
    ViewBody,
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use thiserror::Error;

use crate::{Flow, TerminalSurface, handle_key};

/// Error type for the Ratatui wizard.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User cancelled the survey (e.g., pressed Esc).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Terminal wizard for a survey.
///
/// Shows the welcome screen, the questions one at a time and the results summary,
/// driving a [`SurveyController`] from key presses.
#[derive(Debug, Clone, Default)]
pub struct RatatuiWizard {
    /// Title shown at the top, instead of the survey title.
    title: Option<String>,
    /// Color theme for the UI.
    theme: Theme,
}

impl RatatuiWizard {
    /// Create a new wizard with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title shown at the top of the wizard.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The surface this wizard draws, for a controller the caller owns.
    pub fn surface(&self, definition: &SurveyDefinition) -> TerminalSurface {
        let mut surface = TerminalSurface::for_survey(definition, self.theme.clone());
        if let Some(title) = &self.title {
            surface.title = title.clone();
        }
        surface
    }

    /// Run the survey in the terminal and return the results lines.
    ///
    /// Returns [`RatatuiError::Cancelled`] when the user presses Esc before finishing.
    pub fn run(&self, definition: SurveyDefinition) -> Result<Vec<ResultLine>, RatatuiError> {
        let surface = self.surface(&definition);
        let mut controller = SurveyController::new(definition, surface);

        let mut terminal = self.setup_terminal()?;
        let flow = event_loop(&mut terminal, &mut controller);
        self.restore_terminal(&mut terminal)?;

        match flow? {
            Flow::Cancel => Err(RatatuiError::Cancelled),
            Flow::Finish | Flow::Continue => Ok(controller.results()),
        }
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &mut SurveyController<TerminalSurface>,
) -> Result<Flow, RatatuiError> {
    loop {
        terminal.draw(|frame| draw(frame, controller.surface()))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match handle_key(controller, key.code) {
                Flow::Continue => {}
                flow => return Ok(flow),
            }
        }
    }
}

/// Draw the visible screen of `surface`.
pub fn draw(frame: &mut Frame, surface: &TerminalSurface) {
    match surface.screen() {
        Screen::Welcome => draw_welcome(frame, surface),
        Screen::Survey => draw_question(frame, surface),
        Screen::Results => draw_results(frame, surface),
    }
}

fn draw_welcome(frame: &mut Frame, surface: &TerminalSurface) {
    let theme = &surface.theme;
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(format!(" {} ", surface.title))
        .title_style(Style::default().fg(theme.primary).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut text = surface.welcome.clone().unwrap_or_default();
    if !text.is_empty() {
        text.push_str("\n\n");
    }
    text.push_str("Press Enter to start the survey.\nEsc: Cancel");

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(4),
            Constraint::Percentage(35),
        ])
        .split(inner);

    frame.render_widget(paragraph, centered[1]);
}

fn draw_question(frame: &mut Frame, surface: &TerminalSurface) {
    let theme = &surface.theme;
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Progress bar
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Help
        ])
        .split(area);

    let header = Paragraph::new(surface.title.clone())
        .style(Style::default().fg(theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, chunks[0]);

    draw_progress(frame, chunks[1], surface);

    let Some(view) = surface.view() else {
        return;
    };

    let follow_up_height = if view.follow_up.is_some() { 3 } else { 0 };
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Question prompt
            Constraint::Min(5),                   // Input area
            Constraint::Length(follow_up_height), // Follow-up
            Constraint::Length(2),                // Alert
        ])
        .split(chunks[2]);

    let mut prompt_title = vec![Span::styled(" Question ", Style::default().fg(theme.highlight))];
    if view.required {
        prompt_title.push(Span::styled("* Required ", Style::default().fg(theme.error)));
    }
    let prompt = Paragraph::new(view.prompt.clone())
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(Line::from(prompt_title)),
        );
    frame.render_widget(prompt, content_chunks[0]);

    draw_body(frame, content_chunks[1], surface, view);

    if let Some(follow_up) = &view.follow_up {
        let border = if surface.follow_up_focused() {
            theme.highlight
        } else {
            theme.border
        };
        let field = Paragraph::new(follow_up.field.value.clone())
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(format!(" {} ", follow_up.prompt))
                    .title_style(Style::default().fg(theme.secondary)),
            );
        frame.render_widget(field, content_chunks[2]);

        if surface.follow_up_focused() {
            let cursor_x = cursor_column(content_chunks[2], &follow_up.field.value);
            frame.set_cursor_position((cursor_x, content_chunks[2].y + 1));
        }
    }

    if let Some(alert) = surface.alert_message() {
        let alert_widget = Paragraph::new(alert.to_string())
            .style(Style::default().fg(theme.error).bold())
            .alignment(Alignment::Center);
        frame.render_widget(alert_widget, content_chunks[3]);
    }

    let help = Paragraph::new(help_text(view, surface))
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, chunks[3]);
}

fn draw_progress(frame: &mut Frame, area: Rect, surface: &TerminalSurface) {
    let theme = &surface.theme;
    let progress_text = format!(" {:.0}% ", surface.progress());

    let bar_width = area.width.saturating_sub(2);
    let text_width = progress_text.len() as u16;
    let filled_width = ((surface.progress() / 100.0).clamp(0.0, 1.0) * bar_width as f64) as u16;

    let bar_x = area.x + 1;
    let bar_y = area.y;

    let track = "─".repeat(bar_width as usize);
    let track_widget = Paragraph::new(track).style(Style::default().fg(theme.border));
    frame.render_widget(track_widget, Rect::new(bar_x, bar_y, bar_width, 1));

    if filled_width > 0 {
        let filled = "━".repeat(filled_width as usize);
        let filled_widget = Paragraph::new(filled).style(Style::default().fg(theme.primary));
        frame.render_widget(filled_widget, Rect::new(bar_x, bar_y, filled_width, 1));
    }

    let text_x = bar_x + (bar_width.saturating_sub(text_width)) / 2;
    let text_widget = Paragraph::new(progress_text).style(Style::default().fg(theme.secondary));
    frame.render_widget(text_widget, Rect::new(text_x, bar_y + 1, text_width, 1));
}

fn draw_body(frame: &mut Frame, area: Rect, surface: &TerminalSurface, view: &QuestionView) {
    let theme = &surface.theme;
    let block = |title: String| {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(title)
            .title_style(Style::default().fg(theme.secondary))
    };

    match &view.body {
        ViewBody::Choices(options) | ViewBody::Emoji(options) => {
            let items = option_items(options, surface, |option| {
                if option.selected { "(•)" } else { "( )" }
            });
            draw_list(frame, area, items, block(" Select Option ".to_string()), surface);
        }
        ViewBody::Toggles(options) => {
            let items = option_items(options, surface, |option| {
                if option.selected { "[✓]" } else { "[ ]" }
            });
            let selected_count = options.iter().filter(|option| option.selected).count();
            draw_list(
                frame,
                area,
                items,
                block(format!(" Multi-Select ({selected_count} selected) ")),
                surface,
            );
        }
        ViewBody::Slider(slider) => {
            let paragraph = Paragraph::new(slider_lines(slider, theme, area.width))
                .alignment(Alignment::Center)
                .block(block(format!(" Rating ({} - {}) ", slider.min, slider.max)));
            frame.render_widget(paragraph, area);
        }
        ViewBody::TextField(field) => {
            let text = if field.value.is_empty() {
                Span::styled(field.placeholder.clone(), Style::default().fg(theme.border))
            } else {
                Span::styled(field.value.clone(), Style::default().fg(theme.text))
            };
            let paragraph = Paragraph::new(Line::from(text))
                .wrap(Wrap { trim: false })
                .block(block(" Input ".to_string()));
            frame.render_widget(paragraph, area);

            if !surface.follow_up_focused() {
                let cursor_x = cursor_column(area, &field.value);
                frame.set_cursor_position((cursor_x, area.y + 1));
            }
        }
        ViewBody::Empty => {
            let paragraph = Paragraph::new("")
                .block(block(" Nothing to answer here ".to_string()));
            frame.render_widget(paragraph, area);
        }
    }
}

fn option_items<'a>(
    options: &'a [OptionView],
    surface: &TerminalSurface,
    marker: impl Fn(&OptionView) -> &'static str,
) -> Vec<ListItem<'a>> {
    let theme = &surface.theme;
    options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if i == surface.focus() && !surface.follow_up_focused() {
                Style::default().fg(theme.highlight).bold()
            } else if option.selected {
                Style::default().fg(theme.secondary)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(format!("  {} {}", marker(option), option.label)).style(style)
        })
        .collect()
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    block: Block,
    surface: &TerminalSurface,
) {
    let list = List::new(items).block(block).highlight_symbol("► ");
    let mut list_state = ListState::default();
    list_state.select(Some(surface.focus()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn slider_lines(slider: &SliderView, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let SliderView {
        min,
        max,
        value,
        low_label,
        high_label,
    } = slider;

    let track_width = width.saturating_sub(6).max(1);
    // i64 bounds can span more than i64 holds.
    let span = (i128::from(*max) - i128::from(*min)).max(1);
    let offset = (i128::from(*value) - i128::from(*min)).clamp(0, span);
    let knob = offset * i128::from(track_width - 1) / span;
    let track: String = (0..i128::from(track_width))
        .map(|i| if i == knob { '●' } else { '─' })
        .collect();

    let padding = usize::from(track_width)
        .saturating_sub(low_label.chars().count() + high_label.chars().count());
    vec![
        Line::from(Span::styled(track, Style::default().fg(theme.primary))),
        Line::from(format!("{low_label}{}{high_label}", " ".repeat(padding))),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(theme.highlight).bold(),
        )),
    ]
}

/// Column just after `text` inside a bordered `area`.
fn cursor_column(area: Rect, text: &str) -> u16 {
    let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    area.x.saturating_add(1).saturating_add(typed)
}

fn help_text(view: &QuestionView, surface: &TerminalSurface) -> String {
    let controls = if surface.follow_up_focused() {
        "Type your answer  Tab: Back to options"
    } else {
        match &view.body {
            ViewBody::Choices(_) | ViewBody::Emoji(_) => "↑/↓: Navigate  Space: Choose",
            ViewBody::Toggles(_) => "↑/↓: Navigate  Space: Toggle",
            ViewBody::Slider(_) => "←/→: Adjust  Space: Keep value",
            ViewBody::TextField(_) => "Type your answer",
            ViewBody::Empty => "",
        }
    };
    let follow_up = if view.follow_up.is_some() && !surface.follow_up_focused() {
        "  Tab: Follow-up"
    } else {
        ""
    };
    let forward = if surface.nav().submit { "Submit" } else { "Next" };
    let back = if surface.nav().previous {
        "  PgUp: Back"
    } else {
        ""
    };

    format!("{controls}{follow_up}  Enter: {forward}{back}  Esc: Cancel")
}

fn draw_results(frame: &mut Frame, surface: &TerminalSurface) {
    let theme = &surface.theme;
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success))
        .title(" Results ")
        .title_style(Style::default().fg(theme.success).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let heading = surface
        .epilogue
        .clone()
        .unwrap_or_else(|| "Thank you! Here is a summary of your answers:".to_string());
    frame.render_widget(
        Paragraph::new(heading)
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let mut lines = Vec::new();
    for line in surface.results() {
        lines.push(Line::from(Span::styled(
            line.prompt.clone(),
            Style::default().fg(theme.primary).bold(),
        )));
        lines.push(Line::from(format!("  {}", line.answer)));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false }),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new("Enter: Finish  r: Restart")
            .style(Style::default().fg(theme.border))
            .alignment(Alignment::Center),
        chunks[2],
    );
}
