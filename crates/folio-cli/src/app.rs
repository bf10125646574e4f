use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{Role, SessionController, SessionEvent, Settings, Submission, Turn};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Terminal,
};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::commands::{self, CommandResult};
use crate::theme::Theme;

// ── Single-prompt mode ──────────────────────────────────────────────────

pub async fn run_single_prompt(settings: &Settings, prompt: &str) -> Result<()> {
    let session = settings.start_session();

    match session.submit(prompt).await {
        Submission::Completed(turn) => println!("{}", turn.text()),
        Submission::Rejected(reason) => {
            tracing::warn!(?reason, "prompt not sent");
            eprintln!("Nothing to send: the prompt is empty.");
        }
    }

    Ok(())
}

// ── Interactive TUI ─────────────────────────────────────────────────────

struct AppState {
    settings: Settings,
    session: Arc<SessionController>,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    /// Snapshot of the store, refreshed on every session event.
    turns: Vec<Turn>,
    is_processing: bool,
    input: String,
    cursor_pos: usize,
    notice: Option<String>,
    scroll_offset: usize,
    should_quit: bool,
    theme: Theme,
}

impl AppState {
    fn new(
        settings: Settings,
        theme_name: &str,
        events_tx: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        let session = Arc::new(settings.start_session().with_events(events_tx.clone()));
        Self {
            settings,
            session,
            events_tx,
            turns: Vec::new(),
            is_processing: false,
            input: String::new(),
            cursor_pos: 0,
            notice: None,
            scroll_offset: usize::MAX,
            should_quit: false,
            theme: Theme::by_name(theme_name),
        }
    }

    async fn refresh(&mut self) {
        self.turns = self.session.turns().await;
        self.is_processing = self.session.is_busy().await;
        self.scroll_to_bottom();
    }

    /// Drop the current session and seed a new one. An in-flight call on the
    /// old session finishes on its own; its events only trigger a refresh.
    async fn new_session(&mut self) {
        self.session = Arc::new(
            self.settings
                .start_session()
                .with_events(self.events_tx.clone()),
        );
        self.notice = None;
        self.refresh().await;
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_offset = usize::MAX;
    }

    fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}

pub async fn run_tui(settings: Settings, theme_name: &str) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (events_tx, mut events_rx) = mpsc::unbounded_channel::<SessionEvent>();
    let mut state = AppState::new(settings, theme_name, events_tx);
    state.refresh().await;

    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|f| draw_ui(f, &mut state)) {
            break Err(e.into());
        }

        // Re-render from the store whenever the session reports a change
        let mut changed = false;
        while let Ok(event) = events_rx.try_recv() {
            tracing::trace!(?event, "session event");
            changed = true;
        }
        if changed {
            state.refresh().await;
        }

        match event::poll(std::time::Duration::from_millis(33)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut state, key).await
                }
                Ok(_) => {}
                Err(e) => break Err(e.into()),
            },
            Ok(false) => {}
            Err(e) => break Err(e.into()),
        }

        if state.should_quit {
            break Ok(());
        }
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn handle_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }
        KeyCode::Esc => state.should_quit = true,
        KeyCode::Enter => submit_input(state).await,
        KeyCode::Char(c) => {
            let idx = state.byte_index();
            state.input.insert(idx, c);
            state.cursor_pos += 1;
        }
        KeyCode::Backspace => {
            if state.cursor_pos > 0 {
                state.cursor_pos -= 1;
                let idx = state.byte_index();
                state.input.remove(idx);
            }
        }
        KeyCode::Delete => {
            if state.cursor_pos < state.input.chars().count() {
                let idx = state.byte_index();
                state.input.remove(idx);
            }
        }
        KeyCode::Left => state.cursor_pos = state.cursor_pos.saturating_sub(1),
        KeyCode::Right => {
            state.cursor_pos = (state.cursor_pos + 1).min(state.input.chars().count());
        }
        KeyCode::Home => state.cursor_pos = 0,
        KeyCode::End => state.cursor_pos = state.input.chars().count(),
        KeyCode::Up | KeyCode::PageUp => {
            let step = if key.code == KeyCode::PageUp { 10 } else { 1 };
            state.scroll_offset = state.scroll_offset.saturating_sub(step);
        }
        KeyCode::Down | KeyCode::PageDown => {
            let step = if key.code == KeyCode::PageDown { 10 } else { 1 };
            state.scroll_offset = state.scroll_offset.saturating_add(step);
        }
        _ => {}
    }
}

async fn submit_input(state: &mut AppState) {
    match commands::handle_command(&state.input) {
        CommandResult::NotACommand => {}
        CommandResult::Quit => {
            state.should_quit = true;
            return;
        }
        CommandResult::NewSession => {
            state.take_input();
            state.new_session().await;
            return;
        }
        CommandResult::Message(msg) => {
            state.take_input();
            state.notice = Some(msg);
            state.scroll_to_bottom();
            return;
        }
    }

    // Keep the draft while a call is in flight; the session would drop it.
    if state.input.trim().is_empty() || state.is_processing {
        return;
    }

    let text = state.take_input();
    state.notice = None;
    state.is_processing = true;

    let session = state.session.clone();
    tokio::spawn(async move {
        if let Submission::Rejected(reason) = session.submit(text).await {
            tracing::debug!(?reason, "submission rejected");
        }
    });
}

// ── Rendering ───────────────────────────────────────────────────────────

fn draw_ui(f: &mut ratatui::Frame, state: &mut AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // chat
            Constraint::Length(3), // input
            Constraint::Length(1), // status
        ])
        .split(f.area());

    let chat_area = main_chunks[0];
    let theme = &state.theme;

    let chat_lines = build_chat_lines(
        &state.turns,
        state.is_processing,
        state.notice.as_deref(),
        theme,
    );
    let total_lines = chat_lines.len();
    let visible_height = chat_area.height.saturating_sub(2) as usize;
    let max_scroll = total_lines.saturating_sub(visible_height);
    if state.scroll_offset > max_scroll {
        state.scroll_offset = max_scroll;
    }

    let chat = Paragraph::new(Text::from(chat_lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" SYSTEM_TERMINAL::MICHAEL_AI ")
                .border_style(Style::default().fg(theme.border)),
        )
        .wrap(Wrap { trim: false })
        .scroll((to_u16(state.scroll_offset), 0));
    f.render_widget(chat, chat_area);

    draw_input(f, main_chunks[1], state);
    draw_status_bar(f, main_chunks[2], state);
}

/// Terminal coordinates are u16; clamp rather than wrap.
fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn build_chat_lines<'a>(
    turns: &'a [Turn],
    is_processing: bool,
    notice: Option<&'a str>,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = Vec::new();

    for turn in turns {
        lines.extend(render_turn_lines(turn, theme));
        lines.push(Line::from(""));
    }

    if is_processing {
        lines.push(Line::from(Span::styled(
            "Processing Query...",
            Style::default()
                .fg(theme.busy_color)
                .add_modifier(Modifier::SLOW_BLINK),
        )));
    }

    if let Some(notice) = notice {
        for raw_line in notice.lines() {
            lines.push(Line::from(Span::styled(
                raw_line,
                Style::default().fg(theme.notice_color),
            )));
        }
    }

    lines
}

fn render_turn_lines<'a>(turn: &'a Turn, theme: &Theme) -> Vec<Line<'a>> {
    let (prefix, color) = match turn.role() {
        Role::User => ("You > ", theme.user_color),
        Role::Model => ("AI > ", theme.model_color),
    };
    let indent = " ".repeat(prefix.len());

    let mut lines: Vec<Line> = turn
        .text()
        .lines()
        .enumerate()
        .map(|(i, raw_line)| {
            let lead = if i == 0 {
                Span::styled(prefix, Style::default().fg(color).add_modifier(Modifier::BOLD))
            } else {
                Span::raw(indent.clone())
            };
            Line::from(vec![lead, Span::styled(raw_line, Style::default().fg(theme.fg))])
        })
        .collect();

    let time = turn
        .timestamp()
        .with_timezone(&chrono::Local)
        .format("%H:%M:%S")
        .to_string();
    lines.push(Line::from(vec![
        Span::raw(indent),
        Span::styled(time, Style::default().fg(theme.muted)),
    ]));

    lines
}

fn draw_input(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let input_style = if state.is_processing {
        Style::default().fg(theme.muted)
    } else {
        Style::default().fg(theme.fg)
    };

    let title = if state.is_processing {
        " Input (processing...) "
    } else if state.input.starts_with('/') {
        " Command "
    } else {
        " Enter command or query... "
    };

    let input = Paragraph::new(state.input.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(if state.input.starts_with('/') {
                    theme.accent
                } else {
                    theme.border
                })),
        )
        .style(input_style);
    f.render_widget(input, area);

    if !state.is_processing {
        let cursor_x = area
            .x
            .saturating_add(to_u16(state.cursor_pos))
            .saturating_add(1);
        let max_x = area.x + area.width.saturating_sub(2);
        f.set_cursor_position((cursor_x.min(max_x), area.y + 1));
    }
}

fn draw_status_bar(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let status = if state.is_processing { "busy" } else { "idle" };

    let status_spans = vec![
        Span::styled(
            format!(" folio [{}] ", theme.name),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("| {} ", state.session.model()),
            Style::default().fg(theme.accent),
        ),
        Span::styled(format!("| {status} "), Style::default().fg(theme.muted)),
        Span::styled(
            format!("| {} turns ", state.turns.len()),
            Style::default().fg(theme.muted),
        ),
        Span::styled("| /help  Esc to quit", Style::default().fg(theme.muted)),
    ];
    f.render_widget(Paragraph::new(Line::from(status_spans)), area);
}
