//! Fuzzy branch picker.
//!
//! Renders a [`SelectionSession`] and feeds it key presses until it reaches
//! an outcome. All filtering and highlight logic lives in the session.

use crate::error::{Error, Result};
use crate::session::{QueryEdit, SelectionOutcome, SelectionSession, SessionEvent};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use std::time::Duration;

use super::{
    Picker, TtyTerminal, UiTheme, is_interactive, read_key_event, selector_error,
    truncate_text_for_width, with_terminal,
};

const TITLE: &str = "Please pick the new branch";
const KEY_HINTS: &str =
    "[Enter] switch  [Up/Down/Ctrl+P/N] move  type: filter  [Ctrl+U] clear  [Esc] cancel";
const SEARCH_PLACEHOLDER: &str = "type to filter";
const CURRENT_SUFFIX: &str = " (current)";
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Picker that takes over the terminal's alternate screen.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TerminalPicker {
    theme: UiTheme,
}

impl TerminalPicker {
    pub(crate) fn new(theme: UiTheme) -> Self {
        Self { theme }
    }
}

impl Picker for TerminalPicker {
    fn pick(&mut self, session: SelectionSession) -> Result<SelectionOutcome> {
        if !is_interactive() {
            return Err(Error::InteractiveRequired);
        }
        let theme = self.theme;
        with_terminal(|terminal| run_picker(terminal, session, theme))
    }
}

fn run_picker(
    terminal: &mut TtyTerminal,
    mut session: SelectionSession,
    theme: UiTheme,
) -> Result<SelectionOutcome> {
    loop {
        terminal
            .draw(|frame| draw_picker(frame, &session, theme))
            .map_err(selector_error("draw picker"))?;

        // A termination signal cancels like Esc does
        if crate::signal_received() {
            session.handle(SessionEvent::Cancel);
        } else if let Some(key) = read_key_event(POLL_INTERVAL)?
            && let Some(event) = key_to_event(key)
        {
            session.handle(event);
        }

        if session.outcome().is_some() {
            return session.into_outcome().ok_or_else(|| {
                Error::Internal("selection ended without an outcome".to_string())
            });
        }
    }
}

/// Translate a key press into a session event.
fn key_to_event(key: KeyEvent) -> Option<SessionEvent> {
    let event = match key.code {
        KeyCode::Esc => SessionEvent::Cancel,
        KeyCode::Enter => SessionEvent::Confirm,
        KeyCode::Up => SessionEvent::MoveUp,
        KeyCode::Down => SessionEvent::MoveDown,
        KeyCode::Backspace => SessionEvent::Edit(QueryEdit::Backspace),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => match c {
            'c' => SessionEvent::Cancel,
            'p' | 'k' => SessionEvent::MoveUp,
            'n' | 'j' => SessionEvent::MoveDown,
            'u' => SessionEvent::Edit(QueryEdit::Clear),
            _ => return None,
        },
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => return None,
        KeyCode::Char(c) => SessionEvent::Edit(QueryEdit::Insert(c)),
        _ => return None,
    };
    Some(event)
}

fn draw_picker(frame: &mut ratatui::Frame<'_>, session: &SelectionSession, theme: UiTheme) {
    let size = frame.area();
    let header_height = 2;
    let body_padding = 1;
    let body_height = size.height.saturating_sub(header_height + body_padding);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(body_padding),
            Constraint::Length(body_height),
        ])
        .split(size);

    let title_line = Line::from(Span::styled(TITLE, theme.heading()));
    let key_hints_line = Line::from(Span::styled(
        truncate_text_for_width(KEY_HINTS, chunks[0].width),
        theme.hints(),
    ));
    frame.render_widget(Paragraph::new(vec![title_line, key_hints_line]), chunks[0]);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(chunks[2]);

    draw_search(frame, session.query(), body[0], theme);
    draw_branch_list(frame, session, body[1], theme);
    set_search_cursor(frame, body[0], session.query());
}

fn draw_search(frame: &mut ratatui::Frame<'_>, query: &str, area: Rect, theme: UiTheme) {
    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.frame())
        .padding(Padding::new(1, 1, 0, 0))
        .title(Span::styled("Search", theme.box_title()));
    let search_line = if query.is_empty() {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, theme.placeholder()))
    } else {
        Line::from(Span::styled(
            query,
            theme.query(),
        ))
    };
    frame.render_widget(Paragraph::new(search_line).block(search_block), area);
}

fn draw_branch_list(
    frame: &mut ratatui::Frame<'_>,
    session: &SelectionSession,
    area: Rect,
    theme: UiTheme,
) {
    let title = format!(
        "Branches ({}/{})",
        session.visible_count(),
        session.total_count()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.frame())
        .padding(Padding::new(1, 1, 0, 0))
        .title(Span::styled(title, theme.box_title()));

    if session.visible_count() == 0 {
        let message = Paragraph::new(Span::styled(
            "No branches match the query",
            theme.no_match(),
        ))
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    // Borders and horizontal padding take four columns
    let text_width = area.width.saturating_sub(4);
    let items = session
        .rows()
        .map(|row| {
            let name_style = if row.highlighted {
                theme.highlight()
            } else {
                theme.row()
            };
            let mut spans = vec![Span::styled(
                truncate_text_for_width(row.name, text_width),
                name_style,
            )];
            if row.is_current {
                let suffix_style = if row.highlighted {
                    theme.highlight()
                } else {
                    theme.current_marker()
                };
                spans.push(Span::styled(CURRENT_SUFFIX, suffix_style));
            }
            ListItem::new(Line::from(spans))
        })
        .collect::<Vec<_>>();

    let list = List::new(items)
        .block(block)
        .style(theme.row())
        .highlight_style(theme.highlight());
    let mut state = ListState::default().with_selected(Some(session.highlight()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn set_search_cursor(frame: &mut ratatui::Frame<'_>, area: Rect, query: &str) {
    let padding_left = 1u16;
    let x_offset = u16::try_from(query.width()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(padding_left)
        .saturating_add(x_offset)
        .min(area.right().saturating_sub(2));
    let y = area.y.saturating_add(1);
    frame.set_cursor_position((x, y));
}
