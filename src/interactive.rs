use crate::config;
use crate::error::{Error, Result};
use crate::session::{SelectionOutcome, SelectionSession};

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthChar;

use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;

mod picker;

pub(crate) use picker::TerminalPicker;

/// Drives a [`SelectionSession`] to its outcome.
pub(crate) trait Picker {
    fn pick(&mut self, session: SelectionSession) -> Result<SelectionOutcome>;
}

/// Whether keys can be read from stdin. Output goes to /dev/tty, so stdout
/// does not matter.
pub(crate) fn is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Next key press or repeat within `timeout`.
///
/// Release events are skipped, since one physical press reports both.
/// Returns `Ok(None)` when nothing arrives in time.
pub(crate) fn read_key_event(timeout: Duration) -> Result<Option<KeyEvent>> {
    let mut wait = timeout;
    while event::poll(wait).map_err(selector_error("read input"))? {
        if let Event::Key(key) = event::read().map_err(selector_error("read input"))?
            && key.kind != KeyEventKind::Release
        {
            return Ok(Some(key));
        }
        // Drain anything else already queued without blocking again
        wait = Duration::ZERO;
    }
    Ok(None)
}

fn selector_error<E: std::fmt::Display>(action: &'static str) -> impl FnOnce(E) -> Error {
    move |e| Error::Selector {
        message: format!("Failed to {action}: {e}"),
    }
}

/// Picker palette. Each field colors one role on screen; `[ui.colors]` keys
/// override them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UiTheme {
    frame: Color,
    row: Color,
    current_marker: Color,
    heading: Color,
    hints: Color,
    box_title: Color,
    placeholder: Color,
    query: Color,
    highlight_bg: Color,
    highlight_fg: Color,
    no_match: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            frame: Color::DarkGray,
            row: Color::White,
            current_marker: Color::LightGreen,
            heading: Color::LightCyan,
            hints: Color::Gray,
            box_title: Color::LightBlue,
            placeholder: Color::DarkGray,
            query: Color::LightGreen,
            highlight_bg: Color::Blue,
            highlight_fg: Color::Black,
            no_match: Color::Yellow,
        }
    }
}

impl UiTheme {
    pub(crate) fn from_colors(colors: &config::UiColors) -> Self {
        let mut theme = Self::default();
        for (configured, slot) in [
            (colors.border, &mut theme.frame),
            (colors.text, &mut theme.row),
            (colors.accent, &mut theme.current_marker),
            (colors.header, &mut theme.heading),
            (colors.footer, &mut theme.hints),
            (colors.title, &mut theme.box_title),
            (colors.muted, &mut theme.placeholder),
            (colors.search, &mut theme.query),
            (colors.selection_bg, &mut theme.highlight_bg),
            (colors.selection_fg, &mut theme.highlight_fg),
            (colors.warning, &mut theme.no_match),
        ] {
            if let Some(color) = configured {
                *slot = map_ui_color(color);
            }
        }
        theme
    }

    fn fg(color: Color) -> Style {
        Style::default().fg(color)
    }

    fn frame(self) -> Style {
        Self::fg(self.frame)
    }

    fn row(self) -> Style {
        Self::fg(self.row)
    }

    fn current_marker(self) -> Style {
        Self::fg(self.current_marker)
    }

    fn heading(self) -> Style {
        Self::fg(self.heading)
    }

    fn hints(self) -> Style {
        Self::fg(self.hints)
    }

    fn box_title(self) -> Style {
        Self::fg(self.box_title)
    }

    fn placeholder(self) -> Style {
        Self::fg(self.placeholder)
    }

    fn query(self) -> Style {
        Self::fg(self.query).add_modifier(Modifier::BOLD)
    }

    fn highlight(self) -> Style {
        Self::fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn no_match(self) -> Style {
        Self::fg(self.no_match)
    }
}

fn map_ui_color(color: config::UiColor) -> Color {
    use config::UiColorName as Name;

    let name = match color {
        config::UiColor::Rgb(r, g, b) => return Color::Rgb(r, g, b),
        config::UiColor::Named(name) => name,
    };
    match name {
        Name::Default => Color::Reset,
        Name::Black => Color::Black,
        Name::Red => Color::Red,
        Name::Green => Color::Green,
        Name::Yellow => Color::Yellow,
        Name::Blue => Color::Blue,
        Name::Magenta => Color::Magenta,
        Name::Cyan => Color::Cyan,
        Name::Gray => Color::Gray,
        Name::DarkGray => Color::DarkGray,
        Name::LightRed => Color::LightRed,
        Name::LightGreen => Color::LightGreen,
        Name::LightYellow => Color::LightYellow,
        Name::LightBlue => Color::LightBlue,
        Name::LightMagenta => Color::LightMagenta,
        Name::LightCyan => Color::LightCyan,
        Name::White => Color::White,
    }
}

type TtyTerminal = Terminal<CrosstermBackend<Box<dyn Write>>>;

/// Run `f` on the alternate screen, restoring the terminal afterwards
/// whether or not `f` succeeds.
fn with_terminal<T>(f: impl FnOnce(&mut TtyTerminal) -> Result<T>) -> Result<T> {
    let mut screen = AltScreen::enter()?;
    let result = f(&mut screen.terminal);
    match (result, screen.leave()) {
        (Ok(value), left) => left.map(|()| value),
        (Err(e), Err(leave_err)) => {
            log::error!("failed to restore terminal: {leave_err}");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
    }
}

/// Raw-mode alternate screen on the controlling terminal. Dropping it puts
/// the terminal back the way it was.
struct AltScreen {
    terminal: TtyTerminal,
    active: bool,
}

impl AltScreen {
    fn enter() -> Result<Self> {
        let writer = tty_writer()?;
        enable_raw_mode().map_err(selector_error("enable raw mode"))?;
        let terminal = Terminal::new(CrosstermBackend::new(writer))
            .map_err(selector_error("initialize terminal"))
            .inspect_err(|_| {
                let _ = disable_raw_mode();
            })?;

        // Any early return from here drops `screen`, which leaves raw mode
        let mut screen = Self {
            terminal,
            active: true,
        };
        screen
            .terminal
            .backend_mut()
            .execute(EnterAlternateScreen)
            .map_err(selector_error("enter alternate screen"))?;
        screen
            .terminal
            .clear()
            .map_err(selector_error("clear terminal"))?;
        Ok(screen)
    }

    /// Undo `enter`. Every step is attempted; the first failure is returned.
    fn leave(&mut self) -> Result<()> {
        if !std::mem::replace(&mut self.active, false) {
            return Ok(());
        }
        let screen = self
            .terminal
            .backend_mut()
            .execute(LeaveAlternateScreen)
            .map(|_| ())
            .map_err(selector_error("leave alternate screen"));
        let raw = disable_raw_mode().map_err(selector_error("disable raw mode"));
        let cursor = self
            .terminal
            .show_cursor()
            .map_err(selector_error("restore cursor"));
        screen.and(raw).and(cursor)
    }
}

impl Drop for AltScreen {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// Writer for the picker. On Unix this is `/dev/tty`, so the picker still
/// works when stdout is captured.
fn tty_writer() -> Result<Box<dyn Write>> {
    #[cfg(unix)]
    {
        let tty = OpenOptions::new()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .map_err(|e| match e.raw_os_error() {
                // No controlling terminal
                Some(libc::ENOENT | libc::ENXIO | libc::ENOTTY) => Error::NonInteractive,
                _ => Error::Internal(format!("Failed to open /dev/tty: {e}")),
            })?;
        Ok(Box::new(tty))
    }
    #[cfg(windows)]
    {
        Ok(Box::new(io::stdout()))
    }
}


/// Longest prefix of `text` that fits in `width` terminal columns. Control
/// characters are dropped.
fn truncate_text_for_width(text: &str, width: u16) -> String {
    let mut room = usize::from(width);
    text.chars()
        .filter_map(|ch| ch.width().map(|cols| (ch, cols)))
        .take_while(|&(_, cols)| {
            let fits = cols <= room;
            if fits {
                room -= cols;
            }
            fits
        })
        .map(|(ch, _)| ch)
        .collect()
}
