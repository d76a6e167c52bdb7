//! Colors for the banner and reports printed to stdout/stderr.

use std::io::IsTerminal;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::{AnsiColors, DynColors, Style};

use crate::config;

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);
static CLI_THEME: OnceLock<CliTheme> = OnceLock::new();

/// Whether output is colored, decided once at startup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Resolve `--color` and record the result for [`ColorScheme`].
    ///
    /// An explicit `always`/`never` wins. `auto` is off when `NO_COLOR` is set
    /// to a non-empty value and otherwise follows whether stdout is a terminal.
    pub fn new(choice: clap::ColorChoice) -> Self {
        let enabled = match choice {
            clap::ColorChoice::Always => true,
            clap::ColorChoice::Never => false,
            clap::ColorChoice::Auto => !no_color_requested() && std::io::stdout().is_terminal(),
        };
        COLOR_ENABLED.store(enabled, Ordering::Relaxed);
        Self { enabled }
    }

    pub fn is_enabled(self) -> bool {
        self.enabled
    }
}

// https://no-color.org/
fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

/// Semantic colors for everything printed outside the picker.
pub(crate) struct ColorScheme;

impl ColorScheme {
    /// Positive outcome lines (switched, cancelled).
    pub fn success(text: &str) -> String {
        paint(cli_theme().success, text)
    }

    /// Lines reporting that nothing happened.
    pub fn notice(text: &str) -> String {
        paint(cli_theme().notice, text)
    }

    pub fn error(text: &str) -> String {
        paint(cli_theme().error, text)
    }

    pub fn branch(text: &str) -> String {
        paint(cli_theme().branch, text)
    }

    /// Banner text with a per-character horizontal gradient.
    pub fn banner(text: &str) -> String {
        if !COLOR_ENABLED.load(Ordering::Relaxed) {
            return text.to_string();
        }
        let (from, to) = cli_theme().banner;
        let steps = text.chars().filter(|c| !c.is_whitespace()).count();
        let mut step = 0;
        text.chars()
            .map(|ch| {
                if ch.is_whitespace() {
                    return ch.to_string();
                }
                let (r, g, b) = lerp_rgb(from, to, step, steps);
                step += 1;
                Style::new().color(DynColors::Rgb(r, g, b)).style(ch).to_string()
            })
            .collect()
    }
}

type Rgb = (u8, u8, u8);

#[derive(Clone, Copy)]
struct CliTheme {
    success: Style,
    notice: Style,
    error: Style,
    branch: Style,
    banner: (Rgb, Rgb),
}

fn bold(color: DynColors) -> Style {
    Style::new().color(color).bold()
}

impl Default for CliTheme {
    fn default() -> Self {
        Self {
            success: bold(DynColors::Ansi(AnsiColors::Green)),
            notice: bold(DynColors::Ansi(AnsiColors::Red)),
            error: bold(DynColors::Ansi(AnsiColors::Red)),
            branch: bold(DynColors::Ansi(AnsiColors::BrightYellow)),
            banner: ((66, 211, 146), (97, 133, 246)),
        }
    }
}

impl CliTheme {
    /// `accent` colors success lines, `warning` the branch name and `error`
    /// both failure and "nothing happened" lines.
    fn from_colors(colors: &config::UiColors) -> Self {
        let defaults = Self::default();
        let pick = |configured: Option<config::UiColor>, fallback: Style| {
            configured.map_or(fallback, |color| bold(to_dyn_color(color)))
        };
        Self {
            success: pick(colors.accent, defaults.success),
            notice: pick(colors.error, defaults.notice),
            error: pick(colors.error, defaults.error),
            branch: pick(colors.warning, defaults.branch),
            banner: defaults.banner,
        }
    }
}

/// Install the configured theme. Only the first call has an effect.
pub(crate) fn set_cli_theme(colors: &config::UiColors) {
    let _ = CLI_THEME.set(CliTheme::from_colors(colors));
}

fn cli_theme() -> CliTheme {
    CLI_THEME.get().copied().unwrap_or_default()
}

fn paint(style: Style, text: &str) -> String {
    if COLOR_ENABLED.load(Ordering::Relaxed) {
        style.style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Linear interpolation between two colors at `step` of `steps`.
fn lerp_rgb(from: Rgb, to: Rgb, step: usize, steps: usize) -> Rgb {
    if steps <= 1 {
        return from;
    }
    let last = (steps - 1) as i32;
    let step = step.min(steps - 1) as i32;
    let channel = |a: u8, b: u8| {
        let (a, b) = (i32::from(a), i32::from(b));
        (a + (b - a) * step / last) as u8
    };
    (
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

fn to_dyn_color(color: config::UiColor) -> DynColors {
    use config::UiColorName as Name;

    let name = match color {
        config::UiColor::Rgb(r, g, b) => return DynColors::Rgb(r, g, b),
        config::UiColor::Named(name) => name,
    };
    DynColors::Ansi(match name {
        Name::Default => AnsiColors::Default,
        Name::Black => AnsiColors::Black,
        Name::Red => AnsiColors::Red,
        Name::Green => AnsiColors::Green,
        Name::Yellow => AnsiColors::Yellow,
        Name::Blue => AnsiColors::Blue,
        Name::Magenta => AnsiColors::Magenta,
        Name::Cyan => AnsiColors::Cyan,
        // ANSI "white" is the light gray of most palettes
        Name::Gray => AnsiColors::White,
        Name::DarkGray => AnsiColors::BrightBlack,
        Name::LightRed => AnsiColors::BrightRed,
        Name::LightGreen => AnsiColors::BrightGreen,
        Name::LightYellow => AnsiColors::BrightYellow,
        Name::LightBlue => AnsiColors::BrightBlue,
        Name::LightMagenta => AnsiColors::BrightMagenta,
        Name::LightCyan => AnsiColors::BrightCyan,
        Name::White => AnsiColors::BrightWhite,
    })
}
