use clap::Parser;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "sgb")]
#[command(about = "Switch git branches interactively with fuzzy filtering")]
#[command(version = VERSION_STRING)]
#[command(after_help = "\
USAGE IN THE PICKER:
    Type to filter branches. Letters match in order but need not be adjacent,
    so `fx` finds `feature/x`. Matching ignores case.

    [Enter]              switch to the highlighted branch
    [Up/Down]            move (also Ctrl+P/Ctrl+N, Ctrl+K/Ctrl+J)
    [Backspace]          delete the last query character
    [Ctrl+U]             clear the query
    [Esc] / [Ctrl+C]     cancel without switching

CONFIGURATION:
    sgb reads picker colors from $SGB_CONFIG, or config.toml in the sgb
    directory under your platform config directory:

        [ui.colors]
        accent = \"light-green\"
        selection_bg = \"#3366ff\"

COLOR OUTPUT:
    --color=always    Always use colors
    --color=never     Never use colors (or use --no-color)
    --color=auto      Auto-detect terminal (default)

    Environment:
    NO_COLOR          When set to non-empty value, disables colors (https://no-color.org/)

    Priority: --color flag > NO_COLOR env > terminal detection

LOGGING:
    SGB_LOG           Log level written to the sgb log file in the cache
                      directory (off, error, warn, info, debug, trace; default warn)")]
pub(crate) struct Cli {
    /// When to use colored output (always, auto, never)
    #[arg(
        long,
        value_name = "WHEN",
        default_value = "auto",
        conflicts_with = "no_color"
    )]
    pub color: clap::ColorChoice,

    /// Disable colored output (equivalent to --color=never)
    #[arg(long)]
    pub no_color: bool,
}

const VERSION_STRING: &str = env!("SGB_VERSION_LABEL");

impl Cli {
    /// Effective color choice after applying `--no-color`.
    pub(crate) fn color_choice(&self) -> clap::ColorChoice {
        if self.no_color {
            clap::ColorChoice::Never
        } else {
            self.color
        }
    }
}

/// Parse CLI arguments.
pub(crate) fn parse() -> Cli {
    Cli::parse()
}
