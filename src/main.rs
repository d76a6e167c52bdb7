mod branch;
mod cli;
mod color;
mod config;
mod controller;
mod error;
mod fuzzy;
mod interactive;
mod logging;
mod output;
mod repo;
mod session;
mod vcs;

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};

use color::ColorScheme;
use controller::BranchSwitchController;
use interactive::{TerminalPicker, UiTheme};
use output::Output;
use vcs::GitCli;

// Set once a termination signal arrives
static SIGNAL_RECEIVED: AtomicBool = AtomicBool::new(false);

fn setup_signal_handlers() {
    // With the `termination` feature this also covers SIGTERM and SIGHUP on Unix
    let _ = ctrlc::set_handler(|| {
        SIGNAL_RECEIVED.store(true, Ordering::SeqCst);
    });
}

pub(crate) fn signal_received() -> bool {
    SIGNAL_RECEIVED.load(Ordering::SeqCst)
}

fn main() -> ExitCode {
    setup_signal_handlers();

    let args = cli::parse();
    let color_config = color::ColorConfig::new(args.color_choice());

    // Logging is best effort; the run continues without it
    let _ = logging::setup_logging();
    log::debug!("sgb started (color={})", color_config.is_enabled());

    let result = run();

    if signal_received() {
        // 128 + SIGINT
        return ExitCode::from(130);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{}", ColorScheme::error(&format!("Error: {e}")));
            ExitCode::FAILURE
        }
    }
}

fn run() -> error::Result<()> {
    let config = config::load()?;
    color::set_cli_theme(&config.ui.colors);

    let output = Output::new();
    output.banner();

    let work_dir = std::env::current_dir()?;
    let picker = TerminalPicker::new(UiTheme::from_colors(&config.ui.colors));
    let backend = GitCli::new(work_dir.clone());
    BranchSwitchController::new(work_dir, backend, picker).run(&output)
}
