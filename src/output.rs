use crate::color::ColorScheme;
use crate::controller::RunOutcome;

const BANNER: &str = "SGB - A tool for easier switching of git branches";
const DETACHED_LABEL: &str = "HEAD (detached)";

/// Prints the banner and run reports to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn banner(&self) {
        println!();
        println!("{}", ColorScheme::banner(BANNER));
        println!();
    }

    /// Print the report for a finished run.
    pub fn report(&self, outcome: &RunOutcome) {
        for line in report_lines(outcome) {
            println!("{line}");
        }
    }
}

/// Lines describing `outcome`, blank separators included.
pub(crate) fn report_lines(outcome: &RunOutcome) -> Vec<String> {
    let current_line = |branch: &str, style: fn(&str) -> String| {
        format!(
            "{}{}{}",
            style("The current branch is "),
            ColorScheme::branch(branch),
            style(".")
        )
    };

    match outcome {
        RunOutcome::NotARepository => vec![ColorScheme::notice(
            "The current folder is not a git repository.",
        )],
        RunOutcome::Cancelled { current } => vec![
            ColorScheme::success("Switch cancelled!"),
            String::new(),
            current_line(
                current.as_deref().unwrap_or(DETACHED_LABEL),
                ColorScheme::success,
            ),
            String::new(),
        ],
        RunOutcome::Unchanged { current } => vec![
            ColorScheme::notice("The branch is not changed."),
            String::new(),
            current_line(current, ColorScheme::notice),
            String::new(),
        ],
        RunOutcome::Switched { to } => vec![
            ColorScheme::success("Switched successfully!"),
            String::new(),
            current_line(to, ColorScheme::success),
            String::new(),
        ],
    }
}
