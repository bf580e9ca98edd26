use crate::adapters::report::{render_report, ReportFormat};
use crate::core::registry::MovieRegistry;
use crate::utils::error::{GuideError, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub find_title: String,
    pub remove_title: String,
    pub format: ReportFormat,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            find_title: "Movie 2".to_string(),
            remove_title: "Movie 3".to_string(),
            format: ReportFormat::Text,
        }
    }
}

/// Walks a registry through lookup, removal and the sorted listing, writing
/// each step to `out`.
///
/// A failed removal stops the walkthrough before anything is listed.
pub fn run_demo<W: Write>(
    registry: &mut MovieRegistry,
    options: &DemoOptions,
    out: &mut W,
) -> Result<()> {
    match registry.find_by_title(&options.find_title) {
        Some(movie) => writeln!(out, "Found movie: {}", movie.title())?,
        None => writeln!(out, "Movie with title '{}' not found", options.find_title)?,
    }

    registry.remove(&options.remove_title)?;
    writeln!(out, "Removed movie: {}", options.remove_title)?;

    let sorted = registry.list_sorted_by_earnings_desc();
    tracing::debug!("Listing {} movies as {:?}", sorted.len(), options.format);
    writeln!(out, "All movies sorted by box office earnings:")?;
    let report = render_report(&sorted, options.format)?;
    write!(out, "{}", report)?;
    if !report.is_empty() && !report.ends_with('\n') {
        writeln!(out)?;
    }

    Ok(())
}

/// Prompts and blocks until one line (or EOF) arrives on `input`.
pub fn wait_for_enter<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    writeln!(out, "\nPress Enter to exit...")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Exit status for any failed run.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Writes the user-facing message and recovery hint for `error` to `err_out`
/// and returns the process exit code to use.
pub fn report_failure<W: Write>(error: &GuideError, err_out: &mut W) -> i32 {
    tracing::error!("❌ {}", error);
    // stderr may already be gone; the exit code still reports the failure
    let _ = writeln!(err_out, "❌ {}", error.user_friendly_message());
    let _ = writeln!(err_out, "💡 {}", error.recovery_suggestion());
    FAILURE_EXIT_CODE
}
