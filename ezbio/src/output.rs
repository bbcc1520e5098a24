//! Output emission and stderr diagnostics.
//!
//! Stdout carries exactly one thing per invocation: the raw captured
//! profile bytes on success, or a single-line JSON error object on failure.
//! Everything human-facing (verbose notes, the wait spinner) goes to stderr
//! so piped output stays machine-readable.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Writes the captured script output unmodified, plus a trailing newline.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn emit_raw(writer: &mut impl Write, bytes: &[u8]) -> std::io::Result<()> {
    writer.write_all(bytes)?;
    writeln!(writer)?;
    writer.flush()
}

/// Prints a dimmed diagnostic line on stderr.
pub fn verbose_note(msg: &str) {
    eprintln!("{} {}", "[verbose]".dimmed(), msg.dimmed());
}

/// Create and return a spinner shown while waiting on the lookup script.
///
/// In test mode, returns a hidden progress bar to avoid polluting test output.
/// The spinner draws to stderr, so it also disappears when stderr is not a
/// terminal.
#[must_use]
pub fn create_spinner() -> ProgressBar {
    if cfg!(test) {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Looking up profile…");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
