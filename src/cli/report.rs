//! Report formatting and printing utilities.
//!
//! Separate from core logic so the library can be used without the CLI.
//! Every printer has a `_to` variant taking a writer, used by tests.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::interceptor::{LocalizeSummary, UnresolvedMarker};
use crate::locale::Locale;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

/// Print unresolved markers of one file in cargo-style format.
pub fn print_unresolved(path: &Path, markers: &[UnresolvedMarker]) {
    print_unresolved_to(path, markers, &mut io::stdout().lock());
}

pub fn print_unresolved_to<W: Write>(path: &Path, markers: &[UnresolvedMarker], writer: &mut W) {
    for marker in markers {
        let _ = writeln!(
            writer,
            "{}: \"{}\"  {}",
            "error".bold().red(),
            marker.key,
            "unresolved-key".dimmed().cyan()
        );
        let _ = writeln!(
            writer,
            "  {} {}: {}",
            "-->".blue(),
            path.display(),
            marker.location
        );
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "field:".bold(), marker.kind);
        let _ = writeln!(writer);
    }
}

/// Print the closing line of a `check` run.
pub fn print_check_summary(unresolved: usize, files: usize, locale: &Locale) {
    print_check_summary_to(unresolved, files, locale, &mut io::stdout().lock());
}

pub fn print_check_summary_to<W: Write>(
    unresolved: usize,
    files: usize,
    locale: &Locale,
    writer: &mut W,
) {
    let files = plural(files, "file", "files");
    let msg = if unresolved == 0 {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} ({}) - all markers resolved", files, locale).green()
        )
    } else {
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} in {} ({})",
                plural(unresolved, "unresolved marker", "unresolved markers"),
                files,
                locale
            )
            .red()
        )
    };
    let _ = writeln!(writer, "{}", msg);
}

/// Print the per-file line of a `localize` run.
pub fn print_localized_file_to<W: Write>(
    path: &Path,
    summary: &LocalizeSummary,
    written_to: Option<&Path>,
    writer: &mut W,
) {
    let target = match written_to {
        Some(target) => format!(" -> {}", target.display()),
        None => String::new(),
    };
    let _ = writeln!(
        writer,
        "  {}: {} rewritten of {}{}",
        path.display(),
        summary.rewritten,
        plural(summary.visited, "field", "fields"),
        target
    );
}

/// Print the closing line of a `localize` run.
pub fn print_localize_summary_to<W: Write>(
    files: usize,
    rewritten: usize,
    locale: &Locale,
    dry_run: bool,
    writer: &mut W,
) {
    let verb = if dry_run { "Would localize" } else { "Localized" };
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} {} ({}), {} rewritten",
            verb,
            plural(files, "file", "files"),
            locale,
            plural(rewritten, "field", "fields")
        )
        .green()
    );
    if dry_run {
        let _ = writeln!(
            writer,
            "{} run with {} or {} to write the result",
            "note:".bold(),
            "--apply".cyan(),
            "--out-dir".cyan()
        );
    }
}

/// Print a per-file failure to stderr.
pub fn print_file_error(path: &Path, error: &anyhow::Error) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}: {:#}",
        "error:".bold().red(),
        path.display(),
        error
    );
}
