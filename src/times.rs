//! Implements the modification-timestamp listing.

use crate::app::PathArgs;
use chrono::{DateTime, Local};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::time::SystemTime;

/// Column width reserved for the entry name.
const NAME_WIDTH: usize = 30;

/// Formats a modification time as local wall-clock time.
fn format_mtime(mtime: SystemTime) -> String {
    DateTime::<Local>::from(mtime).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Executes the timestamp listing.
///
/// A metadata failure on one entry is reported and the remaining entries are
/// still listed.
pub fn run(args: &PathArgs) -> anyhow::Result<()> {
    if !args.path.is_dir() {
        anyhow::bail!("'{}' is not a directory.", args.path.display());
    }

    if writeln!(
        io::stdout(),
        "\n{}\n{}",
        "Files with Timestamps:".bold(),
        "-".repeat(30).bright_black()
    )
    .is_err()
    {
        return Ok(());
    }

    for entry in fs::read_dir(&args.path)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("peek: ERROR: {err}");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let modified = match entry.metadata().and_then(|md| md.modified()) {
            Ok(mtime) => mtime,
            Err(err) => {
                eprintln!("peek: ERROR: {name}: {err}");
                continue;
            }
        };

        let stamp = format!("Modified: {}", format_mtime(modified));
        if writeln!(io::stdout(), "{:<width$} {}", name, stamp.bright_black(), width = NAME_WIDTH)
            .is_err()
        {
            break;
        }
    }

    Ok(())
}
