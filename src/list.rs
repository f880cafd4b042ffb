//! Implements the plain, non-recursive directory listing.

use crate::app::{ColorChoice, ListArgs};
use crate::category;
use colored::{control, Colorize};
use std::fs;
use std::io::{self, Write};

/// Executes the plain listing with the configured filters.
///
/// Only the immediate children of the path are shown, in whatever order the
/// OS yields them. Directories are marked with a trailing `/`.
pub fn run(args: &ListArgs) -> anyhow::Result<()> {
    if !args.path.is_dir() {
        anyhow::bail!("'{}' is not a directory.", args.path.display());
    }

    match args.color {
        ColorChoice::Always => control::set_override(true),
        ColorChoice::Never => control::set_override(false),
        ColorChoice::Auto => {}
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
        if !args.all && name.starts_with('.') {
            continue;
        }

        // Follows symlinks, so a link to a directory lists as a directory.
        let is_dir = entry.path().is_dir();
        if (args.dirs_only && !is_dir) || (args.files_only && is_dir) {
            continue;
        }

        if let Some(ext) = &args.ext {
            if category::extension(&name) != ext {
                continue;
            }
        }

        let line = if is_dir {
            format!("{name}/").blue().bold()
        } else {
            name.bold()
        };

        if writeln!(io::stdout(), "{line}").is_err() {
            break;
        }
    }

    Ok(())
}
