//! Implements the grouped-by-category listing.

use crate::app::PathArgs;
use crate::category::Category;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};

/// Executes the grouped listing.
///
/// The directory is read exactly once into a buffer of (name, category)
/// pairs; the per-category passes below walk that buffer, never the
/// filesystem again. Every category header is printed, empty or not, and
/// entries keep their enumeration order within a group.
pub fn run(args: &PathArgs) -> anyhow::Result<()> {
    if !args.path.is_dir() {
        anyhow::bail!("'{}' is not a directory.", args.path.display());
    }

    if writeln!(
        io::stdout(),
        "\n{}\n{}",
        "Grouped File Listing:".bold(),
        "-".repeat(30).bright_black()
    )
    .is_err()
    {
        return Ok(());
    }

    let mut entries: Vec<(String, Category)> = Vec::new();
    for entry in fs::read_dir(&args.path)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("peek: ERROR: {err}");
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        let group = Category::classify(&name);
        entries.push((name, group));
    }

    for group in Category::ALL {
        if writeln!(
            io::stdout(),
            "\n{}\n{}",
            format!("{} FILES", group.name()).bold(),
            "=".repeat(36).bright_black()
        )
        .is_err()
        {
            return Ok(());
        }

        for (name, category) in &entries {
            if *category != group {
                continue;
            }
            if writeln!(io::stdout(), "   {}", format!("- {name}").color(group.color())).is_err() {
                return Ok(());
            }
        }
    }

    Ok(())
}
