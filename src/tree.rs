//! Implements the recursive directory tree view.

use crate::app::PathArgs;
use colored::Colorize;
use ignore::WalkBuilder;
use std::io::{self, Write};

/// Spaces of indentation per tree level.
const INDENT: usize = 4;

/// Executes the recursive tree view.
///
/// Every entry under the root is shown, hidden ones included. Symbolic links
/// are not followed, so the walk cannot cycle.
pub fn run(args: &PathArgs) -> anyhow::Result<()> {
    if !args.path.is_dir() {
        anyhow::bail!("'{}' is not a directory.", args.path.display());
    }

    if writeln!(
        io::stdout(),
        "\n{}\n{}",
        "Directory Tree:".bold(),
        "-".repeat(30).bright_black()
    )
    .is_err()
    {
        return Ok(());
    }

    let mut builder = WalkBuilder::new(&args.path);
    builder.standard_filters(false);

    for result in builder.build() {
        let entry = match result {
            Ok(entry) => {
                if entry.depth() == 0 {
                    continue; // Skip the root directory
                }
                entry
            }
            Err(err) => {
                eprintln!("peek: ERROR: {err}");
                continue;
            }
        };

        let indent = " ".repeat((entry.depth() - 1) * INDENT);
        let name = entry.file_name().to_string_lossy();

        if writeln!(io::stdout(), "{indent}|-- {name}").is_err() {
            break;
        }
    }

    Ok(())
}
