//! peek: A color-coded directory inspector for terminals.
//!
//! This is the main entry point for the peek application. It handles parsing
//! command-line arguments and dispatching to the appropriate command handler.

// Declare the modules that make up the application.
mod app;
mod category;
mod group;
mod list;
mod read;
mod times;
mod tree;

use app::{Args, Commands};
use clap::Parser;
#[cfg(windows)]
use colored::control;

/// The main function and entry point of the application.
///
/// It parses command-line arguments and executes the corresponding command.
/// If no subcommand is given, it defaults to the plain listing.
///
/// # Returns
///
/// * `Ok(())` on successful execution.
/// * `Err(anyhow::Error)` if any error occurs during execution.
fn main() -> anyhow::Result<()> {
    // On Windows, explicitly try to enable ANSI support.
    // This may fail on older versions of Windows, but we ignore the error
    // and let the `colored` crate handle it gracefully.
    #[cfg(windows)]
    let _ = control::set_virtual_terminal(true);

    // Parse the command-line arguments into our Args struct.
    let args = Args::parse();

    // Check if a subcommand was passed. If not, default to the plain listing.
    match &args.command {
        Some(Commands::Tree(tree_args)) => tree::run(tree_args),
        Some(Commands::Times(times_args)) => times::run(times_args),
        Some(Commands::Group(group_args)) => group::run(group_args),
        Some(Commands::Read(read_args)) => read::run(read_args),
        None => list::run(&args.list),
    }
}
