//! Defines the command-line interface for the peek application.

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// A color-coded directory inspector for terminals.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(override_usage = "peek [OPTIONS] [PATH]\n    peek <COMMAND> [PATH]")]
pub struct Args {
    /// The subcommand to run. If no subcommand is specified, the plain listing is displayed.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// The arguments for the plain listing. These are used when no subcommand is provided.
    #[command(flatten)]
    pub list: ListArgs,
}

/// Defines the available subcommands for the application.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the recursive directory tree.
    #[command(visible_alias = "tr")]
    Tree(PathArgs),
    /// List entries with their modification timestamps.
    #[command(visible_alias = "t")]
    Times(PathArgs),
    /// List files grouped by category (Code, Audio, Video, Document, Image, Other).
    #[command(visible_alias = "g")]
    Group(PathArgs),
    /// Print the contents of a file.
    #[command(visible_alias = "r")]
    Read(ReadArgs),
}

/// Arguments for the plain listing, shown when no subcommand is given.
#[derive(Parser, Debug, Default)]
pub struct ListArgs {
    /// The path to the directory to list. Defaults to the current directory.
    #[arg(default_value = ".")]
    pub path: PathBuf,
    /// Specify when to use colorized output.
    #[arg(long, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
    /// Show all entries, including hidden ones.
    #[arg(short = 'a', long, help = "Show all entries, including hidden ones")]
    pub all: bool,
    /// Display files only.
    #[arg(short = 'f', long)]
    pub files_only: bool,
    /// Display directories only.
    #[arg(short = 'd', long)]
    pub dirs_only: bool,
    /// Only show entries whose extension matches exactly (case-sensitive).
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,
}

/// Arguments shared by the directory-reading subcommands.
#[derive(Parser, Debug)]
pub struct PathArgs {
    /// The path to the directory to inspect. Defaults to the current directory.
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// Arguments for the `read` command.
#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// The file to print.
    pub file: PathBuf,
}

/// Defines the choices for the --color option.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ColorChoice {
    Always,
    #[default]
    Auto,
    Never,
}

/// Implements the Display trait for ColorChoice to show possible values in help messages.
impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_possible_value().expect("no values are skipped").get_name().fmt(f)
    }
}
