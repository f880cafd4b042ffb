//! Implements the file-contents dump.

use crate::app::ReadArgs;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufReader};

/// Streams the file's bytes to stdout.
///
/// Content is copied in fixed-size chunks independent of line boundaries, so
/// arbitrarily long lines are reproduced exactly as read.
pub fn run(args: &ReadArgs) -> anyhow::Result<()> {
    let file = File::open(&args.file)
        .with_context(|| format!("cannot open file '{}'", args.file.display()))?;

    let mut reader = BufReader::new(file);
    let mut stdout = io::stdout().lock();
    io::copy(&mut reader, &mut stdout)
        .with_context(|| format!("cannot read file '{}'", args.file.display()))?;

    Ok(())
}
