//! `send2playlist man` – roff man page on stdout.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io;

use crate::cli::Cli;

pub fn run_man() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(&mut io::stdout())
        .context("failed to render man page")?;
    Ok(())
}
