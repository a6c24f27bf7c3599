//! CLI for send2playlist.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_add, run_completions, run_man, run_title};

/// Top-level CLI for send2playlist.
#[derive(Debug, Parser)]
#[command(name = "send2playlist")]
#[command(about = "Append \"title - url\" lines for video links to a playlist file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the title of each URL and append it to the playlist.
    Add {
        /// Video page URLs, processed in order.
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,

        /// Playlist file to append to (default: ~/.local/share/playlist).
        #[arg(short, long, value_name = "PATH")]
        playlist: Option<PathBuf>,
    },

    /// Print the cleaned title of a single URL (e.g. for newsboat scripts).
    Title {
        /// Video page URL.
        url: String,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Add { urls, playlist } => run_add(&urls, playlist)?,
            CliCommand::Title { url } => run_title(&url)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
