use send2playlist_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log file under XDG state; fall back to stderr rather than refusing to run.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("send2playlist error: {:#}", err);
        std::process::exit(1);
    }
}
