mod cli;

use crate::cli::Cli;

fn main() {
    // Parse CLI and dispatch; logging is initialized inside once the
    // --logging/--no-logging pair has been resolved.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("tfd error: {:#}", err);
        std::process::exit(1);
    }
}
