//! # Wiki CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination. Everything the
//! CLI calls into (`encyclopedia::api` and below) is UI agnostic, so a web
//! front end could serve the same handlers.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
