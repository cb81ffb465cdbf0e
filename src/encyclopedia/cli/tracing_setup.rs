//! Tracing setup for the wiki CLI.
//!
//! Logs go to stderr so stdout only ever carries pages.
//!
//!   wiki -v ...                  # Debug logging
//!   RUST_LOG=encyclopedia=info   # Fine-grained log control

use encyclopedia::error::{Result, WikiError};
use tracing_subscriber::EnvFilter;

pub fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .try_init()
        .map_err(|err| WikiError::Api(format!("Failed to initialize logging: {}", err)))
}
