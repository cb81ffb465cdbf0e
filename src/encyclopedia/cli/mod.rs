//! # CLI Behavior
//!
//! This is **one possible client** for the encyclopedia. It plays the part a
//! web framework would: arguments become `WikiApi` requests, and the returned
//! `Page` becomes terminal output (or JSON with `--json`).
//!
//! ## Naked Execution (`wiki`)
//!
//! Running `wiki` with no arguments defaults to `wiki list`.
//!
//! ## Content Sources
//!
//! For `add <title>` and `edit <name>`, content comes from, in order:
//!
//! 1. `--content <text>`
//! 2. piped stdin (`cat page.md | wiki add Rust`)
//! 3. `$EDITOR` (pre-filled with the current content for `edit`)
//!
//! `--no-editor` stops at step 2. With nothing to submit, `edit` shows the
//! current content; `add` submits an empty body and gets the form back.
//!
//! ## Exit Codes
//!
//! Error pages (not found, title taken, ...) exit with status 1 after being
//! reported, so scripts can branch on them.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command handlers
//! - `render`: Page formatting for the terminal
//! - `setup`: Argument parsing via clap
//! - `tracing_setup`: Log subscriber on stderr

mod commands;
mod render;
pub mod setup;
mod tracing_setup;

pub use commands::run;
