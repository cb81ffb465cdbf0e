//! # Encyclopedia Architecture
//!
//! A small wiki: named Markdown entries kept as files, listed, viewed,
//! searched, created and edited through a handful of request handlers. It is
//! a library that happens to have a CLI client; a web front end would sit on
//! the same [`api::WikiApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints pages, launches $EDITOR         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One method per request: list/view/search/add/edit/random │
//! │  - Owns the store and the renderer                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - The handlers; return a `Page` payload                    │
//! │  - No I/O assumptions beyond the store                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `DataStore` over a `StorageBackend` (files or memory)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes vs Failures
//!
//! "Not found", "title taken" and friends are ordinary [`commands::Page::Error`]
//! values carrying an [`commands::ErrorCode`]. `Err(WikiError)` is reserved
//! for I/O and configuration problems.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One handler per request, plus the `Page` payload
//! - [`store`]: Storage abstraction and implementations
//! - [`forms`]: Form inputs and their validation
//! - [`markup`]: Markdown to HTML
//! - [`routes`]: Named routes for redirects
//! - [`config`]: Layered configuration
//! - [`editor`]: External editor integration
//! - [`model`]: `Entry` and entry-name rules
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod forms;
pub mod markup;
pub mod model;
pub mod routes;
pub mod store;
