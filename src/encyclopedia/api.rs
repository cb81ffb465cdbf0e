//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: one method per
//! request a routing layer can make. It owns the store and the renderer so
//! callers never thread them through by hand.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`WikiApi::list`] | index page |
//! | [`WikiApi::view`] | `/wiki/<name>` |
//! | [`WikiApi::search`] | `/search?q=` |
//! | [`WikiApi::add`] | `/add` (GET without a submission, POST with one) |
//! | [`WikiApi::edit`] | `/edit/<name>` (same) |
//! | [`WikiApi::random`] | `/random` |
//!
//! ## Generic Over DataStore
//!
//! - Production: `WikiApi<FileStore>`
//! - Testing: `WikiApi<InMemoryStore>`

use crate::commands::{self, Page};
use crate::error::Result;
use crate::forms::{EditEntryInput, NewEntryInput};
use crate::markup::{MarkdownRenderer, Renderer};
use crate::store::DataStore;
use std::path::Path;

pub use crate::commands::export::ExportFormat;
pub use crate::commands::ErrorCode;

/// The main API facade for encyclopedia operations.
pub struct WikiApi<S: DataStore, R: Renderer = MarkdownRenderer> {
    store: S,
    renderer: R,
}

impl<S: DataStore> WikiApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_renderer(store, MarkdownRenderer)
    }
}

impl<S: DataStore, R: Renderer> WikiApi<S, R> {
    pub fn with_renderer(store: S, renderer: R) -> Self {
        Self { store, renderer }
    }

    pub fn list(&self) -> Result<Page> {
        commands::list::run(&self.store)
    }

    pub fn view(&self, name: &str) -> Result<Page> {
        commands::view::run(&self.store, &self.renderer, name)
    }

    pub fn search(&self, query: Option<&str>) -> Result<Page> {
        commands::search::run(&self.store, &self.renderer, query)
    }

    pub fn add(&mut self, submission: Option<&NewEntryInput>) -> Result<Page> {
        commands::add::run(&mut self.store, submission)
    }

    pub fn edit(&mut self, name: &str, submission: Option<&EditEntryInput>) -> Result<Page> {
        commands::edit::run(&mut self.store, &self.renderer, name, submission)
    }

    pub fn random(&self) -> Result<Page> {
        commands::random::run(&self.store, &self.renderer)
    }

    pub fn export(&self, output: &Path, format: ExportFormat) -> Result<Page> {
        commands::export::run(&self.store, output, format)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
