//! # Storage Layer
//!
//! This module defines the storage abstraction for the encyclopedia. The
//! [`DataStore`] trait is the only thing handlers know about, so the same
//! handlers run against a directory of Markdown files or an in-memory map.
//!
//! ## Two Traits
//!
//! - [`DataStore`]: the document store handlers talk to (list/get/save by name).
//! - [`backend::StorageBackend`]: raw I/O (list names, read, write).
//!
//! [`entry_store::EntryStore`] glues them together and owns the rules that do
//! not depend on the medium:
//! - listing order is sorted by name
//! - names that cannot be storage keys are refused on write and treated as
//!   absent on read
//! - lookups are case-sensitive, even on case-insensitive filesystems
//!
//! ## No Cache, No Locks
//!
//! Every call goes to the backend, so each request sees persisted state.
//! Nothing coordinates writers: two processes saving the same name race and
//! the last rename wins. Individual writes are atomic (tmp file + rename), so
//! a reader never sees a half-written entry.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: entries as `<dir>/<name>.md` files.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! entries/
//! ├── CSS.md
//! ├── Git.md
//! └── Python.md
//! ```

use crate::error::Result;

pub mod backend;
pub mod entry_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for entry storage.
pub trait DataStore {
    /// All entry names, sorted. Also the candidate set for search and random.
    fn list_entries(&self) -> Result<Vec<String>>;

    /// Exact, case-sensitive lookup. `Ok(None)` when no entry has that name.
    fn get_entry(&self, name: &str) -> Result<Option<String>>;

    /// Save an entry (create or overwrite)
    fn save_entry(&mut self, name: &str, content: &str) -> Result<()>;
}
