//! # Command Layer
//!
//! This module contains the request handlers. Each lives in its own submodule
//! and is a plain function over a [`DataStore`](crate::store::DataStore) and,
//! where content is displayed, a [`Renderer`](crate::markup::Renderer).
//!
//! ## Structured Returns
//!
//! Handlers return [`Page`], never strings. A `Page` names what should be
//! shown (entry list, one entry, search results, a form, a redirect, or an
//! error code) and carries the data for it. The presentation layer (the CLI
//! here) decides how it looks.
//!
//! Two kinds of failure are kept apart:
//! - **Outcomes** such as "no such entry" or "name taken" are a
//!   `Page::Error { code }`. They are normal results.
//! - **Infrastructure** failures (disk errors) are `Err(WikiError)` and
//!   propagate with `?`. The one exception is `edit`, which turns a failed
//!   save into `ErrorCode::Error`.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and `StoreFixture`, and
//! `MemBackend::set_simulate_write_error` for persistence failures.
//!
//! ## Command Modules
//!
//! - [`list`]: All entry names
//! - [`view`]: One rendered entry
//! - [`search`]: Exact match or substring search over names
//! - [`add`]: Create a new entry
//! - [`edit`]: Replace an entry's content
//! - [`random`]: View a random entry
//! - [`export`]: Bundle every entry into an archive or one document

use crate::forms::Form;
use crate::routes::Route;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub mod add;
pub mod edit;
pub mod export;
pub mod list;
pub mod random;
pub mod search;
pub mod view;

/// Why a request produced an error page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The entry, or anything matching the query, does not exist.
    NotFound,
    /// Creation attempted on a name that is already taken.
    Exist,
    /// Invalid edit submission, or the edit could not be saved.
    Error,
    /// Nothing to pick from.
    EmptyStore,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "not_found",
            ErrorCode::Exist => "exist",
            ErrorCode::Error => "error",
            ErrorCode::EmptyStore => "empty_store",
        }
    }

    /// Human-readable explanation for error pages.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "The requested page was not found.",
            ErrorCode::Exist => "An entry with this title already exists.",
            ErrorCode::Error => "The entry could not be updated.",
            ErrorCode::EmptyStore => "The encyclopedia has no entries yet.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result payload of a handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    /// All entry names, in store order.
    Index { entries: Vec<String> },
    /// One entry with its markup rendered.
    Entry { name: String, content: String },
    SearchResults { query: String, results: Vec<String> },
    NewEntryForm { form: Form },
    EditForm { name: String, form: Form },
    Redirect { location: Route },
    Exported { path: PathBuf, count: usize },
    Error { code: ErrorCode },
}

impl Page {
    pub fn error(code: ErrorCode) -> Self {
        Page::Error { code }
    }

    pub fn not_found() -> Self {
        Page::error(ErrorCode::NotFound)
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Page::Error { code } => Some(*code),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error_code().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_serialize_snake_case() {
        let json = serde_json::to_string(&Page::error(ErrorCode::EmptyStore)).unwrap();
        assert_eq!(json, r#"{"kind":"error","code":"empty_store"}"#);
        for code in [
            ErrorCode::NotFound,
            ErrorCode::Exist,
            ErrorCode::Error,
            ErrorCode::EmptyStore,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn entry_page_serializes_with_kind() {
        let page = Page::Entry {
            name: "Git".into(),
            content: "<p>x</p>".into(),
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["kind"], "entry");
        assert_eq!(value["name"], "Git");
    }

    #[test]
    fn error_code_accessor() {
        assert_eq!(Page::not_found().error_code(), Some(ErrorCode::NotFound));
        assert!(!Page::Index { entries: vec![] }.is_error());
    }
}
