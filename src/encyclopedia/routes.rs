//! Named routes.
//!
//! Handlers that point somewhere (a redirect after create) return a [`Route`]
//! rather than a hand-built string. The presentation layer decides whether to
//! turn it into a URL with [`Route::path`] or follow it directly.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "name", rename_all = "snake_case")]
pub enum Route {
    Index,
    Entry(String),
    Edit(String),
    Search(String),
    Add,
    Random,
}

impl Route {
    /// URL path for this route. Entry names and queries are percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Route::Index => "/".to_string(),
            Route::Entry(name) => format!("/wiki/{}", urlencoding::encode(name)),
            Route::Edit(name) => format!("/edit/{}", urlencoding::encode(name)),
            Route::Search(query) => format!("/search?q={}", urlencoding::encode(query)),
            Route::Add => "/add".to_string(),
            Route::Random => "/random".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
