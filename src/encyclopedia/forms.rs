//! Form inputs and their validation.
//!
//! Two forms exist: "new entry" (title + content) and "edit content"
//! (content only). Each is validated by a plain function returning either
//! the cleaned value or every field error found, before anything touches
//! the store.
//!
//! Rules:
//! - Surrounding whitespace is trimmed; the trimmed value is what gets saved
//! - Lengths are counted in characters, not bytes
//! - Title: 1–60 characters, usable as a storage key
//! - Content: 1–5000 characters

use crate::model::check_entry_name;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TITLE_MAX_CHARS: usize = 60;
pub const CONTENT_MAX_CHARS: usize = 5000;

/// Raw "new entry" submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntryInput {
    pub title: String,
    pub content: String,
}

impl NewEntryInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Raw "edit content" submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditEntryInput {
    pub content: String,
}

impl EditEntryInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A validated "new entry" submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} exceeds maximum length of {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} cannot contain '/', '\\' or NUL, or be '.' or '..'")]
    InvalidName { field: &'static str },
}

/// Every field error from one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors(pub Vec<FieldError>);

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FormErrors {}

fn clean_text(
    field: &'static str,
    raw: &str,
    max: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = raw.trim();
    let len = value.chars().count();
    if len == 0 {
        errors.push(FieldError::Required { field });
        return None;
    }
    if len > max {
        errors.push(FieldError::TooLong {
            field,
            max,
            actual: len,
        });
        return None;
    }
    Some(value.to_string())
}

/// Validates a "new entry" submission.
///
/// # Examples
/// ```
/// use encyclopedia::forms::{validate_new_entry, NewEntryInput};
///
/// let ok = validate_new_entry(&NewEntryInput::new(" Rust ", "# Rust")).unwrap();
/// assert_eq!(ok.title, "Rust");
///
/// assert!(validate_new_entry(&NewEntryInput::new("", "# Rust")).is_err());
/// ```
pub fn validate_new_entry(input: &NewEntryInput) -> Result<NewEntry, FormErrors> {
    let mut errors = Vec::new();

    let title = clean_text("title", &input.title, TITLE_MAX_CHARS, &mut errors);
    if let Some(t) = &title {
        if check_entry_name(t).is_err() {
            errors.push(FieldError::InvalidName { field: "title" });
        }
    }
    let content = clean_text("content", &input.content, CONTENT_MAX_CHARS, &mut errors);

    match (title, content) {
        (Some(title), Some(content)) if errors.is_empty() => Ok(NewEntry { title, content }),
        _ => Err(FormErrors(errors)),
    }
}

/// Validates an "edit content" submission, returning the cleaned content.
pub fn validate_edit(input: &EditEntryInput) -> Result<String, FormErrors> {
    let mut errors = Vec::new();
    clean_text("content", &input.content, CONTENT_MAX_CHARS, &mut errors)
        .ok_or(FormErrors(errors))
}

/// One field of a form, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub max_length: usize,
    pub multiline: bool,
    pub value: String,
}

/// A form ready to display, possibly pre-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Form {
    pub fields: Vec<FormField>,
}

impl Form {
    /// Blank "new entry" form.
    pub fn new_entry() -> Self {
        Self {
            fields: vec![
                FormField {
                    name: "title",
                    label: "New Page Title",
                    max_length: TITLE_MAX_CHARS,
                    multiline: false,
                    value: String::new(),
                },
                content_field(String::new()),
            ],
        }
    }

    /// "Edit content" form pre-filled with the current markup.
    pub fn edit_entry(initial: impl Into<String>) -> Self {
        Self {
            fields: vec![content_field(initial.into())],
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

fn content_field(value: String) -> FormField {
    FormField {
        name: "content",
        label: "Markdown Content",
        max_length: CONTENT_MAX_CHARS,
        multiline: true,
        value,
    }
}
