use crate::error::{Result, WikiError};
use serde::{Deserialize, Serialize};

/// A named markup document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub content: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Checks that a name can be used as a storage key.
///
/// Names map one-to-one onto file names, so anything that could escape the
/// entries directory is refused.
pub fn check_entry_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(WikiError::InvalidName(name.to_string()));
    }
    Ok(())
}
