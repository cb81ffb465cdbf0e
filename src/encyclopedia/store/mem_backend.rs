use super::backend::StorageBackend;
use crate::error::{Result, WikiError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since handlers run one request at
/// a time. This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn list_names(&self) -> Result<Vec<String>> {
        Ok(self.content.borrow().keys().cloned().collect())
    }

    fn read_content(&self, name: &str) -> Result<Option<String>> {
        Ok(self.content.borrow().get(name).cloned())
    }

    fn write_content(&self, name: &str, text: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(WikiError::Store("Simulated write error".to_string()));
        }
        self.content
            .borrow_mut()
            .insert(name.to_string(), text.to_string());
        Ok(())
    }
}
