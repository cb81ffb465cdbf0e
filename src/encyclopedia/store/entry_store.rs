use super::backend::StorageBackend;
use super::DataStore;
use crate::error::Result;
use crate::model::check_entry_name;
use tracing::{debug, info};

pub struct EntryStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> EntryStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: StorageBackend> DataStore for EntryStore<B> {
    fn list_entries(&self) -> Result<Vec<String>> {
        let mut names = self.backend.list_names()?;
        names.sort();
        Ok(names)
    }

    fn get_entry(&self, name: &str) -> Result<Option<String>> {
        // A name that can't be stored can't exist either
        if check_entry_name(name).is_err() {
            debug!(name, "lookup with unstorable name");
            return Ok(None);
        }
        let content = self.backend.read_content(name)?;
        debug!(name, found = content.is_some(), "entry lookup");
        Ok(content)
    }

    fn save_entry(&mut self, name: &str, content: &str) -> Result<()> {
        check_entry_name(name)?;
        self.backend.write_content(name, content)?;
        info!(name, bytes = content.len(), "entry saved");
        Ok(())
    }
}
