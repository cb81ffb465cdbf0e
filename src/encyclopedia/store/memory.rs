use super::entry_store::EntryStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = EntryStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        EntryStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Entry;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_entry(mut self, name: &str, content: &str) -> Self {
            self.store.save_entry(name, content).unwrap();
            self
        }

        pub fn with_entries(mut self, entries: &[Entry]) -> Self {
            for entry in entries {
                self.store.save_entry(&entry.name, &entry.content).unwrap();
            }
            self
        }

        /// Store with a handful of entries named after programming topics.
        pub fn with_sample_entries(self) -> Self {
            self.with_entries(&[
                Entry::new("CSS", "# CSS\nStyle sheets."),
                Entry::new("Django", "# Django\nA web framework."),
                Entry::new("Git", "# Git\nVersion control."),
                Entry::new("HTML", "# HTML\nMarkup language."),
                Entry::new("Python", "# Python\nA language."),
            ])
        }

        pub fn failing_writes(self) -> Self {
            self.store.backend().set_simulate_write_error(true);
            self
        }
    }
}
