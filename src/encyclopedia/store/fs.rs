use super::entry_store::EntryStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

pub type FileStore = EntryStore<FsBackend>;

impl FileStore {
    pub fn new(entries_dir: PathBuf) -> Self {
        EntryStore::with_backend(FsBackend::new(entries_dir))
    }

    pub fn with_file_ext(self, ext: &str) -> Self {
        EntryStore::with_backend(self.backend.with_file_ext(ext))
    }
}
