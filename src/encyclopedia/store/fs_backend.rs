use super::backend::StorageBackend;
use crate::error::{Result, WikiError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_FILE_EXT: &str = ".md";

const CASE_INSENSITIVE_FS: bool = cfg!(any(target_os = "macos", target_os = "windows"));

/// Stores each entry as `<entries_dir>/<name><ext>`.
pub struct FsBackend {
    root: PathBuf,
    file_ext: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: DEFAULT_FILE_EXT.to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    fn entry_filename(&self, name: &str) -> String {
        format!("{}{}", name, self.file_ext)
    }

    /// Whether the directory holds a file named exactly `filename`.
    fn has_exact_file(&self, filename: &str) -> Result<bool> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(WikiError::Io(e)),
        };
        for entry in entries {
            let entry = entry.map_err(WikiError::Io)?;
            if entry.file_name().to_str() == Some(filename) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(WikiError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn list_names(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        let entries = fs::read_dir(&self.root).map_err(WikiError::Io)?;

        for entry in entries {
            let entry = entry.map_err(WikiError::Io)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|s| s.to_str()) {
                // Skip in-flight temp files from concurrent writers
                if file_name.starts_with(".wiki-") && file_name.ends_with(".tmp") {
                    continue;
                }
                if let Some(name) = file_name.strip_suffix(self.file_ext.as_str()) {
                    if !name.is_empty() {
                        names.push(name.to_string());
                    }
                }
            }
        }
        debug!(dir = %self.root.display(), count = names.len(), "scanned entries dir");
        Ok(names)
    }

    fn read_content(&self, name: &str) -> Result<Option<String>> {
        let filename = self.entry_filename(name);
        // Case-insensitive filesystems would open `Python.md` for "python"
        if CASE_INSENSITIVE_FS && !self.has_exact_file(&filename)? {
            return Ok(None);
        }
        let path = self.root.join(filename);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WikiError::Io(e)),
        }
    }

    fn write_content(&self, name: &str, content: &str) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let target_path = self.root.join(self.entry_filename(name));

        // Atomic Write
        let tmp_path = self.root.join(format!(".wiki-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(WikiError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &target_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(WikiError::Io(e));
        }

        Ok(())
    }
}
