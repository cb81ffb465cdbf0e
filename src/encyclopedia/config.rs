//! # Configuration
//!
//! Configuration is managed by [`confique`], which handles layered loading
//! from TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Command line**: `--dir` replaces `entries_dir` (applied by the CLI).
//! 2. **Environment variables**: `WIKI_ENTRIES_DIR`, `WIKI_FILE_EXT`.
//! 3. **Project Config**: `./wiki.toml` in the working directory.
//! 4. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 5. **Compiled Defaults**: `entries_dir = "entries"`, `file_ext = ".md"`.
//!
//! A relative `entries_dir` is resolved against the working directory.

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "wiki.toml";

/// Configuration for the encyclopedia, stored in `wiki.toml`.
#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WikiConfig {
    /// Directory holding one file per entry
    #[config(env = "WIKI_ENTRIES_DIR", default = "entries")]
    pub entries_dir: PathBuf,

    /// Extension of entry files (e.g. ".md", ".txt")
    #[config(env = "WIKI_FILE_EXT", default = ".md")]
    pub file_ext: String,
}

impl WikiConfig {
    /// Load using the project file in `project_dir` and the user's global file.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let mut files = vec![project_dir.join(CONFIG_FILENAME)];
        if let Some(global) = global_config_path() {
            files.push(global);
        }
        Self::load_from_files(&files)
    }

    /// Load from env, then each file in priority order. Missing files are skipped.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    /// Get the file extension, normalized to start with a dot.
    pub fn file_ext(&self) -> String {
        if self.file_ext.starts_with('.') {
            self.file_ext.clone()
        } else {
            format!(".{}", self.file_ext)
        }
    }

    /// Entries directory, resolved against `base` when relative.
    pub fn entries_dir_in(&self, base: &Path) -> PathBuf {
        if self.entries_dir.is_absolute() {
            self.entries_dir.clone()
        } else {
            base.join(&self.entries_dir)
        }
    }
}

pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "encyclopedia").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // Compiled defaults only, ignoring env and files
    fn defaults() -> WikiConfig {
        WikiConfig::builder().load().unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = defaults();
        assert_eq!(config.entries_dir, PathBuf::from("entries"));
        assert_eq!(config.file_ext(), ".md");
    }

    #[test]
    fn test_file_ext_normalization_without_dot() {
        let config = WikiConfig {
            file_ext: "txt".to_string(),
            ..defaults()
        };
        assert_eq!(config.file_ext(), ".txt");
    }

    #[test]
    fn test_entries_dir_resolution() {
        let config = defaults();
        assert_eq!(
            config.entries_dir_in(Path::new("/srv/wiki")),
            PathBuf::from("/srv/wiki/entries")
        );

        let absolute = WikiConfig {
            entries_dir: PathBuf::from("/data/pages"),
            ..defaults()
        };
        assert_eq!(
            absolute.entries_dir_in(Path::new("/srv/wiki")),
            PathBuf::from("/data/pages")
        );
    }

    #[test]
    fn test_project_file_overrides_later_files() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("project.toml");
        let global = dir.path().join("global.toml");
        fs::write(&project, "entries_dir = \"pages\"\n").unwrap();
        fs::write(&global, "entries_dir = \"ignored\"\nfile_ext = \"txt\"\n").unwrap();

        let config = WikiConfig::load_from_files(&[project, global]).unwrap();
        assert_eq!(config.entries_dir, PathBuf::from("pages"));
        assert_eq!(config.file_ext(), ".txt");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("wiki.toml");
        fs::write(&project, "entries_dir = [").unwrap();
        assert!(WikiConfig::load_from_files(&[project]).is_err());
    }
}
