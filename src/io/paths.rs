use crate::{LibraryError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the config directory
pub const SETTINGS_FILE_NAME: &str = "bookshelf.yaml";

/// Path management for bookshelf configuration files
#[derive(Debug, Clone)]
pub struct BookshelfPaths {
    /// Configuration directory
    pub config_dir: PathBuf,
}

impl BookshelfPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "bookshelf").ok_or_else(|| {
            LibraryError::Config("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Create paths rooted at a specific directory
    pub fn for_dir(root: &Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
        }
    }

    /// Settings file inside the config directory
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE_NAME)
    }
}
