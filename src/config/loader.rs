use super::types::Settings;
use crate::io::paths::{BookshelfPaths, SETTINGS_FILE_NAME};
use crate::{LibraryError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Settings discovery and loading
pub struct SettingsLoader {
    /// Directory searched for `bookshelf.yaml` before the user config dir
    search_dir: PathBuf,
    /// Platform config directory, if one could be determined
    user_paths: Option<BookshelfPaths>,
}

impl SettingsLoader {
    /// Create new loader searching the current directory and the platform config dir
    pub fn new() -> Self {
        Self {
            search_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            user_paths: BookshelfPaths::new().ok(),
        }
    }

    /// Search `dir` instead of the current directory
    pub fn with_search_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.search_dir = dir.into();
        self
    }

    /// Use `paths` as the user config location (`None` disables it)
    pub fn with_user_paths(mut self, paths: Option<BookshelfPaths>) -> Self {
        self.user_paths = paths;
        self
    }

    /// Load settings from a specific file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Settings> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LibraryError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        // An empty document means "all defaults"
        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings: Settings = serde_yaml_ng::from_str(&contents).map_err(|e| {
            LibraryError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(settings.normalized())
    }

    /// Resolve settings: explicit path, then the search dir, then the user
    /// config dir, then defaults.
    ///
    /// An explicit path must exist and parse. Discovered files that fail to
    /// load are skipped with a warning.
    pub fn discover(&self, explicit: Option<&Path>) -> Result<Settings> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(LibraryError::Config(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            return self.load_file(path);
        }

        for candidate in self.candidates() {
            if !candidate.exists() {
                continue;
            }
            match self.load_file(&candidate) {
                Ok(settings) => {
                    debug!("Loaded settings from {:?}", candidate);
                    return Ok(settings);
                }
                Err(e) => warn!("Ignoring settings file {:?}: {}", candidate, e),
            }
        }

        debug!("No settings file found, using defaults");
        Ok(Settings::default())
    }

    fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates = vec![self.search_dir.join(SETTINGS_FILE_NAME)];
        if let Some(paths) = &self.user_paths {
            candidates.push(paths.settings_file());
        }
        candidates
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
