use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{NotesError, Result};

/// Environment variable overriding the notes file location.
pub const NOTES_FILE_ENV: &str = "NOTETAKER_FILE";

/// Last-resort notes file when no platform data directory is known.
pub const FALLBACK_NOTES_FILE: &str = "/tmp/notes.yaml";

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// File where notes are stored
    #[serde(default)]
    pub notes_file: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration from `path`, or from the platform config directory.
    ///
    /// A missing file gives the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_file() {
                Some(path) => path,
                None => {
                    debug!("No platform config directory, using default configuration");
                    return Ok(Config::default());
                }
            },
        };

        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Config::default());
        }

        info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| NotesError::ConfigError {
            message: format!("{}: {}", path.display(), e),
        })
    }

    // Explicit override, then environment, then this config, then platform defaults
    pub fn get_notes_file(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        if let Some(path) = std::env::var_os(NOTES_FILE_ENV).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }

        if let Some(path) = &self.notes_file {
            return path.clone();
        }

        project_dirs()
            .map(|dirs| dirs.data_dir().join("notes.yaml"))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_NOTES_FILE))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "notetaker")
}

fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}
