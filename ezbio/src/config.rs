//! Configuration loading.
//!
//! Settings live in a `.ezbio.toml` found by walking up from the working
//! directory. Everything is optional; a missing, unreadable, or malformed
//! file silently falls back to the built-in defaults. Command-line flags
//! take precedence over the file.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILENAME;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for ezbio.
    pub ezbio: EzBioConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for ezbio.
pub struct EzBioConfig {
    /// Interpreter executable, overriding the platform default.
    pub interpreter: Option<String>,
    /// Lookup script location, relative to the working directory.
    pub script: Option<PathBuf>,
    /// Apply username normalization without the `--normalize` flag.
    pub normalize: Option<bool>,
}

impl Config {
    /// Loads configuration starting from the current working directory.
    #[must_use]
    pub fn load() -> Self {
        let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::load_from_path(&start)
    }

    /// Loads configuration starting from a specific path and traversing up.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
                // Unreadable or malformed file: use defaults
                return Self::default();
            }
            if !current.pop() {
                break;
            }
        }

        Self::default()
    }
}
