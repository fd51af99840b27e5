// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use loc_lens::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Remember the last language and screen
//! config.language = Some("fr".to_string());
//! config.context = Some("LocLens.Resources.Login.Strings".to_string());
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{DEFAULT_CONTEXT, DEFAULT_CULTURE, RESOURCE_PREFIX};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Preferred culture tag, e.g. `de-DE`.
    pub language: Option<String>,
    /// Bundle name to open on startup.
    #[serde(default)]
    pub context: Option<String>,
    /// Load bundles from this directory instead of the embedded resources.
    #[serde(default)]
    pub resources_dir: Option<PathBuf>,
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
