//! Application configuration management.
//!
//! This module handles loading and saving application-wide configuration
//! settings, such as the preferred output format and I/O thread count.
//! CLI flags always override configuration values.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::OutputFormat;

fn default_io_threads() -> usize {
    4
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of I/O threads for parallel file reading.
    #[serde(default = "default_io_threads")]
    pub io_threads: usize,

    /// Preferred output format when `--output` is not given.
    #[serde(default)]
    pub output: OutputFormat,

    /// Skip hidden files and directories by default.
    #[serde(default)]
    pub skip_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            io_threads: default_io_threads(),
            output: OutputFormat::default(),
            skip_hidden: false,
        }
    }
}

impl Config {
    /// Load the configuration from the default platform-specific path.
    pub fn load() -> Self {
        match Self::load_internal() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    fn load_internal() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save the configuration to the default platform-specific path.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default platform-specific configuration path.
    fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "dupesieve", "dupesieve")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine project directories"))?;
        Ok(project_dirs.config_dir().join("config.json"))
    }
}
