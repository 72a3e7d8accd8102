//! Configuration management for stamp.
//!
//! Two layers: persisted defaults loaded from a TOML file (created on first
//! run), and the immutable [`RunConfig`] assembled once per invocation from
//! CLI arguments, interactive prompts, and those defaults. The run
//! configuration is passed by reference into each component; nothing reads
//! it from a global.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// One mebibyte, the unit the buffer-size prompt is denominated in.
pub const MEBIBYTE: u64 = 1024 * 1024;

/// Persisted defaults for settings that rarely change between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub copy: CopySettings,
    pub ui: UiSettings,
}

/// Copy behavior defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopySettings {
    /// Copy buffer size in mebibytes, used when the prompt is left empty
    /// or unparseable
    pub buffer_size_mib: u64,
    /// Propagate source access/modification times onto copied files
    pub preserve_times: bool,
}

/// User interface defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Theme name: "default", "cyan", "magenta", "yellow", "green", "red",
    /// "blue", "white"
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            copy: CopySettings {
                buffer_size_mib: 1,
                preserve_times: true,
            },
            ui: UiSettings {
                theme: "default".to_string(),
            },
        }
    }
}

impl Settings {
    /// Returns the configuration directory path.
    ///
    /// Typically `~/.config/stamp` on Unix systems or
    /// `%USERPROFILE%/.config/stamp` on Windows.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn get_config_dir() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| color_eyre::eyre::eyre!("Could not determine home directory"))?;

        Ok(PathBuf::from(home).join(".config").join("stamp"))
    }

    /// Returns the configuration file path, typically
    /// `~/.config/stamp/config.toml`.
    fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    /// Loads settings from file, creating defaults if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if file I/O fails or if the TOML is malformed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            println!("INFO: Config file not found, creating default config...");
            let settings = Self::default();
            settings.save()?;
            println!("INFO: Default config created at: {}", config_path.display());
            return Ok(settings);
        }

        let contents = fs::read_to_string(&config_path)?;
        let settings: Settings = toml::from_str(&contents)?;

        Ok(settings)
    }

    /// Saves the settings to file, creating the configuration directory if
    /// it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::get_config_dir()?;
        fs::create_dir_all(&config_dir)?;

        let config_path = Self::get_config_path()?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

/// Immutable parameters for one copy run.
///
/// Built once at startup and read-only afterwards. No path validation
/// happens at construction; a bad source path surfaces when the directory
/// is opened.
#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Filename suffix filter, compared case-insensitively
    pub extension: String,
    pub overwrite: bool,
    pub recursive: bool,
    /// Copy buffer size in bytes
    pub buffer_size: u64,
    pub preserve_times: bool,
}

impl RunConfig {
    /// Renders the run configuration as pretty JSON for the pre-run echo.
    pub fn echo_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
