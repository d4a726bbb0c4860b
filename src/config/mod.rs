//! Settings file support
//!
//! A TOML file can supply defaults for every annotation option. Values on the
//! command line win over the file, and the file wins over built-in defaults.

use crate::annotate::{MAX_DIGITS, MAX_READ_SIZE};
use crate::cli::EscapeStyle;
use crate::error::{ErrorCode, LinestampError, Result};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the user config directory
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Location of the default settings file, if a home directory is known
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "linestamp").map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}

/// Optional defaults read from a settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub absolute: Option<bool>,
    pub from_launch: Option<bool>,
    pub digits: Option<u8>,
    pub escape: Option<bool>,
    pub escape_style: Option<String>,
    pub separator: Option<String>,
    pub read_size: Option<usize>,
}

impl Settings {
    /// Parse and validate settings text; `path` is only used in error messages
    pub fn from_toml_str(content: &str, path: Option<&Path>) -> Result<Self> {
        let settings: Settings = toml::from_str(content).map_err(|e| {
            LinestampError::config_with_code(
                ErrorCode::CONFIG_INVALID_TOML,
                "Invalid settings file syntax",
                path.map(Path::to_path_buf),
            )
            .with_source(e)
        })?;
        settings.validate(path)?;
        Ok(settings)
    }

    /// Read settings from `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            let code = match e.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::CONFIG_NOT_FOUND,
                _ => ErrorCode::CONFIG_PATH_ERROR,
            };
            LinestampError::config_with_code(
                code,
                "Cannot read settings file",
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?;
        debug!(path = %path.display(), "Loaded settings file");
        Self::from_toml_str(&content, Some(path))
    }

    /// Load the explicit settings file, or the default one when it exists
    ///
    /// A missing default file is not an error; a missing explicit one is.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_settings_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("No settings file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// The configured escape style, if any
    pub fn escape_style(&self) -> Result<Option<EscapeStyle>> {
        match self.escape_style.as_deref() {
            None => Ok(None),
            Some(name) => EscapeStyle::from_str(name, true).map(Some).map_err(|_| {
                LinestampError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    escape_style_message(name),
                    None,
                )
            }),
        }
    }

    fn validate(&self, path: Option<&Path>) -> Result<()> {
        let invalid = |message: String| {
            LinestampError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                message,
                path.map(Path::to_path_buf),
            )
        };

        if let Some(digits) = self.digits {
            if digits > MAX_DIGITS {
                return Err(invalid(format!(
                    "digits must be between 0 and {MAX_DIGITS}, got {digits}"
                )));
            }
        }
        if let Some(size) = self.read_size {
            if size == 0 || size > MAX_READ_SIZE {
                return Err(invalid(format!(
                    "read_size must be between 1 and {MAX_READ_SIZE}, got {size}"
                )));
            }
        }
        if let Some(name) = self.escape_style.as_deref() {
            if EscapeStyle::from_str(name, true).is_err() {
                return Err(invalid(escape_style_message(name)));
            }
        }
        Ok(())
    }
}

fn escape_style_message(name: &str) -> String {
    format!("escape_style must be \"control\" or \"unicode\", got {name:?}")
}

#[cfg(test)]
mod tests;
