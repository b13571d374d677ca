//! Settings file handling.
//!
//! Settings are read from a TOML file given with `--config` or the
//! `TPV_CONFIG` environment variable. Without either, defaults are used.
//!
//! ```toml
//! [display]
//! max_width = 800
//!
//! [preview]
//! char_width = 16.0
//! ellipsis = ".."
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tpv_format::PreviewOptions;

/// Environment variable naming the settings file.
pub const CONFIG_ENV_VAR: &str = "TPV_CONFIG";

/// Width used when neither the CLI nor the settings give one.
pub const DEFAULT_MAX_WIDTH: u32 = 600;

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub preview: PreviewOptions,
}

/// Rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Available width in pixels for the header row.
    pub max_width: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

/// Errors reading the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`Settings`].
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Pick the settings path: explicit flag first, then `TPV_CONFIG`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_config_path_from(explicit, std::env::var_os(CONFIG_ENV_VAR))
}

/// Pick the settings path from the flag and the environment value.
///
/// An empty environment value counts as unset.
pub fn resolve_config_path_from(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    env_value
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Width for a preview: the CLI flag, then `[display] max_width`.
///
/// [`Settings::default`] carries [`DEFAULT_MAX_WIDTH`], so a missing
/// settings file or `[display]` table falls back to 600.
pub fn resolve_max_width(flag: Option<u32>, settings: &Settings) -> u32 {
    flag.unwrap_or(settings.display.max_width)
}

/// Load settings from `path`, or defaults when no path is given.
///
/// A path that was asked for must exist; a missing file is an error rather
/// than a silent fallback.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let Some(path) = path else {
        tracing::debug!("no settings file given, using defaults");
        return Ok(Settings::default());
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Parse settings from TOML text.
pub fn parse_settings(content: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(content)
}
