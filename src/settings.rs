use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::Mode;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot locate config directory: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("cannot serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User preferences from `~/.config/pwdhash/config.toml`.
///
/// They pick which derivation runs and how the result is shown; they never
/// change algorithm parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "modern" (default) or "legacy".
    pub mode: Mode,
    /// Also echo the generated password in a human-readable line.
    pub show_password: bool,
}

pub fn config_path() -> Result<PathBuf, SettingsError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pwdhash")?;
    Ok(xdg_dirs.get_config_file(CONFIG_FILE))
}

/// Reads settings from `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&data).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`load`], but an unreadable or malformed file falls back to the
/// defaults (modern mode) with a warning.
pub fn load_or_default(path: &Path) -> Settings {
    match load(path) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("settings unavailable, using modern defaults: {err}");
            Settings::default()
        }
    }
}

pub fn save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let toml = toml::to_string_pretty(settings)?;
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, toml).map_err(io_err)?;
    tracing::info!("saved settings to {}", path.display());
    Ok(())
}
