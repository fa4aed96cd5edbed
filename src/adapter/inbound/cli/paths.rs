//! Path utilities for surebet.
//!
//! User data lives under `~/.surebet/`:
//! - `~/.surebet/config.toml` - main configuration

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Returns the surebet home directory (`~/.surebet/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".surebet")
}

/// Returns the default config file path (`~/.surebet/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Write `contents` to `path`, creating parent directories.
///
/// An existing file is only replaced when `force` is set.
pub fn write_new(path: &Path, contents: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
