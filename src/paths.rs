//! Single source of truth for firstline filesystem locations.
//!
//! This module defines WHERE things live. It has no I/O and no validation;
//! callers decide whether a location must exist.
//!
//! ```text
//! ~/
//! ├── Desktop/
//! │   └── combined_txt_output.txt   # Default output (overwritten each run)
//! └── <config dir>/firstline/
//!     └── config.toml               # Optional user config
//! ```

use std::path::{Path, PathBuf};

/// File name of the combined output.
pub const OUTPUT_FILE_NAME: &str = "combined_txt_output.txt";

/// Name of the Desktop folder under the user's home directory.
pub const DESKTOP_DIR_NAME: &str = "Desktop";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "FIRSTLINE_CONFIG";

/// User's home directory, if the platform reports one.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Desktop folder under a given home: `<home>/Desktop`
pub fn desktop_dir_in(home: &Path) -> PathBuf {
    home.join(DESKTOP_DIR_NAME)
}

/// Desktop folder of the invoking user: `~/Desktop`
pub fn desktop_dir() -> Option<PathBuf> {
    home_dir().map(|home| desktop_dir_in(&home))
}

/// Default user config: `<config dir>/firstline/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("firstline").join("config.toml"))
}
