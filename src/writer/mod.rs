//! Output writer - combined first lines, one per line
//!
//! The default destination is `~/Desktop/combined_txt_output.txt`. The
//! Desktop folder must already exist; it is never created. The file is
//! truncated on every run.

mod internal;

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::WriteError;

/// Write `lines` to the default destination and return its absolute path.
pub fn write(lines: &[String]) -> Result<PathBuf, WriteError> {
    let dest = Config::default().output_path()?;
    write_to(lines, &dest)
}

/// Write `lines` to `dest`, each followed by `\n`, and return the absolute path.
///
/// The parent directory of `dest` must exist.
pub fn write_to(lines: &[String], dest: &Path) -> Result<PathBuf, WriteError> {
    internal::write_to(lines, dest)
}
