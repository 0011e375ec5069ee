//! Internal implementation for the writer module

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::WriteError;

pub(crate) fn write_to(lines: &[String], dest: &Path) -> Result<PathBuf, WriteError> {
    let dest = absolute(dest)?;

    let parent = dest.parent().unwrap_or(Path::new("/"));
    if !parent.is_dir() {
        return Err(WriteError::MissingOutputDir(parent.to_path_buf()));
    }

    let file = File::create(&dest).map_err(|e| WriteError::io(&dest, e))?;
    let mut out = BufWriter::new(file);
    for line in lines {
        writeln!(out, "{line}").map_err(|e| WriteError::io(&dest, e))?;
    }
    out.flush().map_err(|e| WriteError::io(&dest, e))?;

    tracing::debug!(path = %dest.display(), lines = lines.len(), "output written");
    Ok(dest)
}

fn absolute(path: &Path) -> Result<PathBuf, WriteError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| WriteError::io(path, e))?;
    Ok(cwd.join(path))
}
