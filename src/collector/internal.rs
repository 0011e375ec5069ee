//! Internal implementation for the collector module

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

use crate::error::CollectError;

const TXT_EXTENSION: &str = "txt";

/// Bytes decoded per read while looking for the end of the first line.
const DECODE_CHUNK: usize = 8192;

// =============================================================================
// Folder - validated directory handle
// =============================================================================

/// A directory that existed and was a directory when it was opened.
#[derive(Debug, Clone)]
pub struct Folder {
    path: PathBuf,
}

impl Folder {
    /// Validate `raw` as a directory. An empty string is the current directory.
    pub fn open(raw: impl AsRef<Path>) -> Result<Self, CollectError> {
        let raw = raw.as_ref();
        let path = if raw.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            raw.to_path_buf()
        };

        // is_dir() follows symlinks and is false for missing paths
        if !path.is_dir() {
            tracing::debug!(path = %path.display(), "not a directory");
            return Err(CollectError::InvalidFolder(path));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Regular `.txt` files directly inside this folder, in enumeration order.
    pub fn text_files(&self) -> Result<Vec<TextFile>, CollectError> {
        let entries = fs::read_dir(&self.path).map_err(|e| CollectError::io(&self.path, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CollectError::io(&self.path, e))?;
            let path = entry.path();

            if !path.is_file() {
                tracing::trace!(path = %path.display(), "skipping non-file entry");
                continue;
            }
            if !has_txt_extension(&path) {
                tracing::trace!(path = %path.display(), "skipping non-txt file");
                continue;
            }

            tracing::debug!(path = %path.display(), "selected");
            files.push(TextFile::new(path));
        }

        Ok(files)
    }
}

pub(crate) fn has_txt_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TXT_EXTENSION))
}

// =============================================================================
// First line reading
// =============================================================================

/// Something whose first line can be read.
pub trait FirstLine {
    /// Where the content comes from, for error reporting.
    fn path(&self) -> &Path;

    /// The first line with surrounding whitespace stripped.
    fn first_line(&self) -> io::Result<String>;
}

/// A text file on disk. Opened only for the duration of one read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    path: PathBuf,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FirstLine for TextFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn first_line(&self) -> io::Result<String> {
        let file = File::open(&self.path)?;
        read_first_line(file)
    }
}

pub(crate) fn read_first_line<R: Read>(mut reader: R) -> io::Result<String> {
    // Read whole decode chunks until one holds a line terminator; every byte
    // read is validated, not just the first line
    let mut buf = Vec::new();
    let eof = loop {
        let n = reader
            .by_ref()
            .take(DECODE_CHUNK as u64)
            .read_to_end(&mut buf)?;
        if n < DECODE_CHUNK {
            break true;
        }
        if buf[buf.len() - n..].iter().any(|&b| b == b'\n' || b == b'\r') {
            break false;
        }
    };

    let text = match std::str::from_utf8(&buf) {
        Ok(text) => text,
        // Multibyte sequence cut by the chunk boundary
        Err(e) if !eof && e.error_len().is_none() => {
            std::str::from_utf8(&buf[..e.valid_up_to()]).map_err(invalid_data)?
        }
        Err(e) => return Err(invalid_data(e)),
    };

    // A lone '\r' also ends a line
    let line = text
        .split(|c: char| c == '\n' || c == '\r')
        .next()
        .unwrap_or_default();
    Ok(line.trim_matches(is_strip_whitespace).to_string())
}

/// Whitespace stripped from both ends of a line, including the ASCII
/// information separators U+001C..U+001F.
fn is_strip_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn invalid_data(e: Utf8Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

pub(crate) fn collect_lines<S: FirstLine>(sources: &[S]) -> Result<Vec<String>, CollectError> {
    sources
        .iter()
        .map(|source| {
            source
                .first_line()
                .map_err(|e| CollectError::io(source.path(), e))
        })
        .collect()
}
