//! Line collector - first line of every `.txt` file in a folder
//!
//! Scans one folder (non-recursive), keeps regular files whose extension is
//! `txt` in any letter case, and reads the first line of each. Lines come
//! back in directory enumeration order, which the filesystem decides.
//!
//! # Example
//!
//! ```no_run
//! use firstline::collector;
//!
//! match collector::collect("/path/to/notes") {
//!     Ok(lines) => println!("collected {} lines", lines.len()),
//!     Err(e) if e.is_invalid_folder() => println!("{e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use std::io::Read;
use std::path::Path;

use crate::error::CollectError;

pub use internal::{FirstLine, Folder, TextFile};

/// Collect the first line of every text file in `folder_path`.
///
/// An empty path means the current directory. A path that is missing or
/// not a directory yields [`CollectError::InvalidFolder`]; any read failure
/// after that is [`CollectError::FatalIo`].
pub fn collect(folder_path: &str) -> Result<Vec<String>, CollectError> {
    let folder = Folder::open(folder_path)?;
    collect_folder(&folder)
}

/// Collect from an already validated folder.
pub fn collect_folder(folder: &Folder) -> Result<Vec<String>, CollectError> {
    let files = folder.text_files()?;
    collect_lines(&files)
}

/// Read the first line of each source, in order.
pub fn collect_lines<S: FirstLine>(sources: &[S]) -> Result<Vec<String>, CollectError> {
    internal::collect_lines(sources)
}

/// Read and trim the first line of a reader.
///
/// `\n`, `\r\n` and a lone `\r` all end the line. Input is read and
/// UTF-8 validated in 8 KiB chunks until a chunk holds a line terminator, so
/// invalid bytes anywhere in that span fail with `InvalidData`, even past
/// the first line.
pub fn read_first_line<R: Read>(reader: R) -> std::io::Result<String> {
    internal::read_first_line(reader)
}

/// True when the path's extension is `txt`, ignoring case.
pub fn is_txt_file_name(path: &Path) -> bool {
    internal::has_txt_extension(path)
}
