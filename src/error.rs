//! Error types for firstline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while collecting first lines from a folder.
#[derive(Error, Debug)]
pub enum CollectError {
    /// The path does not exist or is not a directory. Recoverable: the
    /// caller reports it and writes nothing.
    #[error("Invalid folder path.")]
    InvalidFolder(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    FatalIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CollectError {
    pub fn is_invalid_folder(&self) -> bool {
        matches!(self, CollectError::InvalidFolder(_))
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CollectError::FatalIo {
            path: path.into(),
            source,
        }
    }
}

/// Failure while writing the combined output file.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("could not determine the home directory")]
    NoHomeDir,

    #[error("output folder does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),

    #[error("failed to write {}: {source}", .path.display())]
    FatalIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WriteError::FatalIo {
            path: path.into(),
            source,
        }
    }
}
