pub mod collector;
pub mod config;
pub mod error;
pub mod paths;
pub mod writer;

// Re-export commonly used types
pub use collector::{FirstLine, Folder, TextFile};
pub use config::Config;
pub use error::{CollectError, WriteError};
