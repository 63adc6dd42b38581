//! Error types for file-map loading.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience `Result` alias for loader operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a file map.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The source is neither a readable directory nor a zip archive.
    #[error("source '{}' is neither a directory nor a zip archive", path.display())]
    SourceNotReadable {
        /// The path the caller supplied
        path: PathBuf,
    },

    /// Underlying filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The archive could not be read as a zip file.
    #[error("invalid zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The directory scan pattern was rejected.
    #[error("invalid scan pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A path failed to resolve during the directory scan.
    #[error("unreadable path during scan: {0}")]
    Scan(#[from] glob::GlobError),
}
