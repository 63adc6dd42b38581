//! Error types for the merge engine.

use thiserror::Error;

/// Convenience `Result` alias for merge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a merge.
///
/// Unresolved and circular includes are deliberately not here: they are
/// dropped with a warning and the merge still completes (see
/// [`crate::merge::merge_document`]).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested main document has no match in the file map.
    #[error("main file '{name}' not found")]
    MainFileNotFound {
        /// The name the caller asked for
        name: String,
    },

    /// Include nesting ran past the configured ceiling.
    #[error("include nesting exceeds {limit} levels")]
    DepthExceeded {
        /// The configured nesting ceiling
        limit: usize,
    },
}
