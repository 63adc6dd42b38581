//! Merge orchestration.
//!
//! The orchestrator only sequences the two core steps: extract the macro
//! table from the main document once, then run the include expander over
//! the main content with the main file's directory as the starting
//! context. Macros are never re-extracted from included files, so a
//! redefinition inside an included file has no effect on path resolution.

use crate::error::Result;
use crate::expand::Expander;
use crate::filemap::FileMap;
use crate::macros::extract_macros;

/// Tuning knobs for a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Maximum include nesting depth before the merge is aborted with
    /// [`Error::DepthExceeded`](crate::Error::DepthExceeded).
    pub max_depth: usize,
}

impl MergeOptions {
    /// Default nesting ceiling.
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Merge a LaTeX project into a single document.
///
/// Every `\include{...}`/`\input{...}` reference in `main_content` is
/// replaced by the fully expanded content of its target, resolved against
/// `files` with `main_dir` as the starting directory. Unresolved and
/// circular references are dropped with a warning; only excessive nesting
/// fails the merge.
pub fn merge_document(main_content: &str, files: &FileMap, main_dir: &str) -> Result<String> {
    merge_document_with(main_content, files, main_dir, MergeOptions::default())
}

/// [`merge_document`] with an explicit nesting ceiling.
pub fn merge_document_with(
    main_content: &str,
    files: &FileMap,
    main_dir: &str,
    options: MergeOptions,
) -> Result<String> {
    let macros = extract_macros(main_content);
    let mut expander = Expander::new(files, &macros, options.max_depth);
    expander.expand(main_content, main_dir, 0)
}

// ============================================================================
// Tests
// ============================================================================
