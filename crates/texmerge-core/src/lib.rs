//! Texmerge core — the include-resolution and macro-substitution engine.
//!
//! This crate flattens a multi-file LaTeX project into a single document.
//! The caller supplies the main document's content, a flat [`FileMap`] of
//! every available file, and the main document's directory; the engine
//! locates every `\include{...}`/`\input{...}` reference, resolves it
//! against the map, recursively expands the target relative to its own
//! directory, and splices the result back in place of the reference.
//!
//! The engine is pure text transformation: no I/O, no shared state, safe
//! to call concurrently as long as each call owns its inputs. Building the
//! [`FileMap`] from a directory tree or archive is the loader crate's job.
//!
//! # Modules
//!
//! - [`macros`]: `\newcommand` extraction and substitution in include targets
//! - [`resolve`]: mapping raw include targets onto file-map keys
//! - [`merge`]: the orchestrator entry points
//! - [`filemap`]: main-file location and key rebasing helpers
//! - [`paths`]: slash-path normalization used throughout
//!
//! # Example
//!
//! ```rust
//! use texmerge_core::{merge_document, FileMap};
//!
//! let mut files = FileMap::new();
//! files.insert("b.tex".to_string(), "B".to_string());
//!
//! let merged = merge_document("A \\input{b} C", &files, "").unwrap();
//! assert_eq!(merged, "A B C");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
mod expand;
pub mod filemap;
pub mod macros;
pub mod merge;
pub mod paths;
mod proptests;
pub mod resolve;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use filemap::{find_main_file, rebase_file_map, FileMap};
pub use macros::{extract_macros, MacroTable};
pub use merge::{merge_document, merge_document_with, MergeOptions};
pub use resolve::resolve_target;
