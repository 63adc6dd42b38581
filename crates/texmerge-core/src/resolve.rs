//! Resolution of raw include targets against the file map.

use crate::filemap::FileMap;
use crate::macros::MacroTable;
use crate::paths;

/// Resolve a raw include target to a file-map key.
///
/// The target is macro-substituted, joined onto the current directory, and
/// probed against the map in a fixed order: with a `.tex` suffix, as
/// written, then both again with separators and `.`/`..` segments
/// normalized. The first key present in the map wins; `None` is the
/// recoverable "not found" answer.
///
/// # Example
///
/// ```rust
/// use texmerge_core::{extract_macros, resolve_target, FileMap};
///
/// let mut files = FileMap::new();
/// files.insert("doc/chapters/intro.tex".to_string(), String::new());
///
/// let macros = extract_macros("\\newcommand{\\dir}{chapters}");
/// let resolved = resolve_target("\\dir/intro", &macros, "doc", &files);
/// assert_eq!(resolved.as_deref(), Some("doc/chapters/intro.tex"));
/// ```
pub fn resolve_target(
    target: &str,
    macros: &MacroTable,
    context: &str,
    files: &FileMap,
) -> Option<String> {
    let joined = paths::join(context, &macros.apply(target));
    let with_tex = format!("{joined}.tex");

    let candidates = [
        with_tex.clone(),
        joined.clone(),
        paths::normalize(&with_tex),
        paths::normalize(&joined),
    ];

    candidates
        .into_iter()
        .find(|candidate| files.contains_key(candidate))
}

// ============================================================================
// Tests
// ============================================================================
