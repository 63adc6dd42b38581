//! The flat file map and helpers for locating documents in it.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Flat map from forward-slash relative path to full file content.
///
/// Built once per merge by the caller and never mutated by the engine.
pub type FileMap = HashMap<String, String>;

/// Locate the main document in the file map.
///
/// An exact key match wins. Otherwise every key containing `name` is a
/// candidate, ranked deterministically: keys ending with `/name` (a true
/// filename match) first, then shortest key, then lexicographically
/// smallest. Map iteration order never decides the outcome.
///
/// # Example
///
/// ```rust
/// use texmerge_core::{find_main_file, FileMap};
///
/// let mut files = FileMap::new();
/// files.insert("doc/main.tex".to_string(), String::new());
/// files.insert("doc/appendix/main.tex".to_string(), String::new());
///
/// assert_eq!(find_main_file(&files, "main.tex").unwrap(), "doc/main.tex");
/// ```
pub fn find_main_file<'a>(files: &'a FileMap, name: &str) -> Result<&'a str> {
    if let Some((key, _)) = files.get_key_value(name) {
        return Ok(key);
    }

    let suffix = format!("/{name}");
    files
        .keys()
        .filter(|key| key.contains(name))
        .min_by(|a, b| {
            let rank_a = (!a.ends_with(&suffix), a.len());
            let rank_b = (!b.ends_with(&suffix), b.len());
            rank_a.cmp(&rank_b).then_with(|| a.cmp(b))
        })
        .map(String::as_str)
        .ok_or_else(|| Error::MainFileNotFound {
            name: name.to_string(),
        })
}

/// Produce a new map with `prefix/` stripped from the front of every key
/// that carries it.
///
/// Rebased entries are added alongside the originals, so includes written
/// relative to the project root keep resolving too. The input map is never
/// touched. An empty prefix returns a plain copy.
pub fn rebase_file_map(files: &FileMap, prefix: &str) -> FileMap {
    let mut rebased = files.clone();
    if prefix.is_empty() {
        return rebased;
    }

    let strip = format!("{prefix}/");
    for (key, content) in files {
        if let Some(rest) = key.strip_prefix(&strip) {
            rebased.insert(rest.to_string(), content.clone());
        }
    }
    rebased
}

// ============================================================================
// Tests
// ============================================================================
