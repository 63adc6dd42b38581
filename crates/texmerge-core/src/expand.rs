//! Recursive include expansion.

use std::collections::HashSet;

use regex::Regex;

use crate::error::{Error, Result};
use crate::filemap::FileMap;
use crate::macros::MacroTable;
use crate::paths;
use crate::resolve::resolve_target;

/// A located `\include{...}` or `\input{...}` occurrence.
struct Reference {
    start: usize,
    end: usize,
    target: String,
}

/// Depth-first include expander.
///
/// One expander drives a whole merge. It carries the shared read-only
/// inputs plus the two guards the recursion needs: the set of resolved
/// paths currently on the expansion stack (cycle detection) and the
/// nesting ceiling.
pub(crate) struct Expander<'a> {
    files: &'a FileMap,
    macros: &'a MacroTable,
    max_depth: usize,
    reference_re: Regex,
    in_flight: HashSet<String>,
}

impl<'a> Expander<'a> {
    pub(crate) fn new(files: &'a FileMap, macros: &'a MacroTable, max_depth: usize) -> Self {
        let reference_re =
            Regex::new(r"\\(?:include|input)\{([^}]+)\}").expect("Invalid include reference regex");
        Self {
            files,
            macros,
            max_depth,
            reference_re,
            in_flight: HashSet::new(),
        }
    }

    /// Expand every include reference in `content`, resolving targets
    /// relative to the `context` directory.
    ///
    /// References are collected in one forward scan before any splicing,
    /// so replacement text is never rescanned at this level; nested
    /// references are handled by the recursive call on the target's own
    /// content, which keeps the depth-first splice order.
    pub(crate) fn expand(&mut self, content: &str, context: &str, depth: usize) -> Result<String> {
        if depth > self.max_depth {
            return Err(Error::DepthExceeded {
                limit: self.max_depth,
            });
        }

        let references: Vec<Reference> = self
            .reference_re
            .captures_iter(content)
            .map(|caps| {
                let whole = caps.get(0).expect("capture 0 is the whole match");
                Reference {
                    start: whole.start(),
                    end: whole.end(),
                    target: caps[1].to_string(),
                }
            })
            .collect();

        if references.is_empty() {
            return Ok(content.to_string());
        }

        let mut merged = String::with_capacity(content.len());
        let mut cursor = 0;
        for reference in references {
            merged.push_str(&content[cursor..reference.start]);
            cursor = reference.end;

            match resolve_target(&reference.target, self.macros, context, self.files) {
                Some(path) => merged.push_str(&self.splice(&path, depth)?),
                // Unresolved references are dropped, not fatal.
                None => log::warn!("dropping unresolved include '{}'", reference.target),
            }
        }
        merged.push_str(&content[cursor..]);

        Ok(merged)
    }

    /// Recursively expand the file behind a resolved reference.
    ///
    /// A path already on the expansion stack is a cycle: the reference is
    /// dropped with a warning instead of recursing.
    fn splice(&mut self, path: &str, depth: usize) -> Result<String> {
        if !self.in_flight.insert(path.to_string()) {
            log::warn!("dropping circular include of '{path}'");
            return Ok(String::new());
        }

        let content = self.files.get(path).map(String::as_str).unwrap_or_default();
        let expanded = self.expand(content, paths::parent(path), depth + 1);
        self.in_flight.remove(path);
        expanded
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(content: &str, context: &str, files: &FileMap) -> Result<String> {
        let macros = MacroTable::new();
        Expander::new(files, &macros, 256).expand(content, context, 0)
    }

    fn file_map(entries: &[(&str, &str)]) -> FileMap {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_content() {
        let files = FileMap::new();
        assert_eq!(expand("", "", &files).unwrap(), "");
    }

    #[test]
    fn test_content_without_references_is_unchanged() {
        let files = FileMap::new();
        let content = "\\section{Intro} plain text {braces} \\emph{kept}";
        assert_eq!(expand(content, "", &files).unwrap(), content);
    }

    #[test]
    fn test_reference_at_string_boundaries() {
        let files = file_map(&[("a.tex", "A"), ("z.tex", "Z")]);
        assert_eq!(expand("\\input{a} mid \\input{z}", "", &files).unwrap(), "A mid Z");
    }

    #[test]
    fn test_adjacent_references() {
        let files = file_map(&[("a.tex", "A"), ("b.tex", "B")]);
        assert_eq!(expand("\\input{a}\\input{b}", "", &files).unwrap(), "AB");
    }

    #[test]
    fn test_include_and_input_are_equivalent() {
        let files = file_map(&[("a.tex", "A")]);
        assert_eq!(
            expand("\\include{a} \\input{a}", "", &files).unwrap(),
            "A A"
        );
    }

    #[test]
    fn test_unresolved_reference_is_dropped() {
        let files = FileMap::new();
        assert_eq!(expand("A \\input{missing} B", "", &files).unwrap(), "A  B");
    }

    #[test]
    fn test_unbalanced_reference_is_left_alone() {
        // No closing brace, so this is not a reference.
        let files = file_map(&[("a.tex", "A")]);
        let content = "\\input{a";
        assert_eq!(expand(content, "", &files).unwrap(), content);
    }

    #[test]
    fn test_depth_ceiling_is_fatal() {
        let files = file_map(&[("a.tex", "\\input{b}"), ("b.tex", "\\input{c}"), ("c.tex", "C")]);
        let macros = MacroTable::new();
        let err = Expander::new(&files, &macros, 2)
            .expand("\\input{a}", "", 0)
            .unwrap_err();
        assert!(matches!(err, Error::DepthExceeded { limit: 2 }));
    }

    #[test]
    fn test_depth_ceiling_allows_chain_within_bound() {
        let files = file_map(&[("a.tex", "\\input{b}"), ("b.tex", "B")]);
        let macros = MacroTable::new();
        let merged = Expander::new(&files, &macros, 2)
            .expand("\\input{a}", "", 0)
            .unwrap();
        assert_eq!(merged, "B");
    }

    #[test]
    fn test_cycle_is_dropped_not_fatal() {
        let files = file_map(&[("a.tex", "A[\\input{b}]"), ("b.tex", "B[\\input{a}]")]);
        assert_eq!(expand("\\input{a}", "", &files).unwrap(), "A[B[]]");
    }

    #[test]
    fn test_diamond_reuse_expands_every_time() {
        // Two paths to the same file is reuse, not a cycle.
        let files = file_map(&[
            ("a.tex", "\\input{shared}"),
            ("b.tex", "\\input{shared}"),
            ("shared.tex", "S"),
        ]);
        assert_eq!(expand("\\input{a} \\input{b}", "", &files).unwrap(), "S S");
    }
}
