//! `\newcommand` extraction and substitution in include targets.
//!
//! The engine only understands single-argument definitions of the literal
//! shape `\newcommand{\NAME}{VALUE}`, and only uses them to resolve
//! macro-valued path fragments inside `\include`/`\input` targets. No other
//! LaTeX macro machinery is modeled.
//!
//! # Example
//!
//! ```rust
//! use texmerge_core::extract_macros;
//!
//! let table = extract_macros("\\newcommand{\\chapdir}{chapters}\n\\begin{document}");
//! assert_eq!(table.get("chapdir"), Some("chapters"));
//! assert_eq!(table.apply("\\chapdir/intro"), "chapters/intro");
//! ```

use regex::Regex;

/// Insertion-ordered table of single-argument macro definitions.
///
/// Redefining a name replaces its value in place, so the table keeps the
/// position of the first definition while the last value wins — the same
/// behavior as an insertion-ordered dictionary. Substitution order during
/// [`apply`](MacroTable::apply) follows table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroTable {
    entries: Vec<(String, String)>,
}

impl MacroTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, overwriting the value of an existing name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up the replacement text for a macro name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of definitions in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Substitute every `\NAME` occurrence in an include target.
    ///
    /// Plain textual replacement in table order. This does not tokenize
    /// LaTeX, so a macro whose name is a prefix of a longer token can
    /// over-match; that is an accepted limitation of path-only macro use.
    pub fn apply(&self, target: &str) -> String {
        let mut substituted = target.to_string();
        for (name, value) in self.iter() {
            let occurrence = format!("\\{name}");
            if substituted.contains(&occurrence) {
                substituted = substituted.replace(&occurrence, value);
            }
        }
        substituted
    }
}

/// Extract every `\newcommand{\NAME}{VALUE}` definition from a document.
///
/// NAME is a run of word characters and VALUE any run of characters other
/// than `}`. Later definitions of the same name overwrite earlier ones. A
/// document without definitions yields an empty table.
pub fn extract_macros(content: &str) -> MacroTable {
    let definition_re = Regex::new(r"\\newcommand\{\\(\w+)\}\{([^}]+)\}")
        .expect("Invalid newcommand definition regex");

    let mut table = MacroTable::new();
    for caps in definition_re.captures_iter(content) {
        table.insert(&caps[1], &caps[2]);
    }
    table
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // extract_macros tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_single_definition() {
        let table = extract_macros("\\newcommand{\\chapdir}{chapters}");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("chapdir"), Some("chapters"));
    }

    #[test]
    fn test_extract_multiple_definitions_in_order() {
        let content = "\\newcommand{\\a}{one}\n\\newcommand{\\b}{two}";
        let table = extract_macros(content);
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_extract_last_definition_wins() {
        let content = "\\newcommand{\\dir}{old}\n\\newcommand{\\dir}{new}";
        let table = extract_macros(content);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("dir"), Some("new"));
    }

    #[test]
    fn test_extract_no_definitions_yields_empty_table() {
        let table = extract_macros("\\documentclass{article}\n\\begin{document}");
        assert!(table.is_empty());
    }

    #[test]
    fn test_extract_ignores_non_word_names() {
        // A hyphen is not a word character, so this shape is not captured.
        let table = extract_macros("\\newcommand{\\chap-dir}{chapters}");
        assert!(table.is_empty());
    }

    #[test]
    fn test_extract_value_stops_at_closing_brace() {
        let table = extract_macros("\\newcommand{\\v}{a/b}{trailing}");
        assert_eq!(table.get("v"), Some("a/b"));
    }

    #[test]
    fn test_extract_definition_embedded_in_text() {
        let content = "preamble\n\\newcommand{\\figdir}{figures}\nbody";
        let table = extract_macros(content);
        assert_eq!(table.get("figdir"), Some("figures"));
    }

    // ------------------------------------------------------------------------
    // apply tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_apply_substitutes_macro_in_target() {
        let table = extract_macros("\\newcommand{\\dir}{chapters}");
        assert_eq!(table.apply("\\dir/intro"), "chapters/intro");
    }

    #[test]
    fn test_apply_substitutes_every_occurrence() {
        let table = extract_macros("\\newcommand{\\d}{x}");
        assert_eq!(table.apply("\\d/\\d/file"), "x/x/file");
    }

    #[test]
    fn test_apply_leaves_unknown_macros_alone() {
        let table = extract_macros("\\newcommand{\\dir}{chapters}");
        assert_eq!(table.apply("\\other/intro"), "\\other/intro");
    }

    #[test]
    fn test_apply_with_empty_table_is_identity() {
        let table = MacroTable::new();
        assert_eq!(table.apply("chapters/intro"), "chapters/intro");
    }

    // ------------------------------------------------------------------------
    // MacroTable tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut table = MacroTable::new();
        table.insert("a", "one");
        table.insert("b", "two");
        table.insert("a", "three");

        let entries: Vec<(&str, &str)> = table.iter().collect();
        assert_eq!(entries, vec![("a", "three"), ("b", "two")]);
    }

    #[test]
    fn test_get_missing_name() {
        let table = MacroTable::new();
        assert_eq!(table.get("missing"), None);
    }
}
