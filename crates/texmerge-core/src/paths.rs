//! Slash-path helpers for include resolution.
//!
//! Include targets and file-map keys are plain strings with `/` separators,
//! so these helpers work on string segments rather than `std::path`. The
//! rules are the usual lexical ones: `.` and empty segments disappear, `..`
//! cancels the segment before it, and `\` is treated as a separator written
//! the Windows way.

/// Normalize a slash-separated path.
///
/// Converts `\` to `/`, drops `.` and empty segments, and resolves `..`
/// against preceding segments. Leading `..` segments that cannot be
/// resolved are kept. A path that cancels out entirely normalizes to the
/// empty string.
///
/// # Example
///
/// ```rust
/// use texmerge_core::paths::normalize;
///
/// assert_eq!(normalize("doc/./chapters//intro.tex"), "doc/chapters/intro.tex");
/// assert_eq!(normalize("doc/../shared/defs.tex"), "shared/defs.tex");
/// assert_eq!(normalize("doc\\intro.tex"), "doc/intro.tex");
/// ```
pub fn normalize(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let mut segments: Vec<&str> = Vec::new();

    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), None | Some(&"..")) {
                    segments.push("..");
                } else {
                    segments.pop();
                }
            }
            _ => segments.push(segment),
        }
    }

    segments.join("/")
}

/// Join a relative target onto a directory context.
///
/// An empty context leaves the target untouched. The result is not
/// normalized; callers that need canonical form pass it through
/// [`normalize`].
pub fn join(context: &str, target: &str) -> String {
    if context.is_empty() {
        target.to_string()
    } else {
        format!("{context}/{target}")
    }
}

/// The directory component of a slash-separated path.
///
/// Returns `""` for paths without a directory component, mirroring how the
/// merge treats project-root files.
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

// ============================================================================
// Tests
// ============================================================================
