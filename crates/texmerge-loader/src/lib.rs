//! File-map loading from directory trees and zip archives.
//!
//! This crate builds the flat [`FileMap`] the merge engine consumes. It
//! accepts either a directory (scanned recursively for `.tex` files) or a
//! zip archive (`.tex` entries, with any directory prefix common to every
//! entry stripped so keys are relative to the project root). File bytes are
//! decoded as UTF-8 with replacement characters standing in for invalid
//! sequences.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use texmerge_loader::load_file_map;
//!
//! let files = load_file_map(Path::new("paper/")).unwrap();
//! assert!(files.contains_key("main.tex"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;

pub use error::{Error, Result};

use std::fs;
use std::io::Read;
use std::path::Path;

use texmerge_core::FileMap;

/// Load every `.tex` file reachable from `source` into a [`FileMap`].
///
/// `source` may be a directory or a file with a `.zip` extension
/// (case-insensitive); anything else is [`Error::SourceNotReadable`]. Keys
/// use forward-slash relative paths. An archive or directory without any
/// `.tex` files yields an empty map, which callers treat as fatal before
/// invoking the merge.
pub fn load_file_map(source: &Path) -> Result<FileMap> {
    if source.is_file() && has_zip_extension(source) {
        load_from_zip(source)
    } else if source.is_dir() {
        load_from_dir(source)
    } else {
        Err(Error::SourceNotReadable {
            path: source.to_path_buf(),
        })
    }
}

fn has_zip_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

fn load_from_dir(dir: &Path) -> Result<FileMap> {
    let pattern = format!("{}/**/*.tex", dir.display());
    let mut files = FileMap::new();

    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let key = path
            .strip_prefix(dir)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");
        let bytes = fs::read(&path)?;
        files.insert(key, String::from_utf8_lossy(&bytes).into_owned());
    }

    log::debug!("loaded {} files from directory '{}'", files.len(), dir.display());
    Ok(files)
}

fn load_from_zip(path: &Path) -> Result<FileMap> {
    let reader = fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(reader)?;

    let names: Vec<String> = archive
        .file_names()
        .filter(|name| name.to_ascii_lowercase().ends_with(".tex"))
        .map(str::to_string)
        .collect();
    let prefix = common_dir_prefix(&names);

    let mut files = FileMap::new();
    for name in &names {
        let mut entry = archive.by_name(name)?;
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes)?;

        let key = name.strip_prefix(&prefix).unwrap_or(name).to_string();
        files.insert(key, String::from_utf8_lossy(&bytes).into_owned());
    }

    log::debug!("loaded {} entries from archive '{}'", files.len(), path.display());
    Ok(files)
}

/// Longest directory prefix (with trailing `/`) shared by every name, or
/// `""` when there is none. A name without a directory component forces
/// the empty prefix, since it already sits at the root.
fn common_dir_prefix(names: &[String]) -> String {
    let Some(first) = names.first() else {
        return String::new();
    };
    let mut shared: Vec<&str> = match first.rfind('/') {
        Some(idx) => first[..idx].split('/').collect(),
        None => return String::new(),
    };

    for name in &names[1..] {
        let dirs: Vec<&str> = match name.rfind('/') {
            Some(idx) => name[..idx].split('/').collect(),
            None => return String::new(),
        };
        let keep = shared
            .iter()
            .zip(&dirs)
            .take_while(|(a, b)| a == b)
            .count();
        shared.truncate(keep);
        if shared.is_empty() {
            return String::new();
        }
    }

    let mut prefix = shared.join("/");
    prefix.push('/');
    prefix
}

// ============================================================================
// Tests
// ============================================================================
