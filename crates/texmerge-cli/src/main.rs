#![forbid(unsafe_code)]

//! Texmerge CLI
//!
//! Flattens a LaTeX project (directory or zip archive) into a single
//! `.tex` file.
//!
//! Example:
//!
//! ```text
//! $ texmerge path/to/latex/dir
//! $ texmerge path/to/project.zip
//! $ texmerge --main thesis.tex --output thesis_flat.tex path/to/latex/dir
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use texmerge_core::{find_main_file, merge_document, paths};
use texmerge_loader::load_file_map;

/// Flatten a multi-file LaTeX project into a single document.
#[derive(Parser, Debug)]
#[command(name = "texmerge")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory or zip archive containing the LaTeX sources
    source: PathBuf,

    /// Main file to use as the entry point
    #[arg(short, long, default_value = "main.tex")]
    main: String,

    /// Output file path (default: <main>_merged.tex derived from the source)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let files = load_file_map(&args.source)
        .with_context(|| format!("failed to read '{}'", args.source.display()))?;
    if files.is_empty() {
        bail!("no .tex files found in '{}'", args.source.display());
    }

    let main_file = match find_main_file(&files, &args.main) {
        Ok(key) => key.to_string(),
        Err(err) => {
            let mut available: Vec<&str> = files.keys().map(String::as_str).collect();
            available.sort_unstable();
            eprintln!("Available files:");
            for name in available {
                eprintln!("  {name}");
            }
            return Err(err.into());
        }
    };
    if main_file != args.main {
        tracing::info!("using '{main_file}' as the main file");
    }

    let merged = merge_document(&files[&main_file], &files, paths::parent(&main_file))?;

    let output = args
        .output
        .unwrap_or_else(|| default_output(&args.source, &main_file));
    fs::write(&output, merged)
        .with_context(|| format!("failed to write '{}'", output.display()))?;
    tracing::info!("merged {} files into '{}'", files.len(), output.display());

    Ok(())
}

/// Derive the default output path: `<main>_merged.tex` inside a source
/// directory, or `<archive>_merged.tex` next to a source archive.
fn default_output(source: &Path, main_file: &str) -> PathBuf {
    let base = if source.is_dir() {
        source.join(main_file)
    } else {
        source.to_path_buf()
    };
    PathBuf::from(format!("{}_merged.tex", base.with_extension("").display()))
}

// ============================================================================
// Tests
// ============================================================================
