//! Document discovery and parsing.
//!
//! This module covers the read side of the pipeline:
//!
//! - **mod**: enumerate source documents under the working directory
//! - **frontmatter**: split the `---` metadata block from the prose body
//! - **markdown**: convert prose to HTML
//! - **post**: derive the canonical [`Post`] record for one document
//! - **catalog**: parse all documents in parallel and sort the result
//!
//! # Build Flow
//!
//! ```text
//! collect_documents() ──► build_catalog() ──► Vec<PostWithContent>
//!        │                      │
//!        ▼                      ▼
//!   Vec<PathBuf>        parse_document() × N (rayon)
//! ```

pub mod catalog;
pub mod frontmatter;
pub mod markdown;
pub mod post;

pub use catalog::build_catalog;
pub use post::{Post, PostWithContent};

use crate::error::BuildError;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Source document extension.
pub const SOURCE_EXT: &str = "md";

/// Dependency directories never scanned for documents.
const EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// Top-level files reserved for the repository itself.
const RESERVED_FILES: &[&str] = &["README.md"];

/// Enumerate all source documents under `root`.
///
/// Skips dependency directories, the output directory, hidden
/// tool-configuration directories (leading dot) and the reserved top-level
/// readme. Returns paths relative to `root`, sorted lexicographically so the
/// catalog's stable tie-break is reproducible across filesystems.
///
/// Read-only traversal; any filesystem error is fatal.
pub fn collect_documents(root: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let output_root = root.join(output_dir);

    let mut documents = Vec::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_skipped(e, &output_root));

    for entry in walker {
        let entry = entry.map_err(|err| BuildError::Io(root.to_path_buf(), err.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_none_or(|ext| ext != SOURCE_EXT) {
            continue;
        }
        if entry.depth() == 1
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| RESERVED_FILES.contains(&name))
        {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        documents.push(relative.to_path_buf());
    }

    documents.sort();
    Ok(documents)
}

/// Whether an entry (and its subtree) is excluded from the scan.
fn is_skipped(entry: &DirEntry, output_root: &Path) -> bool {
    // Never skip the traversal root itself, even when it is a dot path.
    if entry.depth() == 0 {
        return false;
    }

    let name = entry.file_name().to_str().unwrap_or_default();
    if name.starts_with('.') {
        return true;
    }
    if EXCLUDED_DIRS.contains(&name) {
        return true;
    }

    entry.path() == output_root
}
