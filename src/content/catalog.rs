//! Catalog building.
//!
//! Parses all scanned documents and sorts them into the published ordering.
//!
//! Per-document parses are mutually independent, so they fan out across a
//! rayon parallel iterator; collecting into `Result` is the join point and
//! short-circuits on the first failure, so a broken document never leaves a
//! partial catalog behind.

use crate::content::post::{PostWithContent, parse_document};
use crate::error::BuildError;
use crate::utils::date::Date;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Parse every scanned document and sort descending by date.
///
/// The sort is stable: documents sharing a date keep their scan order.
/// All posts in one build share the same fallback build date.
pub fn build_catalog(
    documents: &[PathBuf],
    root: &Path,
) -> Result<Vec<PostWithContent>, BuildError> {
    let today = Date::today();

    // Indexed collect preserves scan order in the joined result.
    let mut catalog: Vec<PostWithContent> = documents
        .par_iter()
        .map(|rel_path| parse_document(rel_path, root, today))
        .collect::<Result<_, _>>()?;

    catalog.sort_by(|a, b| b.post.date.cmp(&a.post.date));
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_doc(root: &Path, rel: &str, text: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
        PathBuf::from(rel)
    }

    fn dated(date: &str) -> String {
        format!("---\ndate: {date}\n---\nbody\n")
    }

    #[test]
    fn test_sorted_descending_by_date() {
        let dir = tempfile::tempdir().unwrap();
        let docs = vec![
            write_doc(dir.path(), "old.md", &dated("2020-05-01")),
            write_doc(dir.path(), "newest.md", &dated("2024-03-01")),
            write_doc(dir.path(), "middle.md", &dated("2022-01-15")),
        ];

        let catalog = build_catalog(&docs, dir.path()).unwrap();
        let paths: Vec<&str> = catalog.iter().map(|p| p.post.path.as_str()).collect();
        assert_eq!(paths, vec!["posts/newest", "posts/middle", "posts/old"]);
    }

    #[test]
    fn test_same_date_keeps_scan_order() {
        let dir = tempfile::tempdir().unwrap();
        let docs = vec![
            write_doc(dir.path(), "b.md", &dated("2024-01-01")),
            write_doc(dir.path(), "a.md", &dated("2024-01-01")),
            write_doc(dir.path(), "c.md", &dated("2024-01-01")),
        ];

        let catalog = build_catalog(&docs, dir.path()).unwrap();
        let paths: Vec<&str> = catalog.iter().map(|p| p.post.path.as_str()).collect();
        // input order, untouched by the stable sort
        assert_eq!(paths, vec!["posts/b", "posts/a", "posts/c"]);
    }

    #[test]
    fn test_entry_count_matches_documents() {
        let dir = tempfile::tempdir().unwrap();
        let docs = vec![
            write_doc(dir.path(), "a.md", "one\n"),
            write_doc(dir.path(), "n/b.md", "two\n"),
            write_doc(dir.path(), "n/d/c.md", "three\n"),
        ];

        let catalog = build_catalog(&docs, dir.path()).unwrap();
        assert_eq!(catalog.len(), docs.len());

        let mut paths: Vec<&str> = catalog.iter().map(|p| p.post.path.as_str()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), docs.len(), "catalog paths must be unique");
    }

    #[test]
    fn test_single_failure_aborts_whole_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let mut docs = vec![write_doc(dir.path(), "good.md", "fine\n")];
        docs.push(PathBuf::from("missing.md"));

        let err = build_catalog(&docs, dir.path()).unwrap_err();
        assert!(matches!(err, BuildError::Io(..)));
    }

    #[test]
    fn test_empty_document_set() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = build_catalog(&[], dir.path()).unwrap();
        assert!(catalog.is_empty());
    }
}
