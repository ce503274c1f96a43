//! Canonical post records.
//!
//! `Post` is the **primary metadata structure** for documents, carrying the
//! catalog path and the defaulted metadata fields used by the site data,
//! sitemap and page renderer.
//!
//! # Field derivation
//!
//! | Field | Source | Fallback |
//! |-------|--------|----------|
//! | `path` | relative source path, extension stripped | - (always derived) |
//! | `title` | front-matter `title` | file base name |
//! | `description` | front-matter `description` | empty |
//! | `keywords` | front-matter `keywords` | empty |
//! | `date` | front-matter `date` (ISO calendar date) | build date |
//! | `metadata` | full front-matter mapping | empty mapping |
//!
//! Posts are immutable once constructed; no later stage mutates a record it
//! did not create.

use crate::content::frontmatter::{RawAttributes, split_front_matter};
use crate::content::markdown::markdown_to_html;
use crate::error::BuildError;
use crate::log;
use crate::utils::date::Date;
use serde::Serialize;
use std::{fs, path::Path};

/// Catalog namespace all documents are published under.
pub const POSTS_PREFIX: &str = "posts";

/// Metadata-only record for one document. Serialized into `site-data.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Catalog-relative identifier, e.g. `posts/notes/hello`
    pub path: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// Publication date as an ISO calendar date
    pub date: Date,
    /// Full front-matter mapping, retained for forward compatibility
    pub metadata: RawAttributes,
}

/// A post plus its converted body. Exists only transiently during rendering;
/// the content is stripped before anything is persisted.
#[derive(Debug, Clone)]
pub struct PostWithContent {
    pub post: Post,
    pub content: String,
}

/// Parse one source document into a [`PostWithContent`].
///
/// `rel_path` is relative to `root`; `today` is the shared build date used
/// as the fallback for documents without a parseable `date` attribute.
pub fn parse_document(
    rel_path: &Path,
    root: &Path,
    today: Date,
) -> Result<PostWithContent, BuildError> {
    let source = root.join(rel_path);
    let text = fs::read_to_string(&source).map_err(|err| BuildError::Io(source.clone(), err))?;

    let (attributes, body) = split_front_matter(&text, rel_path)?;
    let content = markdown_to_html(body)?;

    let title = attribute_text(&attributes, "title")
        .unwrap_or_else(|| file_stem(rel_path));
    let description = attribute_text(&attributes, "description").unwrap_or_default();
    let keywords = attribute_text(&attributes, "keywords").unwrap_or_default();
    let date = resolve_date(&attributes, rel_path, today);

    Ok(PostWithContent {
        post: Post {
            path: catalog_path(rel_path),
            title,
            description,
            keywords,
            date,
            metadata: attributes,
        },
        content,
    })
}

/// Derive the catalog path: strip the source extension, normalize separators
/// and prefix the catalog namespace. `notes/hello.md` -> `posts/notes/hello`.
pub fn catalog_path(rel_path: &Path) -> String {
    let stripped = rel_path.with_extension("");
    let slashed = stripped.to_string_lossy().replace('\\', "/");
    format!("{POSTS_PREFIX}/{slashed}")
}

/// Front-matter `date` if present and parseable, else the build date.
fn resolve_date(attributes: &RawAttributes, rel_path: &Path, today: Date) -> Date {
    let Some(raw) = attributes.get("date") else {
        return today;
    };
    let parsed = raw.as_str().and_then(Date::parse);
    if parsed.is_none() {
        log!("parse"; "{}: unparseable date {raw}, using build date", rel_path.display());
    }
    parsed.unwrap_or(today)
}

/// Read an attribute as display text. Strings pass through; other scalars
/// are coerced to their JSON representation; null counts as absent.
fn attribute_text(attributes: &RawAttributes, key: &str) -> Option<String> {
    match attributes.get(key)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// File base name with the source extension removed.
fn file_stem(rel_path: &Path) -> String {
    rel_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const TODAY: Date = Date::from_ymd(2026, 8, 6);

    fn write_doc(root: &Path, rel: &str, text: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
        PathBuf::from(rel)
    }

    #[test]
    fn test_catalog_path_strips_extension_and_prefixes() {
        assert_eq!(catalog_path(Path::new("notes/hello.md")), "posts/notes/hello");
        assert_eq!(catalog_path(Path::new("index.md")), "posts/index");
    }

    #[test]
    fn test_catalog_path_keeps_inner_dots() {
        assert_eq!(catalog_path(Path::new("notes/v1.2.md")), "posts/notes/v1.2");
    }

    #[test]
    fn test_full_front_matter() {
        let dir = tempfile::tempdir().unwrap();
        let rel = write_doc(
            dir.path(),
            "notes/hello.md",
            "---\ntitle: Hi\ndescription: greeting\nkeywords: a, b\ndate: 2024-01-01\n---\n# Hello\n",
        );

        let parsed = parse_document(&rel, dir.path(), TODAY).unwrap();
        assert_eq!(parsed.post.path, "posts/notes/hello");
        assert_eq!(parsed.post.title, "Hi");
        assert_eq!(parsed.post.description, "greeting");
        assert_eq!(parsed.post.keywords, "a, b");
        assert_eq!(parsed.post.date, Date::from_ymd(2024, 1, 1));
        assert_eq!(parsed.content, "<h1>Hello</h1>\n");
    }

    #[test]
    fn test_title_falls_back_to_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let rel = write_doc(dir.path(), "notes/hello.md", "# Hello\n");

        let parsed = parse_document(&rel, dir.path(), TODAY).unwrap();
        assert_eq!(parsed.post.title, "hello");
        assert_eq!(parsed.post.description, "");
        assert_eq!(parsed.post.keywords, "");
    }

    #[test]
    fn test_missing_date_uses_build_date() {
        let dir = tempfile::tempdir().unwrap();
        let rel = write_doc(dir.path(), "a.md", "---\ntitle: Hi\n---\nbody\n");

        let parsed = parse_document(&rel, dir.path(), TODAY).unwrap();
        assert_eq!(parsed.post.date, TODAY);
    }

    #[test]
    fn test_unparseable_date_uses_build_date() {
        let dir = tempfile::tempdir().unwrap();
        let rel = write_doc(dir.path(), "a.md", "---\ndate: next tuesday\n---\nbody\n");

        let parsed = parse_document(&rel, dir.path(), TODAY).unwrap();
        assert_eq!(parsed.post.date, TODAY);
    }

    #[test]
    fn test_metadata_retained_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let rel = write_doc(
            dir.path(),
            "a.md",
            "---\ntitle: Hi\ncustom: value\ntags: [x]\n---\nbody\n",
        );

        let parsed = parse_document(&rel, dir.path(), TODAY).unwrap();
        assert_eq!(parsed.post.metadata["custom"], "value");
        assert_eq!(parsed.post.metadata["tags"], serde_json::json!(["x"]));
        // recognized keys stay in the mapping too
        assert_eq!(parsed.post.metadata["title"], "Hi");
    }

    #[test]
    fn test_unreadable_source_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_document(Path::new("missing.md"), dir.path(), TODAY).unwrap_err();
        assert!(matches!(err, BuildError::Io(..)));
    }

    #[test]
    fn test_content_never_in_serialized_post() {
        let dir = tempfile::tempdir().unwrap();
        let rel = write_doc(dir.path(), "a.md", "# Hello\n");

        let parsed = parse_document(&rel, dir.path(), TODAY).unwrap();
        let json = serde_json::to_string(&parsed.post).unwrap();
        assert!(!json.contains("Hello</h1>"));
        assert!(!json.contains("\"content\""));
    }
}
