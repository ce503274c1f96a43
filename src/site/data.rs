//! Persisted site data.
//!
//! `SiteData` is the one externally-visible snapshot of build state:
//! the effective configuration plus the ordered, content-stripped catalog.
//! It is serialized pretty-printed to `site-data.json` at the output root.

use crate::config::SiteConfig;
use crate::content::post::{Post, PostWithContent};
use crate::error::BuildError;
use serde::Serialize;

/// The persisted, externally-visible snapshot of build state.
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub config: SiteConfig,
    /// Content-stripped posts in published (descending-date) order
    pub posts: Vec<Post>,
}

impl SiteData {
    /// Strip `content` from each catalog entry and bundle with the config.
    ///
    /// A pure projection: the same catalog always yields byte-identical JSON.
    pub fn from_catalog(config: &SiteConfig, catalog: &[PostWithContent]) -> Self {
        Self {
            config: config.clone(),
            posts: catalog.iter().map(|entry| entry.post.clone()).collect(),
        }
    }

    /// Serialize to formatted JSON.
    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| BuildError::Render(format!("site data serialization: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use crate::content::frontmatter::RawAttributes;
    use crate::utils::date::Date;

    fn make_entry(path: &str, date: Date) -> PostWithContent {
        PostWithContent {
            post: Post {
                path: path.to_string(),
                title: "Title".to_string(),
                description: String::new(),
                keywords: String::new(),
                date,
                metadata: RawAttributes::new(),
            },
            content: "<h1>never persisted</h1>".to_string(),
        }
    }

    #[test]
    fn test_strips_content() {
        let catalog = vec![make_entry("posts/a", Date::from_ymd(2024, 1, 1))];
        let data = SiteData::from_catalog(&default_config(), &catalog);
        let json = data.to_json().unwrap();

        assert!(!json.contains("never persisted"));
        assert!(json.contains("\"posts/a\""));
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let catalog = vec![
            make_entry("posts/a", Date::from_ymd(2024, 2, 1)),
            make_entry("posts/b", Date::from_ymd(2024, 1, 1)),
        ];
        let config = default_config();

        let first = SiteData::from_catalog(&config, &catalog).to_json().unwrap();
        let second = SiteData::from_catalog(&config, &catalog).to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_preserves_catalog_order() {
        let catalog = vec![
            make_entry("posts/newest", Date::from_ymd(2024, 2, 1)),
            make_entry("posts/older", Date::from_ymd(2024, 1, 1)),
        ];
        let data = SiteData::from_catalog(&default_config(), &catalog);
        assert_eq!(data.posts[0].path, "posts/newest");
        assert_eq!(data.posts[1].path, "posts/older");
    }

    #[test]
    fn test_empty_catalog() {
        let data = SiteData::from_catalog(&default_config(), &[]);
        let json = data.to_json().unwrap();
        assert!(json.contains("\"posts\": []"));
    }

    #[test]
    fn test_json_shape() {
        let catalog = vec![make_entry("posts/a", Date::from_ymd(2024, 1, 1))];
        let data = SiteData::from_catalog(&default_config(), &catalog);
        let json = data.to_json().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["config"]["title"].is_string());
        assert_eq!(parsed["posts"][0]["date"], "2024-01-01");
        assert!(parsed["posts"][0]["metadata"].is_object());
    }
}
