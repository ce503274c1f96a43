//! Sitemap generation.
//!
//! Generates a sitemap.xml document listing the site root followed by every
//! post, for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <changefreq>daily</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::content::post::Post;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Sitemap data structure
pub struct Sitemap {
    /// List of URL entries, root first
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (optional, YYYY-MM-DD format)
    lastmod: Option<String>,
    changefreq: &'static str,
    priority: &'static str,
}

impl Sitemap {
    /// Build the sitemap from the ordered catalog.
    ///
    /// `base_url` must already end with a path separator (see
    /// [`SiteConfig::base_url_normalized`](crate::config::SiteConfig::base_url_normalized)).
    /// The root entry comes first, then one entry per post in catalog order.
    pub fn from_posts(base_url: &str, posts: &[Post]) -> Self {
        let mut urls = Vec::with_capacity(posts.len() + 1);
        urls.push(UrlEntry {
            loc: base_url.to_string(),
            lastmod: None,
            changefreq: "daily",
            priority: "1.0",
        });
        urls.extend(posts.iter().map(|post| UrlEntry {
            loc: format!("{base_url}{}.html", post.path),
            lastmod: Some(post.date.to_string()),
            changefreq: "weekly",
            priority: "0.8",
        }));

        Self { urls }
    }

    /// Generate sitemap XML string.
    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.changefreq
            ));
            xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
