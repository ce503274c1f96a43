//! Site building orchestration.
//!
//! Coordinates the whole pipeline; every stage depends on the prior stage's
//! complete result, and only the per-document parse fans out.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── collect_documents() ──► relative source paths (scan order)
//!     │
//!     ├── build_catalog() ──► parse each document (rayon fan-out),
//!     │                       join, sort descending by date
//!     │
//!     ├── SiteData / Sitemap ──► content-stripped snapshot + XML
//!     │
//!     ├── render_post() / render_home() ──► final markup
//!     │
//!     └── OutputWriter ──► stage the tree, swap into dist/
//! ```

use crate::config::SiteConfig;
use crate::content::{build_catalog, collect_documents};
use crate::log;
use crate::output::{OUTPUT_DIR, OutputWriter};
use crate::render::{render_home, render_post};
use crate::site::{Sitemap, SiteData};
use anyhow::Result;
use std::path::Path;

/// Build the entire site under `root`.
///
/// Fails atomically: any error aborts the build before the staged output is
/// swapped in, so prior build output survives every failure mode.
pub fn build_site(config: &SiteConfig, root: &Path) -> Result<()> {
    let documents = collect_documents(root, Path::new(OUTPUT_DIR))?;
    log!("scan"; "found {} documents", documents.len());

    let catalog = build_catalog(&documents, root)?;

    let site_data = SiteData::from_catalog(config, &catalog);
    let sitemap = Sitemap::from_posts(&config.base_url_normalized(), &site_data.posts);

    // Render everything before touching the filesystem.
    log!("render"; "building {} pages", catalog.len() + 1);
    let pages: Vec<String> = catalog
        .iter()
        .map(|entry| render_post(config, entry))
        .collect();
    let index = render_home(config, &site_data.posts);

    let writer = OutputWriter::create(root)?;
    for (entry, markup) in catalog.iter().zip(&pages) {
        writer.write_post(&entry.post, markup)?;
    }
    writer.write_index(&index)?;
    writer.write_site_data(&site_data.to_json()?)?;
    writer.write_sitemap(&sitemap.into_xml())?;
    let output = writer.commit()?;

    log!("build"; "done -> {}", output.display());
    Ok(())
}
