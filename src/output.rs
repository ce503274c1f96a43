//! Output tree materialization.
//!
//! The writer builds the whole site into a staging directory and swaps it
//! into place only once every artifact has been written. A build that fails
//! partway through leaves the previous output untouched; there is no window
//! where the published tree is half-populated.
//!
//! Only this module ever writes under the output root.

use crate::content::post::{POSTS_PREFIX, Post};
use crate::error::BuildError;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Output directory, relative to the working directory.
pub const OUTPUT_DIR: &str = "dist";

/// Staging directory the tree is assembled in before the swap.
const STAGING_DIR: &str = ".dist-staging";

/// Fixed file names at the output root.
const SITE_DATA_FILE: &str = "site-data.json";
const SITEMAP_FILE: &str = "sitemap.xml";
const INDEX_FILE: &str = "index.html";

/// Extension of rendered documents.
const HTML_EXT: &str = "html";

/// Writes the output tree into a staging directory, then swaps it in.
pub struct OutputWriter {
    staging: PathBuf,
    output: PathBuf,
}

impl OutputWriter {
    /// Prepare a fresh staging directory under `root`.
    ///
    /// Any staging leftovers from an earlier failed build are discarded.
    /// The posts subdirectory is created up front.
    pub fn create(root: &Path) -> Result<Self, BuildError> {
        let staging = root.join(STAGING_DIR);
        if staging.exists() {
            fs::remove_dir_all(&staging)
                .map_err(|err| BuildError::Io(staging.clone(), err))?;
        }
        let posts_dir = staging.join(POSTS_PREFIX);
        fs::create_dir_all(&posts_dir).map_err(|err| BuildError::Io(posts_dir, err))?;

        Ok(Self {
            staging,
            output: root.join(OUTPUT_DIR),
        })
    }

    /// Write one rendered post document, mirroring the source structure
    /// under the posts namespace. Intermediate directories are created.
    pub fn write_post(&self, post: &Post, markup: &str) -> Result<(), BuildError> {
        let dest = self.staging.join(format!("{}.{HTML_EXT}", post.path));
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| BuildError::Io(parent.to_path_buf(), err))?;
        }
        write_file(&dest, markup)
    }

    /// Write the rendered index document to the output root.
    pub fn write_index(&self, markup: &str) -> Result<(), BuildError> {
        write_file(&self.staging.join(INDEX_FILE), markup)
    }

    /// Write the formatted site-data JSON to the output root.
    pub fn write_site_data(&self, json: &str) -> Result<(), BuildError> {
        write_file(&self.staging.join(SITE_DATA_FILE), json)
    }

    /// Write the sitemap document to the output root.
    pub fn write_sitemap(&self, xml: &str) -> Result<(), BuildError> {
        write_file(&self.staging.join(SITEMAP_FILE), xml)
    }

    /// Replace any prior build output with the staged tree.
    ///
    /// Returns the final output path.
    pub fn commit(self) -> Result<PathBuf, BuildError> {
        if self.output.exists() {
            fs::remove_dir_all(&self.output)
                .map_err(|err| BuildError::Io(self.output.clone(), err))?;
        }
        fs::rename(&self.staging, &self.output)
            .map_err(|err| BuildError::Io(self.output.clone(), err))?;
        Ok(self.output)
    }
}

/// Whole-file overwrite.
fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    fs::write(path, content).map_err(|err| BuildError::Io(path.to_path_buf(), err))
}
