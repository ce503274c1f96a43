//! Build error types.
//!
//! Every error is fatal to the whole build: a half-built catalog would
//! silently corrupt the published site, so there is no per-document
//! skip-and-continue policy anywhere in the pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal build errors, by pipeline stage.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Malformed `config.json`.
    #[error("Invalid config file `{0}`")]
    Config(PathBuf, #[source] serde_json::Error),

    /// Filesystem failure during scan, read or write.
    #[error("IO error at `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// Malformed front-matter block.
    #[error("Invalid front matter in `{0}`: {1}")]
    FrontMatter(PathBuf, String),

    /// Conversion or template engine produced an invalid result.
    #[error("Render error: {0}")]
    Render(String),
}
