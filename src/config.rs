//! Site configuration management for `config.json`.
//!
//! The effective configuration is produced by overlaying an optional
//! user-supplied JSON object onto built-in defaults:
//!
//! - a missing `config.json` leaves the defaults untouched
//! - a malformed `config.json` fails the whole build, before any output
//!   directory mutation
//! - top-level fields present in the user object overwrite the matching
//!   default field; `theme` is replaced as a whole, never merged per field
//!
//! # Example
//!
//! ```json
//! {
//!   "title": "My Vault",
//!   "description": "Notes published with diamond",
//!   "baseUrl": "https://example.com/",
//!   "theme": { "primary": "#0ea5e9", "secondary": "#f59e0b" }
//! }
//! ```

use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Fixed config file name, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Accent colors applied to the rendered pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
}

/// Effective site configuration.
///
/// Always fully populated after [`SiteConfig::load`]; downstream components
/// never handle missing fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

/// User-supplied overlay: every field optional, unknown keys ignored.
///
/// Scalar fields are taken as raw JSON values and coerced to text, so a
/// non-string `title` renders as its JSON representation instead of failing
/// the build.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigOverlay {
    title: Option<serde_json::Value>,
    description: Option<serde_json::Value>,
    keywords: Option<serde_json::Value>,
    base_url: Option<serde_json::Value>,
    theme: Option<Theme>,
}

/// Built-in default configuration.
pub fn default_config() -> SiteConfig {
    SiteConfig {
        title: "Diamond Documentation".into(),
        description: "Documentation generated with Diamond".into(),
        keywords: String::new(),
        base_url: "/".into(),
        theme: Some(Theme {
            primary: "#3b82f6".into(),
            secondary: "#10b981".into(),
        }),
    }
}

impl SiteConfig {
    /// Parse configuration from a JSON string and overlay it on the defaults.
    pub fn from_str(content: &str, path: &Path) -> Result<Self, BuildError> {
        let overlay: ConfigOverlay = serde_json::from_str(content)
            .map_err(|err| BuildError::Config(path.to_path_buf(), err))?;
        Ok(default_config().merged(overlay))
    }

    /// Load configuration from `config.json` under `root`.
    ///
    /// An absent file yields the built-in defaults untouched.
    pub fn load(root: &Path) -> Result<Self, BuildError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(default_config());
        }
        let content =
            fs::read_to_string(&path).map_err(|err| BuildError::Io(path.clone(), err))?;
        Self::from_str(&content, &path)
    }

    /// Base URL normalized to always end with a path separator,
    /// ready for sitemap location concatenation.
    pub fn base_url_normalized(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }

    fn merged(mut self, overlay: ConfigOverlay) -> Self {
        if let Some(title) = overlay.title {
            self.title = text_value(&title);
        }
        if let Some(description) = overlay.description {
            self.description = text_value(&description);
        }
        if let Some(keywords) = overlay.keywords {
            self.keywords = text_value(&keywords);
        }
        if let Some(base_url) = overlay.base_url {
            self.base_url = text_value(&base_url);
        }
        if let Some(theme) = overlay.theme {
            self.theme = Some(theme);
        }
        self
    }
}

/// Coerce a JSON value to display text. Strings pass through unquoted.
fn text_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
