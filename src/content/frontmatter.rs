//! Front-matter extraction.
//!
//! Splits an optional `---`-delimited YAML block from the top of a document
//! and parses it into an open attribute mapping. The mapping is retained
//! verbatim on the [`Post`](super::post::Post) record, so unrecognized keys
//! survive the build.
//!
//! A document without an opening fence (or with an unterminated one) has no
//! front matter: the whole text is the body and the attributes are empty.
//! A fenced block that is not valid YAML, or not a mapping, fails the build.

use crate::error::BuildError;
use std::path::Path;

/// Attributes extracted verbatim from a document's front-matter block.
pub type RawAttributes = serde_json::Map<String, serde_json::Value>;

/// Front-matter fence.
const FENCE: &str = "---";

/// Split a document into its front-matter attributes and prose body.
pub fn split_front_matter<'a>(
    text: &'a str,
    source: &Path,
) -> Result<(RawAttributes, &'a str), BuildError> {
    let Some((raw, body)) = split_raw(text) else {
        return Ok((RawAttributes::new(), text));
    };

    let value: serde_json::Value = serde_yaml::from_str(raw)
        .map_err(|err| BuildError::FrontMatter(source.to_path_buf(), err.to_string()))?;

    match value {
        serde_json::Value::Null => Ok((RawAttributes::new(), body)),
        serde_json::Value::Object(attributes) => Ok((attributes, body)),
        other => Err(BuildError::FrontMatter(
            source.to_path_buf(),
            format!("expected a mapping, got {other}"),
        )),
    }
}

/// Locate the fenced block. Returns `(yaml, body)` or `None` when the text
/// does not start with a terminated fence pair.
fn split_raw(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix(FENCE)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == FENCE {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
