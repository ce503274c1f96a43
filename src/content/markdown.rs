//! Markdown conversion.
//!
//! Opaque conversion boundary: prose in, HTML markup out. The pipeline only
//! relies on this contract, never on engine internals, so any conforming
//! converter is substitutable. A conversion that cannot produce plain text
//! surfaces as a fatal [`BuildError::Render`].

use crate::error::BuildError;
use pulldown_cmark::{Options, Parser, html};

/// Markdown extensions enabled for vault documents.
fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Convert a markdown body to an HTML fragment.
pub fn markdown_to_html(text: &str) -> Result<String, BuildError> {
    let parser = Parser::new_ext(text, options());
    let mut markup = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut markup, parser);
    Ok(markup)
}
