//! Page rendering.
//!
//! Turns catalog records into final markup using [maud](https://maud.lambda.xyz/)
//! compile-time templates. Two views exist:
//!
//! - **post**: one standalone document per catalog entry
//! - **home**: the index page over the whole catalog
//!
//! Both are pure functions from data to markup; every produced document is
//! prefixed with the standard doctype declaration. Theme colors from the
//! config are emitted as CSS custom properties so stylesheets can pick them
//! up without a rebuild of anything else.

use crate::config::{SiteConfig, Theme};
use crate::content::{Post, PostWithContent};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Number of posts shown in the home page's aside navigation.
///
/// Presentation policy only: the main listing always shows the full catalog.
const RECENT_POSTS: usize = 5;

/// Render the standalone document for one post.
pub fn render_post(config: &SiteConfig, entry: &PostWithContent) -> String {
    let post = &entry.post;
    let canonical = format!("/{}.html", post.path);

    let content = html! {
        article {
            header {
                h1 { (post.title) }
                div.post-date { (post.date) }
            }
            div.post-content {
                (PreEscaped(entry.content.as_str()))
            }
        }
    };

    base_document(
        config,
        &post.title,
        &post.description,
        &post.keywords,
        &canonical,
        content,
    )
    .into_string()
}

/// Render the index page over the full ordered catalog.
pub fn render_home(config: &SiteConfig, posts: &[Post]) -> String {
    let recent = &posts[..posts.len().min(RECENT_POSTS)];

    let content = html! {
        div.layout {
            aside {
                nav {
                    ul {
                        @for post in recent {
                            li {
                                a href=(post_href(post)) { (post.title) }
                            }
                        }
                    }
                }
            }
            main {
                h1 { "Latest Posts" }
                @for post in posts {
                    article.post-summary {
                        h2 {
                            a href=(post_href(post)) { (post.title) }
                        }
                        div.post-date { (post.date) }
                        @if !post.description.is_empty() {
                            p { (post.description) }
                        }
                        a href=(post_href(post)) { "Read more →" }
                    }
                }
            }
        }
    };

    base_document(
        config,
        &config.title,
        &config.description,
        &config.keywords,
        "/",
        content,
    )
    .into_string()
}

/// Site-rooted link to a post's rendered document.
fn post_href(post: &Post) -> String {
    format!("/{}.html", post.path)
}

/// Renders the base HTML document structure shared by both views.
fn base_document(
    config: &SiteConfig,
    title: &str,
    description: &str,
    keywords: &str,
    canonical: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(description);
                meta name="keywords" content=(keywords);
                link rel="canonical" href=(canonical);
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:type" content="website";
                meta name="twitter:card" content="summary";
                meta name="twitter:title" content=(title);
                meta name="twitter:description" content=(description);
                @if let Some(theme) = &config.theme {
                    style { (theme_css(theme)) }
                }
            }
            body {
                (content)
            }
        }
    }
}

/// CSS custom properties carrying the configured accent colors.
fn theme_css(theme: &Theme) -> String {
    format!(
        ":root{{--color-primary:{};--color-secondary:{};}}",
        theme.primary, theme.secondary
    )
}
