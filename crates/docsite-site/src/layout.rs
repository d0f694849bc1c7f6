//! HTML layout fragments.
//!
//! Small builders for the pieces every page shares: the document shell,
//! header, footer, hero image, back navigation, and teaser cards. Dynamic
//! values are escaped here; only the rendered markdown body is injected
//! unescaped, and it arrives as [`TrustedHtml`](docsite_render::TrustedHtml).

use std::fmt::Write;

use docsite_render::escape_html;

/// Stylesheet and script for client-side code highlighting.
///
/// Rendered code blocks carry `language-*` classes; highlight.js picks them
/// up after the document loads.
const HIGHLIGHT_ASSETS: &str = concat!(
    r#"<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github.min.css">"#,
    "\n",
    r#"<script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js"></script>"#,
    "\n",
    "<script>hljs.highlightAll();</script>"
);

/// Wrap page content in the full document shell with header and footer.
pub(crate) fn document_shell(document_title: &str, site_name: &str, content: &str) -> String {
    let mut html = String::with_capacity(content.len() + 1024);
    write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/css/docsite.css\">\n\
         </head>\n<body>\n\
         <header class=\"site-header\"><a class=\"site-name\" href=\"/\">{site}</a></header>\n\
         {content}\n\
         <footer class=\"site-footer\"><p>{site}</p></footer>\n\
         {highlight}\n\
         </body>\n</html>\n",
        title = escape_html(document_title),
        site = escape_html(site_name),
        highlight = HIGHLIGHT_ASSETS,
    )
    .unwrap();
    html
}

/// Hero image banner shown above the page title.
pub(crate) fn hero_image(image: &str) -> String {
    format!(
        r#"<div class="docs-header-image-wrapper"><img class="docs-header-image" src="{}"></div>"#,
        escape_html(image)
    )
}

/// "Back to docs" navigation link.
pub(crate) fn back_nav(docs_prefix: &str) -> String {
    format!(
        r#"<nav class="back-docs"><a href="{}">&laquo; Back to Docs</a></nav>"#,
        escape_html(docs_prefix)
    )
}

/// Card linking to another page, used for teasers and the docs index.
pub(crate) fn card_link(href: &str, title: &str, body: &str, image: &str) -> String {
    format!(
        r#"<a class="card-link" href="{href}"><img class="card-image" src="{image}"><h4 class="card-title">{title}</h4><p class="card-body">{body}</p></a>"#,
        href = escape_html(href),
        image = escape_html(image),
        title = escape_html(title),
        body = escape_html(body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shell_escapes_title() {
        let html = document_shell("A <b> title", "Site", "<p>body</p>");
        assert!(html.contains("<title>A &lt;b&gt; title</title>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_document_shell_includes_highlight_assets() {
        let html = document_shell("t", "Site", "");
        assert!(html.contains("highlight.min.js"));
        assert!(html.contains("hljs.highlightAll()"));
    }

    #[test]
    fn test_card_link_escapes_fields() {
        let html = card_link("/docs/a", "T & T", "a \"b\"", "/img.png");
        assert!(html.contains("T &amp; T"));
        assert!(html.contains("a &quot;b&quot;"));
        assert!(html.contains(r#"href="/docs/a""#));
    }

    #[test]
    fn test_back_nav() {
        let html = back_nav("/docs");
        assert!(html.contains(r#"<a href="/docs">"#));
        assert!(html.contains("Back to Docs"));
    }
}
