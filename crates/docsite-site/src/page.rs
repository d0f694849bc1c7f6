//! Page and index composition.

use std::fmt::Write;

use docsite_content::{ABOUT_KEY, ContentTable, NOT_FOUND_KEY, PageRecord};
use docsite_render::{Highlighter, escape_html, render_markdown};

use crate::layout::{back_nav, card_link, document_shell, hero_image};

/// Presentation options shared by all pages.
#[derive(Clone, Debug)]
pub struct SiteOptions {
    /// Site name, shown in the header and browser-tab title.
    pub site_name: String,
    /// URL prefix under which documentation pages are served.
    pub docs_prefix: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            site_name: "Blockstack".to_owned(),
            docs_prefix: "/docs".to_owned(),
        }
    }
}

/// A composed page, ready to serve.
///
/// Recomputed on every request; never persisted.
#[derive(Clone, Debug)]
pub struct PageView {
    /// Browser-tab title (`{site_name} - {page title}`).
    pub document_title: String,
    /// Full HTML document.
    pub html: String,
}

/// Compose the document for a resolved page key.
///
/// Unknown keys fall back to the not-found record; the table guarantees it
/// exists. The back-navigation link is omitted on the about page, and the
/// next-article teaser appears only when the record's `next` pointer
/// resolves to a real record.
#[must_use]
pub fn compose_page(
    table: &ContentTable,
    key: &str,
    highlighter: &dyn Highlighter,
    options: &SiteOptions,
) -> PageView {
    let record = table.record_or_not_found(key);
    let body = render_markdown(&record.markdown, highlighter);
    let document_title = format!("{} - {}", options.site_name, record.title);

    let mut content = String::with_capacity(body.as_str().len() + 1024);
    content.push_str(&hero_image(&record.image));
    content.push('\n');

    if key != ABOUT_KEY {
        content.push_str(&back_nav(&options.docs_prefix));
        content.push('\n');
    }

    write!(
        content,
        "<section class=\"docs-page\">\n<h1>{title}</h1>\n\
         <div class=\"markdown-body\">{body}</div>\n",
        title = escape_html(&record.title),
        body = body,
    )
    .unwrap();

    if let Some((next_key, next)) = table.next_record(record) {
        content.push_str(&next_article_teaser(&options.docs_prefix, next_key, next));
        content.push('\n');
    }

    content.push_str("</section>");

    PageView {
        html: document_shell(&document_title, &options.site_name, &content),
        document_title,
    }
}

/// Compose the documentation index: a card per page, sorted by title.
///
/// The about and not-found pages are reachable through their own routes and
/// are left off the index.
#[must_use]
pub fn compose_index(table: &ContentTable, options: &SiteOptions) -> PageView {
    let document_title = format!("{} - Documentation", options.site_name);

    let mut entries: Vec<(&str, &PageRecord)> = table
        .iter()
        .filter(|(key, _)| *key != ABOUT_KEY && *key != NOT_FOUND_KEY)
        .collect();
    entries.sort_by(|(_, a), (_, b)| a.title.cmp(&b.title));

    let mut content = String::from("<section class=\"docs-index\">\n<h1>Documentation</h1>\n");
    for (key, record) in entries {
        content.push_str(&card_link(
            &format!("{}/{key}", options.docs_prefix),
            &record.title,
            &record.description,
            &record.image,
        ));
        content.push('\n');
    }
    content.push_str("</section>");

    PageView {
        html: document_shell(&document_title, &options.site_name, &content),
        document_title,
    }
}

/// Teaser card pointing to the next page in the reading sequence.
fn next_article_teaser(docs_prefix: &str, next_key: &str, next: &PageRecord) -> String {
    format!(
        "<div class=\"next-article\">\n<h3>Next Article</h3>\n{card}\n</div>",
        card = card_link(
            &format!("{docs_prefix}/{next_key}"),
            &next.title,
            &next.description,
            &next.image,
        )
    )
}
