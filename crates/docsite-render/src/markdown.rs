//! Markdown conversion entry point.

use pulldown_cmark::{Options, Parser};

use crate::highlight::Highlighter;
use crate::renderer::HtmlRenderer;
use crate::trusted::TrustedHtml;

/// Parser options for GitHub-flavored markdown.
///
/// Tables, strikethrough, and task lists are enabled. Smart punctuation is
/// deliberately left off: typographic substitution would rewrite quotes and
/// dashes inside prose that the content authors wrote literally.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Convert a markdown string to trusted HTML.
///
/// Raw HTML in the source passes through unsanitized, and soft line breaks
/// stay soft (no `<br>` conversion). After conversion, the first generated
/// hyperlink is patched to open in a new browsing context; later links are
/// untouched.
#[must_use]
pub fn render_markdown(markdown: &str, highlighter: &dyn Highlighter) -> TrustedHtml {
    let parser = Parser::new_ext(markdown, parser_options());
    let html = HtmlRenderer::new(highlighter).render(parser);
    TrustedHtml::new(patch_first_link(html))
}

/// Patch the first anchor in rendered HTML to open in a new tab.
///
/// Only the literal first occurrence of `<a href="` is rewritten.
fn patch_first_link(html: String) -> String {
    html.replacen(r#"<a href=""#, r#"<a target="_blank" href=""#, 1)
}
