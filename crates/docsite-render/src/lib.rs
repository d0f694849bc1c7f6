//! Markdown-to-HTML rendering for docsite.
//!
//! Conversion is delegated to pulldown-cmark for parsing; events are rendered
//! to semantic HTML5 by [`HtmlRenderer`]. The output is wrapped in
//! [`TrustedHtml`] to mark it as markup that is injected into documents
//! without re-escaping.
//!
//! Syntax highlighting is not implemented here. Code blocks pass through the
//! injected [`Highlighter`] capability, which may rewrite their content;
//! [`NullHighlighter`] leaves every block as escaped plain text with a
//! `language-*` class for client-side highlighters to pick up.
//!
//! # Example
//!
//! ```
//! use docsite_render::{NullHighlighter, render_markdown};
//!
//! let html = render_markdown("# Hello\n\n**Bold** text", &NullHighlighter);
//! assert!(html.as_str().contains("<strong>Bold</strong>"));
//! ```

mod highlight;
mod markdown;
mod renderer;
mod trusted;

pub use highlight::{Highlighter, NullHighlighter};
pub use markdown::{parser_options, render_markdown};
pub use renderer::{HtmlRenderer, escape_html};
pub use trusted::TrustedHtml;
