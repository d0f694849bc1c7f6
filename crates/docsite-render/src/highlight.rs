//! Injected syntax-highlighting capability.
//!
//! Instead of reaching for an ambient global, the capability is passed in
//! explicitly and invoked for each code block as it is rendered, so every
//! render of a page highlights every block it contains.

/// Rewrites the content of rendered code blocks.
///
/// Implementations receive the fence language hint (if any) and the raw code
/// text, and return highlighted inner HTML. Returning `None` declines the
/// block, leaving it as escaped plain text.
///
/// Implementations are responsible for escaping: the returned markup is
/// injected into the `<code>` element verbatim.
pub trait Highlighter: Send + Sync {
    /// Highlight one code block, or decline it.
    fn highlight(&self, language: Option<&str>, code: &str) -> Option<String>;
}

/// Highlighter that declines every block.
///
/// Code blocks keep their `language-*` class, so a client-side highlighter
/// loaded by the page can still style them.
pub struct NullHighlighter;

impl Highlighter for NullHighlighter {
    fn highlight(&self, _language: Option<&str>, _code: &str) -> Option<String> {
        None
    }
}
