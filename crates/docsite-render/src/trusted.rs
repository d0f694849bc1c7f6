//! Typed wrapper for pre-rendered markup.

use std::fmt;

/// An HTML string that is injected into documents without re-escaping.
///
/// The wrapper marks the trust boundary explicitly: anything inside has
/// either been produced by the renderer (which escapes text content) or
/// comes from the content table's markdown, which is intentionally not
/// sanitized. Do not construct one from request input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Wrap markup that is known to be safe to inject.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// View the markup as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
