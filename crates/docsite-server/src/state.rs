//! Application state.

use std::sync::Arc;

use docsite_content::ContentTable;
use docsite_render::Highlighter;
use docsite_site::SiteOptions;

/// Shared state for all request handlers.
pub(crate) struct AppState {
    /// Static content table, immutable for the life of the server.
    pub(crate) table: ContentTable,
    /// Presentation options.
    pub(crate) options: SiteOptions,
    /// Injected highlighting capability for rendered code blocks.
    pub(crate) highlighter: Arc<dyn Highlighter>,
}
