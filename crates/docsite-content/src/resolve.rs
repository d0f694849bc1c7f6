//! Route-to-page-key resolution.

use std::collections::HashMap;

use crate::table::{ContentTable, NOT_FOUND_KEY};

/// Route path served by the about page.
pub const ABOUT_ROUTE: &str = "/about";

/// Page key of the about page.
pub const ABOUT_KEY: &str = "about";

/// Route parameter naming the requested documentation section.
pub const DOC_SECTION_PARAM: &str = "docSection";

/// Resolve a route path and its parameters to a page key.
///
/// The about route resolves to [`ABOUT_KEY`] unconditionally. Otherwise the
/// [`DOC_SECTION_PARAM`] parameter is used when its value names a key present
/// in the table. Everything else resolves to [`NOT_FOUND_KEY`].
#[must_use]
pub fn resolve_page_key(
    path: &str,
    params: &HashMap<String, String>,
    table: &ContentTable,
) -> String {
    if path == ABOUT_ROUTE {
        return ABOUT_KEY.to_owned();
    }

    if let Some(section) = params.get(DOC_SECTION_PARAM)
        && table.contains(section)
    {
        return section.clone();
    }

    NOT_FOUND_KEY.to_owned()
}
