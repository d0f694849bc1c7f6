//! Static content table and route resolution for docsite.
//!
//! Documentation pages are stored as a flat JSON table mapping page keys to
//! [`PageRecord`] entries (title, description, hero image, markdown body, and
//! an optional pointer to the next page in the reading sequence). The table
//! is loaded once at startup and is immutable afterwards.
//!
//! Route resolution turns a request path and its parameters into a page key.
//! Unknown routes resolve to the fixed not-found key, whose presence in the
//! table is enforced at load time so lookups cannot fail at request time.

mod resolve;
mod table;

pub use resolve::{ABOUT_KEY, ABOUT_ROUTE, DOC_SECTION_PARAM, resolve_page_key};
pub use table::{ContentError, ContentTable, NOT_FOUND_KEY, PageRecord};
