//! Page composition for docsite.
//!
//! Takes a resolved page key, looks up its record in the content table,
//! renders the markdown body, and composes the full HTML document: browser
//! tab title, header, hero image, back navigation, body, next-article
//! teaser, and footer. Composition is a pure function of the table, the key,
//! and the site options; nothing is cached or mutated.

mod layout;
mod page;

pub use page::{PageView, SiteOptions, compose_index, compose_page};
