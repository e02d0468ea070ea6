//! Cache key generators for consistent key naming.
//!
//! Keys are built from the literal request parameters. Query text is NOT
//! normalized for case or whitespace; "batman" and "Batman" are distinct
//! entries.

use gifvault_core::{GifFilter, GifId};

/// Generate the cache key for a catalog search.
#[must_use]
pub fn search(filter: &GifFilter) -> String {
    format!(
        "gifs_search:{}:limit_{}:offset_{}",
        filter.q, filter.limit, filter.offset
    )
}

/// Generate the cache key for a single-GIF lookup.
#[must_use]
pub fn show(id: &GifId) -> String {
    format!("gif_show:{}", id)
}
