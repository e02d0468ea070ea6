//! GIF value objects shared between the provider client and the API layer.

use crate::GifId;
use serde::{Deserialize, Serialize};

/// A single image rendition of a GIF.
///
/// Width and height are kept as provider-supplied strings; the provider is
/// not consistent enough about them to coerce without losing information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRendition {
    pub url: String,
    pub width: String,
    pub height: String,
}

/// The fixed set of renditions carried for every GIF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifRenditions {
    pub original: ImageRendition,
    pub fixed_width: ImageRendition,
    pub fixed_height: ImageRendition,
}

/// A GIF from the upstream catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gif {
    pub id: GifId,
    pub url: String,
    pub title: String,
    pub images: GifRenditions,
}

/// Pagination block returned alongside search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub total_count: u64,
    pub count: u64,
    pub offset: u64,
}

impl Pagination {
    /// Creates a new pagination block.
    #[must_use]
    pub const fn new(total_count: u64, count: u64, offset: u64) -> Self {
        Self {
            total_count,
            count,
            offset,
        }
    }
}

/// An ordered page of search results with its pagination block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifPage {
    pub gifs: Vec<Gif>,
    pub pagination: Pagination,
}

impl GifPage {
    /// Creates an empty page.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            gifs: Vec::new(),
            pagination: Pagination::default(),
        }
    }

    /// Returns the number of GIFs on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gifs.len()
    }

    /// Returns true if the page holds no GIFs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gifs.is_empty()
    }
}

/// Search parameters for the upstream catalog.
///
/// Constructed once per request from an already-validated query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifFilter {
    pub q: String,
    pub limit: u32,
    pub offset: u32,
}

impl GifFilter {
    /// Creates a new filter.
    #[must_use]
    pub fn new(q: impl Into<String>, limit: u32, offset: u32) -> Self {
        Self {
            q: q.into(),
            limit,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page() {
        let page = GifPage::empty();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert_eq!(page.pagination, Pagination::new(0, 0, 0));
    }

    #[test]
    fn test_pagination_defaults_to_zero() {
        let pagination = Pagination::default();
        assert_eq!(pagination.total_count, 0);
        assert_eq!(pagination.count, 0);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn test_filter_construction() {
        let filter = GifFilter::new("batman", 10, 1);
        assert_eq!(filter.q, "batman");
        assert_eq!(filter.limit, 10);
        assert_eq!(filter.offset, 1);
    }
}
