//! Pure conversions from the provider's wire format to domain values.
//!
//! Deserialization is strict for GIF objects: a record missing its id, url,
//! title or any of the three renditions fails to parse instead of being
//! default-filled. The pagination block is the opposite: each field falls
//! back to 0 when the provider omits it.

use gifvault_core::{Gif, GifId, GifPage, GifRenditions, ImageRendition, Pagination};
use serde::Deserialize;

/// One image rendition as transmitted by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    pub url: String,
    pub width: String,
    pub height: String,
}

/// The rendition set carried by every GIF object.
///
/// The provider sends many more renditions; only these three are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct RawImages {
    pub original_still: RawImage,
    pub fixed_width: RawImage,
    pub fixed_height: RawImage,
}

/// A GIF object as transmitted by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGif {
    pub id: String,
    pub url: String,
    pub title: String,
    pub images: RawImages,
}

/// Pagination block of a search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPagination {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub offset: u64,
}

/// Envelope of a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchEnvelope {
    #[serde(default)]
    pub data: Vec<RawGif>,
    pub pagination: Option<RawPagination>,
}

/// Envelope of a single-GIF lookup response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLookupEnvelope {
    pub data: RawGif,
}

impl From<RawImage> for ImageRendition {
    fn from(raw: RawImage) -> Self {
        Self {
            url: raw.url,
            width: raw.width,
            height: raw.height,
        }
    }
}

impl From<RawGif> for Gif {
    fn from(raw: RawGif) -> Self {
        Self {
            id: GifId::new(raw.id),
            url: raw.url,
            title: raw.title,
            images: GifRenditions {
                original: raw.images.original_still.into(),
                fixed_width: raw.images.fixed_width.into(),
                fixed_height: raw.images.fixed_height.into(),
            },
        }
    }
}

impl From<RawPagination> for Pagination {
    fn from(raw: RawPagination) -> Self {
        Self {
            total_count: raw.total_count,
            count: raw.count,
            offset: raw.offset,
        }
    }
}

impl From<RawSearchEnvelope> for GifPage {
    fn from(raw: RawSearchEnvelope) -> Self {
        Self {
            gifs: raw.data.into_iter().map(Gif::from).collect(),
            pagination: raw.pagination.map(Pagination::from).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_gif_json() -> serde_json::Value {
        json!({
            "id": "3o7aD2d7hy9ktXNDP2",
            "url": "https://giphy.com/gifs/batman-3o7aD2d7hy9ktXNDP2",
            "title": "Batman Eye Roll GIF",
            "images": {
                "original_still": {"url": "https://i.giphy.com/o.gif", "width": "480", "height": "270"},
                "fixed_width": {"url": "https://i.giphy.com/w.gif", "width": "200", "height": "113"},
                "fixed_height": {"url": "https://i.giphy.com/h.gif", "width": "356", "height": "200"}
            }
        })
    }

    #[test]
    fn test_gif_renditions_match_wire_fields() {
        let raw: RawGif = serde_json::from_value(raw_gif_json()).unwrap();
        let gif = Gif::from(raw);

        assert_eq!(gif.id.as_str(), "3o7aD2d7hy9ktXNDP2");
        assert_eq!(gif.title, "Batman Eye Roll GIF");
        assert_eq!(gif.images.original.url, "https://i.giphy.com/o.gif");
        assert_eq!(gif.images.original.width, "480");
        assert_eq!(gif.images.fixed_width.height, "113");
        assert_eq!(gif.images.fixed_height.width, "356");
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let raw_a: RawGif = serde_json::from_value(raw_gif_json()).unwrap();
        let raw_b: RawGif = serde_json::from_value(raw_gif_json()).unwrap();

        assert_eq!(Gif::from(raw_a), Gif::from(raw_b));
    }

    #[test]
    fn test_missing_rendition_is_a_parse_failure() {
        let mut value = raw_gif_json();
        value["images"].as_object_mut().unwrap().remove("fixed_width");

        assert!(serde_json::from_value::<RawGif>(value).is_err());
    }

    #[test]
    fn test_missing_title_is_a_parse_failure() {
        let mut value = raw_gif_json();
        value.as_object_mut().unwrap().remove("title");

        assert!(serde_json::from_value::<RawGif>(value).is_err());
    }

    #[test]
    fn test_dimensions_stay_strings() {
        let raw: RawGif = serde_json::from_value(raw_gif_json()).unwrap();
        let gif = Gif::from(raw);

        // Provider strings pass through untouched, no numeric coercion.
        assert_eq!(gif.images.original.width, "480");
        assert_eq!(gif.images.original.height, "270");
    }

    #[test]
    fn test_search_envelope_with_pagination() {
        let value = json!({
            "data": [raw_gif_json(), raw_gif_json()],
            "pagination": {"total_count": 57, "count": 2, "offset": 1}
        });

        let raw: RawSearchEnvelope = serde_json::from_value(value).unwrap();
        let page = GifPage::from(raw);

        assert_eq!(page.len(), 2);
        assert_eq!(page.pagination, Pagination::new(57, 2, 1));
    }

    #[test]
    fn test_search_envelope_without_pagination_defaults_to_zero() {
        let value = json!({"data": []});

        let raw: RawSearchEnvelope = serde_json::from_value(value).unwrap();
        let page = GifPage::from(raw);

        assert!(page.is_empty());
        assert_eq!(page.pagination, Pagination::new(0, 0, 0));
    }

    #[test]
    fn test_search_envelope_with_partial_pagination() {
        let value = json!({"data": [], "pagination": {"total_count": 10}});

        let raw: RawSearchEnvelope = serde_json::from_value(value).unwrap();
        let page = GifPage::from(raw);

        assert_eq!(page.pagination, Pagination::new(10, 0, 0));
    }

    #[test]
    fn test_search_envelope_missing_data_defaults_to_empty() {
        let value = json!({"pagination": {"total_count": 0, "count": 0, "offset": 0}});

        let raw: RawSearchEnvelope = serde_json::from_value(value).unwrap();
        let page = GifPage::from(raw);

        assert!(page.is_empty());
    }

    #[test]
    fn test_extra_wire_fields_are_ignored() {
        let mut value = raw_gif_json();
        value["rating"] = json!("g");
        value["images"]["downsized"] =
            json!({"url": "https://i.giphy.com/d.gif", "width": "100", "height": "57"});

        let raw: RawGif = serde_json::from_value(value).unwrap();
        let gif = Gif::from(raw);
        assert_eq!(gif.id.as_str(), "3o7aD2d7hy9ktXNDP2");
    }
}
