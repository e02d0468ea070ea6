//! GIF-related DTOs.

use gifvault_core::validation::rules::{valid_alias, valid_gif_id};
use gifvault_core::{FavoriteGif, Gif, GifFilter, GifId, GifPage, Pagination, UserId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default number of results per search page.
const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Query parameters for a GIF search.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchGifsQuery {
    #[validate(length(min = 1, max = 255, message = "q is required and must be at most 255 characters"))]
    pub q: String,

    #[validate(range(min = 1, message = "limit must be a positive integer"))]
    pub limit: Option<i64>,

    #[validate(range(min = 0, message = "offset must not be negative"))]
    pub offset: Option<i64>,
}

impl SearchGifsQuery {
    /// Converts the validated query into a provider filter, applying the
    /// default limit and offset when absent.
    #[must_use]
    pub fn into_filter(self) -> GifFilter {
        GifFilter::new(
            self.q,
            self.limit
                .map_or(DEFAULT_SEARCH_LIMIT, |limit| limit as u32),
            self.offset.map_or(0, |offset| offset as u32),
        )
    }
}

/// Request to save a favorite GIF.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveFavoriteGifRequest {
    #[validate(custom(function = valid_gif_id, message = "gif_id must contain only letters, digits, '_' and '-'"))]
    pub gif_id: String,

    #[validate(custom(function = valid_alias, message = "alias is required and must be at most 20 characters"))]
    pub alias: String,

    pub user_id: i64,
}

impl SaveFavoriteGifRequest {
    /// Converts the validated request into the domain favorite.
    #[must_use]
    pub fn into_favorite(self) -> FavoriteGif {
        FavoriteGif::new(UserId::new(self.user_id), GifId::new(self.gif_id), self.alias)
    }
}

/// Search response payload: the page of GIFs plus its pagination block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GifListResponse {
    pub gifs: Vec<Gif>,
    pub pagination: Pagination,
}

impl From<GifPage> for GifListResponse {
    fn from(page: GifPage) -> Self {
        Self {
            gifs: page.gifs,
            pagination: page.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_search() -> SearchGifsQuery {
        SearchGifsQuery {
            q: "batman".to_string(),
            limit: Some(10),
            offset: Some(1),
        }
    }

    #[test]
    fn test_search_query_valid() {
        assert!(valid_search().validate().is_ok());
    }

    #[test]
    fn test_search_query_missing_q() {
        let query = SearchGifsQuery {
            q: String::new(),
            limit: None,
            offset: None,
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_search_query_negative_limit() {
        let query = SearchGifsQuery {
            limit: Some(-10),
            ..valid_search()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_search_query_negative_offset() {
        let query = SearchGifsQuery {
            offset: Some(-5),
            ..valid_search()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_search_query_defaults_applied() {
        let query = SearchGifsQuery {
            q: "batman".to_string(),
            limit: None,
            offset: None,
        };

        let filter = query.into_filter();
        assert_eq!(filter.limit, 10);
        assert_eq!(filter.offset, 0);
    }

    #[test]
    fn test_search_query_explicit_values_kept() {
        let filter = valid_search().into_filter();
        assert_eq!(filter.q, "batman");
        assert_eq!(filter.limit, 10);
        assert_eq!(filter.offset, 1);
    }

    #[test]
    fn test_save_favorite_valid() {
        let request = SaveFavoriteGifRequest {
            gif_id: "3o7aD2d7hy9ktXNDP2".to_string(),
            alias: "eye roll".to_string(),
            user_id: 1,
        };
        assert!(request.validate().is_ok());

        let favorite = request.into_favorite();
        assert_eq!(favorite.user_id, UserId::new(1));
        assert_eq!(favorite.gif_id.as_str(), "3o7aD2d7hy9ktXNDP2");
    }

    #[test]
    fn test_save_favorite_rejects_bad_gif_id() {
        let request = SaveFavoriteGifRequest {
            gif_id: "id with spaces".to_string(),
            alias: "ok".to_string(),
            user_id: 1,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_save_favorite_rejects_long_alias() {
        let request = SaveFavoriteGifRequest {
            gif_id: "abc123".to_string(),
            alias: "this alias is far too long to fit".to_string(),
            user_id: 1,
        };
        assert!(request.validate().is_err());
    }
}
