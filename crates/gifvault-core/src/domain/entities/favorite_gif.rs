//! Favorite GIF entity.

use crate::{GifId, UserId};
use serde::{Deserialize, Serialize};

/// A user's personal alias for a catalog GIF.
///
/// The `(user_id, gif_id)` pair is unique across all favorites. That
/// invariant is enforced by the storage layer's unique index, not here:
/// two concurrent save attempts for the same pair can both pass any
/// application-level pre-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteGif {
    /// Owner of the favorite.
    pub user_id: UserId,

    /// The catalog GIF being aliased.
    pub gif_id: GifId,

    /// User-chosen alias, at most 20 characters.
    pub alias: String,
}

impl FavoriteGif {
    /// Creates a new favorite.
    #[must_use]
    pub fn new(user_id: UserId, gif_id: GifId, alias: impl Into<String>) -> Self {
        Self {
            user_id,
            gif_id,
            alias: alias.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_construction() {
        let favorite = FavoriteGif::new(UserId::new(3), GifId::new("abc123"), "my gif");
        assert_eq!(favorite.user_id, UserId::new(3));
        assert_eq!(favorite.gif_id.as_str(), "abc123");
        assert_eq!(favorite.alias, "my gif");
    }
}
