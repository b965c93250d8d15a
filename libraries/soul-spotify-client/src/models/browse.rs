//! Browse categories, featured content and recommendations.

use super::album::SimplifiedAlbum;
use super::common::Image;
use super::paging::Paging;
use super::playlist::SimplifiedPlaylist;
use super::track::Track;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub href: Option<String>,
    pub icons: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Categories {
    pub categories: Paging<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CategoryPlaylists {
    pub playlists: Paging<SimplifiedPlaylist>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeaturedPlaylists {
    pub message: Option<String>,
    pub playlists: Paging<SimplifiedPlaylist>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NewReleases {
    pub albums: Paging<SimplifiedAlbum>,
}

/// How one seed contributed to a recommendation response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendationSeed {
    pub id: String,
    pub href: Option<String>,
    /// `artist`, `track` or `genre`
    #[serde(rename = "type")]
    pub kind: String,
    pub initial_pool_size: u32,
    pub after_filtering_size: u32,
    pub after_relinking_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Recommendations {
    pub seeds: Vec<RecommendationSeed>,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AvailableGenreSeeds {
    pub genres: Vec<String>,
}
