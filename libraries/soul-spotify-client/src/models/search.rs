//! Search.

use super::album::SimplifiedAlbum;
use super::artist::Artist;
use super::paging::Paging;
use super::playlist::SimplifiedPlaylist;
use super::track::Track;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Item types accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search results for any combination of types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchResponse {
    pub albums: Option<Paging<SimplifiedAlbum>>,
    pub artists: Option<Paging<Artist>>,
    pub playlists: Option<Paging<SimplifiedPlaylist>>,
    pub tracks: Option<Paging<Track>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumSearchResponse {
    pub albums: Paging<SimplifiedAlbum>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistSearchResponse {
    pub artists: Paging<Artist>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaylistSearchResponse {
    pub playlists: Paging<SimplifiedPlaylist>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackSearchResponse {
    pub tracks: Paging<Track>,
}
