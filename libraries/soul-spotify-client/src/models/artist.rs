//! Artists.

use super::common::{Followers, Image};
use super::paging::CursorPaging;
use super::track::Track;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimplifiedArtist {
    /// `None` for artists of local files
    pub id: Option<String>,
    pub name: String,
    pub href: Option<String>,
    pub uri: Option<String>,
    pub external_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub popularity: u32,
    pub followers: Option<Followers>,
    pub images: Vec<Image>,
    pub href: Option<String>,
    pub uri: String,
    pub external_urls: HashMap<String, String>,
}

/// Response of the batch artist lookup. Unknown ids come back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MultipleArtists {
    pub artists: Vec<Option<Artist>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistTopTracks {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RelatedArtists {
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FollowedArtists {
    pub artists: CursorPaging<Artist>,
}
