//! Albums.

use super::artist::SimplifiedArtist;
use super::common::{Copyright, Image};
use super::paging::Paging;
use super::track::SimplifiedTrack;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimplifiedAlbum {
    pub id: Option<String>,
    pub name: String,
    /// `album`, `single` or `compilation`
    pub album_type: Option<String>,
    pub album_group: Option<String>,
    pub artists: Vec<SimplifiedArtist>,
    pub available_markets: Vec<String>,
    pub images: Vec<Image>,
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD` depending on the precision
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
    pub total_tracks: Option<u32>,
    pub href: Option<String>,
    pub uri: Option<String>,
    pub external_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub album_type: Option<String>,
    pub artists: Vec<SimplifiedArtist>,
    pub available_markets: Vec<String>,
    pub copyrights: Vec<Copyright>,
    pub external_ids: HashMap<String, String>,
    pub genres: Vec<String>,
    pub images: Vec<Image>,
    pub label: Option<String>,
    pub popularity: u32,
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
    pub total_tracks: Option<u32>,
    pub tracks: Option<Paging<SimplifiedTrack>>,
    pub href: Option<String>,
    pub uri: String,
    pub external_urls: HashMap<String, String>,
}

/// An album in the user's library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SavedAlbum {
    pub added_at: DateTime<Utc>,
    pub album: Album,
}

/// Response of the batch album lookup. Unknown ids come back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MultipleAlbums {
    pub albums: Vec<Option<Album>>,
}
