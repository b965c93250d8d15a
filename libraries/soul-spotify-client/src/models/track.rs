//! Tracks.

use super::album::SimplifiedAlbum;
use super::artist::SimplifiedArtist;
use super::common::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimplifiedTrack {
    /// `None` for local files
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<SimplifiedArtist>,
    pub available_markets: Vec<String>,
    pub disc_number: u32,
    pub duration_ms: u32,
    pub explicit: bool,
    pub is_local: bool,
    pub is_playable: Option<bool>,
    pub preview_url: Option<String>,
    pub track_number: u32,
    pub href: Option<String>,
    pub uri: String,
    pub external_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    pub album: Option<SimplifiedAlbum>,
    pub artists: Vec<SimplifiedArtist>,
    pub available_markets: Vec<String>,
    pub disc_number: u32,
    pub duration_ms: u32,
    pub explicit: bool,
    pub external_ids: HashMap<String, String>,
    pub is_local: bool,
    pub is_playable: Option<bool>,
    pub popularity: u32,
    pub preview_url: Option<String>,
    pub track_number: u32,
    pub href: Option<String>,
    pub uri: String,
    pub external_urls: HashMap<String, String>,
}

/// A track in the user's library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SavedTrack {
    pub added_at: DateTime<Utc>,
    pub track: Track,
}

/// One entry of the recently played list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayHistory {
    pub track: Track,
    pub played_at: DateTime<Utc>,
    pub context: Option<Context>,
}

/// Response of the batch track lookup. Unknown ids come back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MultipleTracks {
    pub tracks: Vec<Option<Track>>,
}
