//! Playlists.

use super::common::{Followers, Image};
use super::paging::Paging;
use super::track::Track;
use super::user::PublicUser;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Link to the tracks of a simplified playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaylistTracksRef {
    pub href: String,
    pub total: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimplifiedPlaylist {
    pub id: String,
    pub name: String,
    pub collaborative: bool,
    pub description: Option<String>,
    pub images: Vec<Image>,
    pub owner: PublicUser,
    pub public: Option<bool>,
    pub snapshot_id: String,
    pub tracks: PlaylistTracksRef,
    pub href: Option<String>,
    pub uri: String,
    pub external_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub collaborative: bool,
    pub description: Option<String>,
    pub followers: Option<Followers>,
    pub images: Vec<Image>,
    pub owner: PublicUser,
    pub public: Option<bool>,
    pub snapshot_id: String,
    pub tracks: Paging<PlaylistTrack>,
    pub href: Option<String>,
    pub uri: String,
    pub external_urls: HashMap<String, String>,
}

/// A track entry inside a playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaylistTrack {
    /// `None` for very old playlists
    pub added_at: Option<DateTime<Utc>>,
    pub added_by: Option<PublicUser>,
    pub is_local: bool,
    /// `None` when the track is no longer available
    pub track: Option<Track>,
}

/// Returned by the playlist modification endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

/// Body for creating a playlist or changing its details.
///
/// Unset fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaylistDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlaylistDetails {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    #[must_use]
    pub fn collaborative(mut self, collaborative: bool) -> Self {
        self.collaborative = Some(collaborative);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A track to remove from a playlist, optionally pinned to positions.
///
/// Without positions every occurrence of the URI is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistTrackRemoval {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<u32>>,
}

impl PlaylistTrackRemoval {
    pub fn uri(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            positions: None,
        }
    }

    pub fn at_positions(uri: impl Into<String>, positions: Vec<u32>) -> Self {
        Self {
            uri: uri.into(),
            positions: Some(positions),
        }
    }
}

impl From<&str> for PlaylistTrackRemoval {
    fn from(uri: &str) -> Self {
        Self::uri(uri)
    }
}

impl From<String> for PlaylistTrackRemoval {
    fn from(uri: String) -> Self {
        Self::uri(uri)
    }
}
