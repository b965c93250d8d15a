//! Playback state.

use super::common::Context;
use super::track::Track;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Device {
    pub id: Option<String>,
    pub name: String,
    /// `Computer`, `Smartphone`, `Speaker`, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub is_active: bool,
    pub is_private_session: bool,
    pub is_restricted: bool,
    pub volume_percent: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Devices {
    pub devices: Vec<Device>,
}

/// The track currently playing on the user's account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CurrentlyPlaying {
    pub context: Option<Context>,
    /// Unix millis when the data was fetched
    pub timestamp: u64,
    pub progress_ms: Option<u64>,
    pub is_playing: bool,
    pub item: Option<Track>,
    pub currently_playing_type: Option<String>,
}

/// Full playback state, including device and shuffle/repeat settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CurrentPlaybackState {
    pub device: Option<Device>,
    /// `off`, `track` or `context`
    pub repeat_state: String,
    pub shuffle_state: bool,
    pub context: Option<Context>,
    pub timestamp: u64,
    pub progress_ms: Option<u64>,
    pub is_playing: bool,
    pub item: Option<Track>,
    pub currently_playing_type: Option<String>,
}
