//! Audio features and analysis.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// High level acoustic attributes of a track.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioFeatures {
    pub id: String,
    pub acousticness: f32,
    pub danceability: f32,
    pub energy: f32,
    pub instrumentalness: f32,
    /// Pitch class, -1 when no key was detected
    pub key: i32,
    pub liveness: f32,
    /// Average loudness in dB
    pub loudness: f32,
    /// 1 = major, 0 = minor
    pub mode: i32,
    pub speechiness: f32,
    pub tempo: f32,
    pub time_signature: i32,
    pub valence: f32,
    pub duration_ms: u32,
    pub uri: String,
    pub track_href: Option<String>,
    pub analysis_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MultipleAudioFeatures {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

/// Bars, beats and tatums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeInterval {
    pub start: f32,
    pub duration: f32,
    pub confidence: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Section {
    pub start: f32,
    pub duration: f32,
    pub confidence: f32,
    pub loudness: f32,
    pub tempo: f32,
    pub key: i32,
    pub mode: i32,
    pub time_signature: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Segment {
    pub start: f32,
    pub duration: f32,
    pub confidence: f32,
    pub loudness_start: f32,
    pub loudness_max: f32,
    pub loudness_max_time: f32,
    pub pitches: Vec<f32>,
    pub timbre: Vec<f32>,
}

/// Low level analysis of a track's structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioAnalysis {
    pub bars: Vec<TimeInterval>,
    pub beats: Vec<TimeInterval>,
    pub tatums: Vec<TimeInterval>,
    pub sections: Vec<Section>,
    pub segments: Vec<Segment>,
    /// Track level summary, kept as raw JSON
    pub track: Value,
    pub meta: Value,
}
