//! Audio features and analysis.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{AudioAnalysis, AudioFeatures, MultipleAudioFeatures};
use crate::request::{encode_component, Operation};

impl SpotifyClient {
    /// Get the audio features of a track.
    pub async fn get_audio_features_for_track(&self, track_id: &str) -> Result<AudioFeatures> {
        let path = format!("/audio-features/{}", encode_component(track_id));
        self.execute(Operation::get(self.endpoint(&path)), None, false)
            .await
    }

    /// Get the audio features of several tracks.
    pub async fn get_audio_features_for_tracks(
        &self,
        track_ids: &[&str],
    ) -> Result<MultipleAudioFeatures> {
        let operation =
            Operation::get(self.endpoint("/audio-features")).param("ids", track_ids.join(","));
        self.execute(operation, None, false).await
    }

    /// Get the full audio analysis of a track.
    pub async fn get_audio_analysis_for_track(&self, track_id: &str) -> Result<AudioAnalysis> {
        let path = format!("/audio-analysis/{}", encode_component(track_id));
        self.execute(Operation::get(self.endpoint(&path)), None, false)
            .await
    }
}
