//! Read-only playback endpoints.
//!
//! While nothing is playing the playback state endpoints answer with
//! `204 No Content`, which surfaces as
//! `SpotifyError::Api { status: 204, body: Null }`.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{CurrentPlaybackState, CurrentlyPlaying, Devices};
use crate::request::{Operation, Options};

impl SpotifyClient {
    /// Get the devices available for playback.
    pub async fn get_my_devices(&self) -> Result<Devices> {
        let operation = Operation::get(self.endpoint("/me/player/devices"));
        self.execute(operation, None, false).await
    }

    /// Get the current playback state, device and settings included.
    pub async fn get_my_current_playback_state(
        &self,
        options: Option<Options>,
    ) -> Result<CurrentPlaybackState> {
        let operation = Operation::get(self.endpoint("/me/player"));
        self.execute(operation, options, false).await
    }

    /// Get the track currently playing.
    pub async fn get_my_currently_playing_track(
        &self,
        options: Option<Options>,
    ) -> Result<CurrentlyPlaying> {
        let operation = Operation::get(self.endpoint("/me/player/currently-playing"));
        self.execute(operation, options, false).await
    }
}
