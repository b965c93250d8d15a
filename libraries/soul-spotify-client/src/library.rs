//! "Your Music" library, top items and listening history.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{Artist, CursorPaging, Paging, PlayHistory, SavedAlbum, SavedTrack, Track};
use crate::request::{Operation, Options};
use serde_json::json;

impl SpotifyClient {
    /// Get the tracks saved in the current user's library.
    ///
    /// Accepts `limit`, `offset` and `market`.
    pub async fn get_my_saved_tracks(
        &self,
        options: Option<Options>,
    ) -> Result<Paging<SavedTrack>> {
        let operation = Operation::get(self.endpoint("/me/tracks"));
        self.execute(operation, options, false).await
    }

    /// Save tracks to the current user's library.
    pub async fn add_to_my_saved_tracks(&self, track_ids: &[&str]) -> Result<()> {
        let operation = Operation::put(self.endpoint("/me/tracks")).body(json!({ "ids": track_ids }));
        self.execute_unit(operation, None).await
    }

    /// Remove tracks from the current user's library.
    pub async fn remove_from_my_saved_tracks(&self, track_ids: &[&str]) -> Result<()> {
        let operation =
            Operation::delete(self.endpoint("/me/tracks")).body(json!({ "ids": track_ids }));
        self.execute_unit(operation, None).await
    }

    /// Check which of the given tracks are saved, in request order.
    pub async fn contains_my_saved_tracks(&self, track_ids: &[&str]) -> Result<Vec<bool>> {
        let operation =
            Operation::get(self.endpoint("/me/tracks/contains")).param("ids", track_ids.join(","));
        self.execute(operation, None, false).await
    }

    /// Get the albums saved in the current user's library.
    pub async fn get_my_saved_albums(
        &self,
        options: Option<Options>,
    ) -> Result<Paging<SavedAlbum>> {
        let operation = Operation::get(self.endpoint("/me/albums"));
        self.execute(operation, options, false).await
    }

    /// Save albums to the current user's library.
    pub async fn add_to_my_saved_albums(&self, album_ids: &[&str]) -> Result<()> {
        let operation = Operation::put(self.endpoint("/me/albums")).body(json!({ "ids": album_ids }));
        self.execute_unit(operation, None).await
    }

    /// Remove albums from the current user's library.
    pub async fn remove_from_my_saved_albums(&self, album_ids: &[&str]) -> Result<()> {
        let operation =
            Operation::delete(self.endpoint("/me/albums")).body(json!({ "ids": album_ids }));
        self.execute_unit(operation, None).await
    }

    /// Check which of the given albums are saved, in request order.
    pub async fn contains_my_saved_albums(&self, album_ids: &[&str]) -> Result<Vec<bool>> {
        let operation =
            Operation::get(self.endpoint("/me/albums/contains")).param("ids", album_ids.join(","));
        self.execute(operation, None, false).await
    }

    /// Get the current user's top artists.
    ///
    /// Accepts `limit`, `offset` and `time_range`.
    pub async fn get_my_top_artists(&self, options: Option<Options>) -> Result<Paging<Artist>> {
        let operation = Operation::get(self.endpoint("/me/top/artists"));
        self.execute(operation, options, false).await
    }

    /// Get the current user's top tracks.
    pub async fn get_my_top_tracks(&self, options: Option<Options>) -> Result<Paging<Track>> {
        let operation = Operation::get(self.endpoint("/me/top/tracks"));
        self.execute(operation, options, false).await
    }

    /// Get the current user's recently played tracks.
    ///
    /// Paged with the `after` / `before` cursors (unix millis).
    pub async fn get_my_recently_played_tracks(
        &self,
        options: Option<Options>,
    ) -> Result<CursorPaging<PlayHistory>> {
        let operation = Operation::get(self.endpoint("/me/player/recently-played"));
        self.execute(operation, options, false).await
    }
}
