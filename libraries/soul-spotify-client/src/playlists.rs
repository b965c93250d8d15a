//! Playlist endpoints.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{
    Paging, Playlist, PlaylistDetails, PlaylistTrack, PlaylistTrackRemoval, SimplifiedPlaylist,
    SnapshotResponse,
};
use crate::request::{encode_component, Operation, Options};
use serde_json::{json, Value};

fn playlist_path(user_id: &str, playlist_id: &str) -> String {
    format!(
        "/users/{}/playlists/{}",
        encode_component(user_id),
        encode_component(playlist_id)
    )
}

fn playlist_tracks_path(user_id: &str, playlist_id: &str) -> String {
    format!("{}/tracks", playlist_path(user_id, playlist_id))
}

impl SpotifyClient {
    /// Get a user's playlists, or the current user's when `user_id` is `None`.
    pub async fn get_user_playlists(
        &self,
        user_id: Option<&str>,
        options: Option<Options>,
    ) -> Result<Paging<SimplifiedPlaylist>> {
        let path = match user_id {
            Some(user_id) => format!("/users/{}/playlists", encode_component(user_id)),
            None => "/me/playlists".to_string(),
        };
        self.execute(Operation::get(self.endpoint(&path)), options, false)
            .await
    }

    /// Get a playlist.
    ///
    /// Accepts `fields` and `market`.
    pub async fn get_playlist(
        &self,
        user_id: &str,
        playlist_id: &str,
        options: Option<Options>,
    ) -> Result<Playlist> {
        let path = playlist_path(user_id, playlist_id);
        self.execute(Operation::get(self.endpoint(&path)), options, false)
            .await
    }

    /// Get the tracks of a playlist.
    pub async fn get_playlist_tracks(
        &self,
        user_id: &str,
        playlist_id: &str,
        options: Option<Options>,
    ) -> Result<Paging<PlaylistTrack>> {
        let path = playlist_tracks_path(user_id, playlist_id);
        self.execute(Operation::get(self.endpoint(&path)), options, false)
            .await
    }

    /// Create a playlist for a user.
    ///
    /// Extra options are added to the request body next to `details`.
    pub async fn create_playlist(
        &self,
        user_id: &str,
        details: &PlaylistDetails,
        options: Option<Options>,
    ) -> Result<Playlist> {
        let path = format!("/users/{}/playlists", encode_component(user_id));
        let operation = Operation::post(self.endpoint(&path)).body(serde_json::to_value(details)?);
        self.execute(operation, options, false).await
    }

    /// Change a playlist's name, description or visibility.
    pub async fn change_playlist_details(
        &self,
        user_id: &str,
        playlist_id: &str,
        details: &PlaylistDetails,
    ) -> Result<()> {
        let path = playlist_path(user_id, playlist_id);
        let operation = Operation::put(self.endpoint(&path)).body(serde_json::to_value(details)?);
        self.execute_unit(operation, None).await
    }

    /// Add tracks to a playlist.
    ///
    /// The URIs travel in the body; options such as `position` always go to
    /// the query string.
    pub async fn add_tracks_to_playlist(
        &self,
        user_id: &str,
        playlist_id: &str,
        uris: &[&str],
        options: Option<Options>,
    ) -> Result<SnapshotResponse> {
        let path = playlist_tracks_path(user_id, playlist_id);
        let operation = Operation::post(self.endpoint(&path)).body(json!({ "uris": uris }));
        self.execute(operation, options, true).await
    }

    /// Replace all tracks of a playlist.
    pub async fn replace_tracks_in_playlist(
        &self,
        user_id: &str,
        playlist_id: &str,
        uris: &[&str],
    ) -> Result<()> {
        let path = playlist_tracks_path(user_id, playlist_id);
        let operation = Operation::put(self.endpoint(&path)).body(json!({ "uris": uris }));
        self.execute_unit(operation, None).await
    }

    /// Move a range of tracks inside a playlist.
    ///
    /// # Arguments
    /// * `range_start` - Position of the first track to move
    /// * `insert_before` - Position the range is moved in front of
    /// * `options` - `range_length` and `snapshot_id`, sent in the body
    pub async fn reorder_tracks_in_playlist(
        &self,
        user_id: &str,
        playlist_id: &str,
        range_start: u32,
        insert_before: u32,
        options: Option<Options>,
    ) -> Result<SnapshotResponse> {
        let path = playlist_tracks_path(user_id, playlist_id);
        let operation = Operation::put(self.endpoint(&path)).body(json!({
            "range_start": range_start,
            "insert_before": insert_before,
        }));
        self.execute(operation, options, false).await
    }

    /// Remove tracks from a playlist.
    pub async fn remove_tracks_from_playlist(
        &self,
        user_id: &str,
        playlist_id: &str,
        tracks: &[PlaylistTrackRemoval],
    ) -> Result<SnapshotResponse> {
        let body = json!({ "tracks": tracks });
        self.remove_playlist_tracks(user_id, playlist_id, body).await
    }

    /// Remove tracks from a specific snapshot of a playlist.
    pub async fn remove_tracks_from_playlist_with_snapshot_id(
        &self,
        user_id: &str,
        playlist_id: &str,
        tracks: &[PlaylistTrackRemoval],
        snapshot_id: &str,
    ) -> Result<SnapshotResponse> {
        let body = json!({ "tracks": tracks, "snapshot_id": snapshot_id });
        self.remove_playlist_tracks(user_id, playlist_id, body).await
    }

    /// Remove the tracks at the given positions of a playlist snapshot.
    pub async fn remove_tracks_from_playlist_in_positions(
        &self,
        user_id: &str,
        playlist_id: &str,
        positions: &[u32],
        snapshot_id: &str,
    ) -> Result<SnapshotResponse> {
        let body = json!({ "positions": positions, "snapshot_id": snapshot_id });
        self.remove_playlist_tracks(user_id, playlist_id, body).await
    }

    async fn remove_playlist_tracks(
        &self,
        user_id: &str,
        playlist_id: &str,
        body: Value,
    ) -> Result<SnapshotResponse> {
        let path = playlist_tracks_path(user_id, playlist_id);
        self.execute(Operation::delete(self.endpoint(&path)).body(body), None, false)
            .await
    }
}
