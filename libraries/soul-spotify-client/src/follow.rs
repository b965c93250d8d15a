//! Following users, artists and playlists.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::FollowedArtists;
use crate::request::{encode_component, Operation, Options};
use serde_json::json;

/// What the `/me/following` endpoints operate on.
#[derive(Debug, Clone, Copy)]
enum FollowType {
    Artist,
    User,
}

impl FollowType {
    fn as_str(self) -> &'static str {
        match self {
            FollowType::Artist => "artist",
            FollowType::User => "user",
        }
    }
}

/// Add the `ids` and `type` parameters every `/me/following` call carries.
fn following(operation: Operation, kind: FollowType, ids: &[&str]) -> Operation {
    operation
        .param("ids", ids.join(","))
        .param("type", kind.as_str())
}

fn playlist_followers_path(owner_id: &str, playlist_id: &str) -> String {
    format!(
        "/users/{}/playlists/{}/followers",
        encode_component(owner_id),
        encode_component(playlist_id)
    )
}

impl SpotifyClient {
    /// Follow one or more users.
    pub async fn follow_users(&self, user_ids: &[&str]) -> Result<()> {
        let operation = Operation::put(self.endpoint("/me/following/"));
        self.execute_unit(following(operation, FollowType::User, user_ids), None)
            .await
    }

    /// Follow one or more artists.
    pub async fn follow_artists(&self, artist_ids: &[&str]) -> Result<()> {
        let operation = Operation::put(self.endpoint("/me/following/"));
        self.execute_unit(
            following(operation, FollowType::Artist, artist_ids),
            None,
        )
        .await
    }

    /// Unfollow one or more users.
    pub async fn unfollow_users(&self, user_ids: &[&str]) -> Result<()> {
        let operation = Operation::delete(self.endpoint("/me/following/"));
        self.execute_unit(following(operation, FollowType::User, user_ids), None)
            .await
    }

    /// Unfollow one or more artists.
    pub async fn unfollow_artists(&self, artist_ids: &[&str]) -> Result<()> {
        let operation = Operation::delete(self.endpoint("/me/following/"));
        self.execute_unit(
            following(operation, FollowType::Artist, artist_ids),
            None,
        )
        .await
    }

    /// Check whether the current user follows the given users.
    pub async fn is_following_users(&self, user_ids: &[&str]) -> Result<Vec<bool>> {
        let operation = Operation::get(self.endpoint("/me/following/contains"));
        self.execute(
            following(operation, FollowType::User, user_ids),
            None,
            false,
        )
        .await
    }

    /// Check whether the current user follows the given artists.
    pub async fn is_following_artists(&self, artist_ids: &[&str]) -> Result<Vec<bool>> {
        let operation = Operation::get(self.endpoint("/me/following/contains"));
        self.execute(
            following(operation, FollowType::Artist, artist_ids),
            None,
            false,
        )
        .await
    }

    /// Get the artists the current user follows.
    ///
    /// Accepts `limit` and the `after` cursor.
    pub async fn get_followed_artists(&self, options: Option<Options>) -> Result<FollowedArtists> {
        let operation = Operation::get(self.endpoint("/me/following"))
            .param("type", FollowType::Artist.as_str());
        self.execute(operation, options, false).await
    }

    /// Follow a playlist.
    ///
    /// Options such as `public` end up in the request body.
    pub async fn follow_playlist(
        &self,
        owner_id: &str,
        playlist_id: &str,
        options: Option<Options>,
    ) -> Result<()> {
        let path = playlist_followers_path(owner_id, playlist_id);
        let operation = Operation::put(self.endpoint(&path)).body(json!({}));
        self.execute_unit(operation, options).await
    }

    /// Unfollow a playlist.
    pub async fn unfollow_playlist(&self, owner_id: &str, playlist_id: &str) -> Result<()> {
        let path = playlist_followers_path(owner_id, playlist_id);
        self.execute_unit(Operation::delete(self.endpoint(&path)), None)
            .await
    }

    /// Check whether the given users follow a playlist.
    pub async fn are_following_playlist(
        &self,
        owner_id: &str,
        playlist_id: &str,
        user_ids: &[&str],
    ) -> Result<Vec<bool>> {
        let path = format!(
            "{}/contains",
            playlist_followers_path(owner_id, playlist_id)
        );
        let operation = Operation::get(self.endpoint(&path)).param("ids", user_ids.join(","));
        self.execute(operation, None, false).await
    }
}
