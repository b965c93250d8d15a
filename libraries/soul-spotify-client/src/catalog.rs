//! Album, track and artist lookups.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{
    Album, Artist, ArtistTopTracks, MultipleAlbums, MultipleArtists, MultipleTracks, Paging,
    RelatedArtists, SimplifiedAlbum, SimplifiedTrack, Track,
};
use crate::request::{encode_component, Operation, Options};

impl SpotifyClient {
    /// Get an album.
    pub async fn get_album(&self, album_id: &str, options: Option<Options>) -> Result<Album> {
        let path = format!("/albums/{}", encode_component(album_id));
        self.execute(Operation::get(self.endpoint(&path)), options, false)
            .await
    }

    /// Get the tracks of an album.
    pub async fn get_album_tracks(
        &self,
        album_id: &str,
        options: Option<Options>,
    ) -> Result<Paging<SimplifiedTrack>> {
        let path = format!("/albums/{}/tracks", encode_component(album_id));
        self.execute(Operation::get(self.endpoint(&path)), options, false)
            .await
    }

    /// Get several albums at once.
    pub async fn get_albums(
        &self,
        album_ids: &[&str],
        options: Option<Options>,
    ) -> Result<MultipleAlbums> {
        let operation = Operation::get(self.endpoint("/albums/")).param("ids", album_ids.join(","));
        self.execute(operation, options, false).await
    }

    /// Get a track.
    pub async fn get_track(&self, track_id: &str, options: Option<Options>) -> Result<Track> {
        let path = format!("/tracks/{}", encode_component(track_id));
        self.execute(Operation::get(self.endpoint(&path)), options, false)
            .await
    }

    /// Get several tracks at once.
    pub async fn get_tracks(
        &self,
        track_ids: &[&str],
        options: Option<Options>,
    ) -> Result<MultipleTracks> {
        let operation = Operation::get(self.endpoint("/tracks/")).param("ids", track_ids.join(","));
        self.execute(operation, options, false).await
    }

    /// Get an artist.
    pub async fn get_artist(&self, artist_id: &str, options: Option<Options>) -> Result<Artist> {
        let path = format!("/artists/{}", encode_component(artist_id));
        self.execute(Operation::get(self.endpoint(&path)), options, false)
            .await
    }

    /// Get several artists at once.
    pub async fn get_artists(
        &self,
        artist_ids: &[&str],
        options: Option<Options>,
    ) -> Result<MultipleArtists> {
        let operation =
            Operation::get(self.endpoint("/artists/")).param("ids", artist_ids.join(","));
        self.execute(operation, options, false).await
    }

    /// Get an artist's albums.
    ///
    /// Accepts `include_groups`, `market`, `limit` and `offset`.
    pub async fn get_artist_albums(
        &self,
        artist_id: &str,
        options: Option<Options>,
    ) -> Result<Paging<SimplifiedAlbum>> {
        let path = format!("/artists/{}/albums", encode_component(artist_id));
        self.execute(Operation::get(self.endpoint(&path)), options, false)
            .await
    }

    /// Get an artist's top tracks in a country.
    pub async fn get_artist_top_tracks(
        &self,
        artist_id: &str,
        country: &str,
        options: Option<Options>,
    ) -> Result<ArtistTopTracks> {
        let path = format!("/artists/{}/top-tracks", encode_component(artist_id));
        let operation = Operation::get(self.endpoint(&path)).param("country", country);
        self.execute(operation, options, false).await
    }

    /// Get artists similar to the given one.
    pub async fn get_artist_related_artists(
        &self,
        artist_id: &str,
        options: Option<Options>,
    ) -> Result<RelatedArtists> {
        let path = format!("/artists/{}/related-artists", encode_component(artist_id));
        self.execute(Operation::get(self.endpoint(&path)), options, false)
            .await
    }
}
