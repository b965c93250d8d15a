//! Catalog search.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{
    AlbumSearchResponse, ArtistSearchResponse, PlaylistSearchResponse, SearchType,
    TrackSearchResponse,
};
use crate::request::{Operation, Options};
use serde::de::DeserializeOwned;

impl SpotifyClient {
    /// Search the catalog for one or more item types.
    ///
    /// `T` is usually [`SearchResponse`](crate::models::SearchResponse) or one
    /// of the single-type responses.
    ///
    /// ```ignore
    /// let results: SearchResponse = client
    ///     .search("abba", &[SearchType::Artist, SearchType::Album], None)
    ///     .await?;
    /// ```
    pub async fn search<T: DeserializeOwned>(
        &self,
        query: &str,
        types: &[SearchType],
        options: Option<Options>,
    ) -> Result<T> {
        let types = types
            .iter()
            .map(SearchType::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let operation = Operation::get(self.endpoint("/search/"))
            .param("q", query)
            .param("type", types);
        self.execute(operation, options, false).await
    }

    /// Search the catalog for albums only.
    pub async fn search_albums(
        &self,
        query: &str,
        options: Option<Options>,
    ) -> Result<AlbumSearchResponse> {
        self.search(query, &[SearchType::Album], options).await
    }

    /// Search the catalog for artists only.
    pub async fn search_artists(
        &self,
        query: &str,
        options: Option<Options>,
    ) -> Result<ArtistSearchResponse> {
        self.search(query, &[SearchType::Artist], options).await
    }

    /// Search the catalog for tracks only.
    pub async fn search_tracks(
        &self,
        query: &str,
        options: Option<Options>,
    ) -> Result<TrackSearchResponse> {
        self.search(query, &[SearchType::Track], options).await
    }

    /// Search the catalog for playlists only.
    pub async fn search_playlists(
        &self,
        query: &str,
        options: Option<Options>,
    ) -> Result<PlaylistSearchResponse> {
        self.search(query, &[SearchType::Playlist], options).await
    }
}
