//! Browse and recommendation endpoints.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{
    AvailableGenreSeeds, Categories, Category, CategoryPlaylists, FeaturedPlaylists, NewReleases,
    Recommendations,
};
use crate::request::{encode_component, Operation, Options};

impl SpotifyClient {
    /// Get the playlists Spotify currently features.
    ///
    /// Accepts `locale`, `country`, `timestamp`, `limit` and `offset`.
    pub async fn get_featured_playlists(
        &self,
        options: Option<Options>,
    ) -> Result<FeaturedPlaylists> {
        let operation = Operation::get(self.endpoint("/browse/featured-playlists"));
        self.execute(operation, options, false).await
    }

    /// Get new album releases.
    pub async fn get_new_releases(&self, options: Option<Options>) -> Result<NewReleases> {
        let operation = Operation::get(self.endpoint("/browse/new-releases"));
        self.execute(operation, options, false).await
    }

    /// Get the list of browse categories.
    pub async fn get_categories(&self, options: Option<Options>) -> Result<Categories> {
        let operation = Operation::get(self.endpoint("/browse/categories"));
        self.execute(operation, options, false).await
    }

    /// Get a single browse category.
    pub async fn get_category(
        &self,
        category_id: &str,
        options: Option<Options>,
    ) -> Result<Category> {
        let path = format!("/browse/categories/{}", encode_component(category_id));
        self.execute(Operation::get(self.endpoint(&path)), options, false)
            .await
    }

    /// Get the playlists of a browse category.
    pub async fn get_category_playlists(
        &self,
        category_id: &str,
        options: Option<Options>,
    ) -> Result<CategoryPlaylists> {
        let path = format!("/browse/categories/{}/playlists", encode_component(category_id));
        self.execute(Operation::get(self.endpoint(&path)), options, false)
            .await
    }

    /// Get track recommendations.
    ///
    /// Seeds and tunable attributes are passed as options, e.g.
    /// `Options::new().set("seed_artists", vec!["4NHQUGzhtTLFvgF5SZesLK"])`.
    pub async fn get_recommendations(&self, options: Option<Options>) -> Result<Recommendations> {
        let operation = Operation::get(self.endpoint("/recommendations"));
        self.execute(operation, options, false).await
    }

    /// Get the genres usable as recommendation seeds.
    pub async fn get_available_genre_seeds(&self) -> Result<AvailableGenreSeeds> {
        let operation = Operation::get(self.endpoint("/recommendations/available-genre-seeds"));
        self.execute(operation, None, false).await
    }
}
