//! Soul Player Spotify Client
//!
//! Typed async client for the Spotify Web API.
//!
//! Every endpoint is a method on [`SpotifyClient`] that describes the call
//! as an [`Operation`] (path, method, query parameters, JSON body) and runs
//! it through one request pipeline. Extra [`Options`] are merged into the
//! query string or the body depending on the endpoint.
//!
//! Only status 200 counts as success. Any other status is returned as
//! [`SpotifyError::Api`] with the API's JSON error body untouched.
//!
//! Obtaining or refreshing the access token is up to the caller.
//!
//! # Example
//!
//! ```ignore
//! use soul_spotify_client::{ClientConfig, Options, SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = SpotifyClient::new(ClientConfig::load()?)?;
//!     client.set_access_token(std::env::var("TOKEN")?);
//!
//!     let track = client.get_track("11dFghVXANMlKmJXsNCbNl", None).await?;
//!     println!("{}", track.name);
//!
//!     let page = client
//!         .get_my_saved_tracks(Some(Options::new().limit(20)))
//!         .await?;
//!     for saved in page.items {
//!         println!("{} (saved {})", saved.track.name, saved.added_at);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod audio;
mod browse;
mod catalog;
mod client;
mod config;
mod error;
mod follow;
mod library;
pub mod models;
mod player;
mod playlists;
pub mod request;
mod search;
mod users;

pub use client::SpotifyClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ErrorObject, Result, SpotifyError};
pub use models::SearchType;
pub use request::{Operation, Options, QueryParams};
