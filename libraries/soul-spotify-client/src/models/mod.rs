//! Request and response payloads of the Spotify Web API.
//!
//! Every model tolerates missing fields (`#[serde(default)]`) so partial
//! objects, `fields=` filtered responses and simplified variants all parse.
//! Pages drop `null` entries from `items`.

mod album;
mod artist;
mod audio;
mod browse;
mod common;
mod paging;
mod player;
mod playlist;
mod search;
mod track;
mod user;

pub use album::{Album, MultipleAlbums, SavedAlbum, SimplifiedAlbum};
pub use artist::{
    Artist, ArtistTopTracks, FollowedArtists, MultipleArtists, RelatedArtists, SimplifiedArtist,
};
pub use audio::{
    AudioAnalysis, AudioFeatures, MultipleAudioFeatures, Section, Segment, TimeInterval,
};
pub use browse::{
    AvailableGenreSeeds, Categories, Category, CategoryPlaylists, FeaturedPlaylists, NewReleases,
    RecommendationSeed, Recommendations,
};
pub use common::{Context, Copyright, Followers, Image};
pub use paging::{CursorPaging, Cursors, Paging};
pub use player::{CurrentPlaybackState, CurrentlyPlaying, Device, Devices};
pub use playlist::{
    Playlist, PlaylistDetails, PlaylistTrack, PlaylistTrackRemoval, PlaylistTracksRef,
    SimplifiedPlaylist, SnapshotResponse,
};
pub use search::{
    AlbumSearchResponse, ArtistSearchResponse, PlaylistSearchResponse, SearchResponse,
    SearchType, TrackSearchResponse,
};
pub use track::{MultipleTracks, PlayHistory, SavedTrack, SimplifiedTrack, Track};
pub use user::{PrivateUser, PublicUser};
