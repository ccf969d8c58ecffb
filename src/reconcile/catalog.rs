//! Capabilities the reconciler consumes but does not implement.
//!
//! [`crate::spotify::SpotifyClient`] is the production implementation. Tests use an
//! in-memory fake so matching and reconciliation run without network access.

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

use super::model::{AlbumCandidate, ArtistCandidate, TrackCandidate};

/// Failure of a single collaborator call.
///
/// The reconciler treats every variant the same way: the affected item is reported
/// as not found and the run continues.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("not authorized: {0}")]
    Unauthorized(String),

    #[error("rate limited for {0} seconds")]
    RateLimited(u64),

    #[error("{0}")]
    Other(String),
}

/// Read-only catalog lookups.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Track search, results in the order the service ranks them.
    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<TrackCandidate>, CatalogError>;

    async fn search_artists(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<ArtistCandidate>, CatalogError>;

    /// The artist's top tracks for a market, most popular first.
    async fn artist_top_tracks(
        &self,
        artist_id: &str,
        market: &str,
    ) -> Result<Vec<TrackCandidate>, CatalogError>;

    /// Every album of the artist in the given `include_groups` (all pages).
    async fn artist_albums(
        &self,
        artist_id: &str,
        include_groups: &str,
    ) -> Result<Vec<AlbumCandidate>, CatalogError>;

    /// Every track on the album (all pages). Popularity is not populated.
    async fn album_tracks(&self, album_id: &str) -> Result<Vec<TrackCandidate>, CatalogError>;

    /// Full track lookup including popularity.
    async fn track(&self, track_id: &str) -> Result<TrackCandidate, CatalogError>;
}

/// Playlist reads and writes for the authenticated user.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Id of the authenticated user.
    async fn current_user(&self) -> Result<String, CatalogError>;

    /// Id of the first playlist called `name` owned by `user_id` (all pages).
    async fn find_playlist(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<Option<String>, CatalogError>;

    /// Ids of every track currently in the playlist (all pages).
    async fn playlist_track_ids(&self, playlist_id: &str)
    -> Result<HashSet<String>, CatalogError>;

    /// Creates a playlist and returns its id.
    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Result<String, CatalogError>;

    /// Appends one batch of tracks. Callers keep batches within the service limit.
    async fn write_batch(&self, playlist_id: &str, track_ids: &[String])
    -> Result<(), CatalogError>;
}
