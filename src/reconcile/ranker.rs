use std::collections::HashSet;

use super::model::{AlbumCandidate, TrackCandidate};

/// Caps bounding how many catalog calls one artist may cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeepCutPolicy {
    /// Distinct albums whose tracks enter the pool.
    pub max_albums: usize,
    /// Tracks looked up for popularity, across all albums.
    pub max_tracks: usize,
}

impl DeepCutPolicy {
    pub const DEFAULT_MAX_ALBUMS: usize = 5;
    pub const DEFAULT_MAX_TRACKS: usize = 50;
}

impl Default for DeepCutPolicy {
    fn default() -> Self {
        Self {
            max_albums: Self::DEFAULT_MAX_ALBUMS,
            max_tracks: Self::DEFAULT_MAX_TRACKS,
        }
    }
}

/// Returns the `limit` least popular tracks, least popular first.
///
/// The sort is stable, so equally popular tracks keep their input order. Tracks
/// without a popularity score rank behind every scored track.
pub fn select_deep_cuts(tracks: &[TrackCandidate], limit: usize) -> Vec<TrackCandidate> {
    let mut ranked: Vec<&TrackCandidate> = tracks.iter().collect();
    ranked.sort_by_key(|t| (t.popularity.is_none(), t.popularity));

    ranked.into_iter().take(limit).cloned().collect()
}

/// Drops albums whose lowercased name was already seen, then keeps the first `max_albums`.
///
/// Reissues and deluxe editions sharing a title collapse onto the first listed album.
pub fn distinct_albums(albums: &[AlbumCandidate], max_albums: usize) -> Vec<AlbumCandidate> {
    let mut seen = HashSet::new();
    albums
        .iter()
        .filter(|album| seen.insert(album.name.to_lowercase()))
        .take(max_albums)
        .cloned()
        .collect()
}
