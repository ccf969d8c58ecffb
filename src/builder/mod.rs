//! Playlist building flows.
//!
//! Each flow drives the reconciler against injected [`Catalog`] and [`PlaylistStore`]
//! implementations and returns a report the CLI renders. Per-item failures are logged and
//! folded into the report; only failures that leave no playlist to write into abort a run.

mod artists;
mod setlist;

pub use artists::{
    ArtistPlaylistOptions, ArtistPlaylistsReport, ArtistSummary, build_artist_playlists,
    collect_deep_cut_pool,
};
pub use setlist::{SetlistOptions, SetlistReport, build_setlist};

use crate::{
    reconcile::{MAX_TRACKS_PER_REQUEST, PlaylistStore, chunk},
    warning,
};

/// Tally of one chunked write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOutcome {
    pub written: usize,
    pub failed_batches: usize,
    /// Ids of the rejected batches, in input order.
    pub failed_ids: Vec<String>,
}

/// Writes `track_ids` in order, at most [`MAX_TRACKS_PER_REQUEST`] per call.
///
/// A failed batch is logged and counted; later batches are still attempted.
pub async fn write_tracks<S>(store: &S, playlist_id: &str, track_ids: &[String]) -> WriteOutcome
where
    S: PlaylistStore + ?Sized,
{
    let mut outcome = WriteOutcome::default();

    for batch in chunk(track_ids, MAX_TRACKS_PER_REQUEST) {
        match store.write_batch(playlist_id, &batch).await {
            Ok(()) => outcome.written += batch.len(),
            Err(e) => {
                warning!(
                    "Failed to add {} tracks to playlist {}: {}",
                    batch.len(),
                    playlist_id,
                    e
                );
                outcome.failed_batches += 1;
                outcome.failed_ids.extend(batch);
            }
        }
    }

    outcome
}
