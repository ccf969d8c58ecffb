//! # Playlist Reconciler
//!
//! Pure selection logic shared by the setlist and artist flows. Everything here works on
//! data already fetched from the catalog; network access is injected through the
//! [`Catalog`] and [`PlaylistStore`] traits.
//!
//! - [`resolve`] maps an artist/title query to the best catalog track
//! - [`filter_new`] splits found tracks into new and already present ones
//! - [`select_deep_cuts`] picks the least popular tracks of a pool
//! - [`chunk`] cuts write payloads down to the endpoint's batch size
//!
//! ```text
//! TrackQuery ──resolve──▶ ResolvedTrack ──filter_new(snapshot)──▶ new ids ──chunk──▶ write_batch
//! ```

mod batch;
mod catalog;
mod dedup;
mod model;
mod ranker;
mod resolver;

pub use batch::{MAX_TRACKS_PER_REQUEST, chunk};
pub use catalog::{Catalog, CatalogError, PlaylistStore};
pub use dedup::{Partition, filter_new, unique_ids};
pub use model::{
    AlbumCandidate, ArtistCandidate, PlaylistSnapshot, ResolvedTrack, TrackCandidate, TrackQuery,
    TrackRef,
};
pub use ranker::{DeepCutPolicy, distinct_albums, select_deep_cuts};
pub use resolver::{SEARCH_LIMIT, resolve, resolve_artist, resolve_candidate, select_best};
