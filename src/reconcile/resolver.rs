use crate::warning;

use super::{
    catalog::{Catalog, CatalogError},
    model::{ArtistCandidate, ResolvedTrack, TrackCandidate, TrackQuery},
};

/// Number of candidates requested per search.
pub const SEARCH_LIMIT: u32 = 10;

/// Maps a query to the best matching catalog track.
///
/// The strict field-filtered query runs first; the loose query only runs when the
/// strict one comes back empty. Out of the returned list the first candidate crediting
/// the query artist (case-insensitive, no further normalization) wins, falling back to
/// the first candidate overall.
///
/// A failing search is logged and the query is reported as not found.
pub async fn resolve<C>(query: TrackQuery, catalog: &C) -> ResolvedTrack
where
    C: Catalog + ?Sized,
{
    match resolve_candidate(&query, catalog).await {
        Ok(Some(candidate)) => ResolvedTrack::found(query, candidate),
        Ok(None) => ResolvedTrack::not_found(query),
        Err(e) => {
            warning!("Error searching for {}: {}", query, e);
            ResolvedTrack::not_found(query)
        }
    }
}

/// Same matching as [`resolve`], handing a search failure back instead of logging it.
pub async fn resolve_candidate<C>(
    query: &TrackQuery,
    catalog: &C,
) -> Result<Option<TrackCandidate>, CatalogError>
where
    C: Catalog + ?Sized,
{
    let candidates = search_with_fallback(query, catalog).await?;
    Ok(select_best(&query.artist, candidates))
}

async fn search_with_fallback<C>(
    query: &TrackQuery,
    catalog: &C,
) -> Result<Vec<TrackCandidate>, CatalogError>
where
    C: Catalog + ?Sized,
{
    let strict = catalog
        .search_tracks(&query.strict_query(), SEARCH_LIMIT)
        .await?;
    if !strict.is_empty() {
        return Ok(strict);
    }

    catalog
        .search_tracks(&query.loose_query(), SEARCH_LIMIT)
        .await
}

/// Picks the first candidate crediting `artist`, else the first candidate.
pub fn select_best(artist: &str, candidates: Vec<TrackCandidate>) -> Option<TrackCandidate> {
    let index = candidates
        .iter()
        .position(|c| c.credited_as(artist).is_some())
        .unwrap_or(0);

    candidates.into_iter().nth(index)
}

/// Looks up an artist by name, taking the service's top hit.
///
/// Returns `None` when nothing matches or the search fails.
pub async fn resolve_artist<C>(name: &str, catalog: &C) -> Option<ArtistCandidate>
where
    C: Catalog + ?Sized,
{
    match catalog.search_artists(&format!("artist:{}", name), 1).await {
        Ok(artists) => artists.into_iter().next(),
        Err(e) => {
            warning!("Error searching for artist {}: {}", name, e);
            None
        }
    }
}
