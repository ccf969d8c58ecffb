use std::time::Duration;

use tokio::time::sleep;

use super::write_tracks;
use crate::{
    info,
    reconcile::{
        Catalog, CatalogError, DeepCutPolicy, PlaylistStore, TrackCandidate, distinct_albums,
        resolve_artist, select_deep_cuts, unique_ids,
    },
    success,
    utils::{self, AlbumGroups},
    warning,
};

pub const POPULAR_DESCRIPTION: &str =
    "A collection of the most popular tracks from my favorite artists";
pub const DEEP_CUTS_DESCRIPTION: &str = "Lesser-known gems from my favorite artists";

#[derive(Debug, Clone)]
pub struct ArtistPlaylistOptions {
    pub popular_limit: usize,
    pub deep_limit: usize,
    /// Market (ISO country code) for top tracks.
    pub market: String,
    pub popular_name: String,
    pub deep_name: String,
    pub album_groups: AlbumGroups,
    pub policy: DeepCutPolicy,
    pub public: bool,
    /// Pause between full track lookups.
    pub lookup_delay: Duration,
    /// Pause between artists.
    pub artist_delay: Duration,
}

impl Default for ArtistPlaylistOptions {
    fn default() -> Self {
        Self {
            popular_limit: 3,
            deep_limit: 3,
            market: "US".to_string(),
            popular_name: "Most Popular Tracks".to_string(),
            deep_name: "Deep Cuts Collection".to_string(),
            album_groups: AlbumGroups::default(),
            policy: DeepCutPolicy::default(),
            public: true,
            lookup_delay: Duration::from_millis(100),
            artist_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArtistSummary {
    pub requested: String,
    pub matched: String,
    pub popular: Vec<TrackCandidate>,
    pub deep_cuts: Vec<TrackCandidate>,
}

#[derive(Debug, Clone)]
pub struct ArtistPlaylistsReport {
    pub popular_playlist_id: String,
    pub deep_playlist_id: String,
    pub artists: Vec<ArtistSummary>,
    pub skipped: Vec<String>,
    pub popular_track_ids: Vec<String>,
    pub deep_cut_track_ids: Vec<String>,
    pub popular_written: usize,
    pub deep_written: usize,
    pub failed_batches: usize,
}

impl ArtistPlaylistsReport {
    pub fn processed(&self) -> usize {
        self.artists.len()
    }

    pub fn popular_url(&self) -> String {
        utils::playlist_url(&self.popular_playlist_id)
    }

    pub fn deep_url(&self) -> String {
        utils::playlist_url(&self.deep_playlist_id)
    }
}

/// Builds the "most popular" and "deep cuts" playlists for a list of artist names.
///
/// Both playlists are created up front; failing to create either aborts the run.
/// Artists that cannot be found are skipped. Track lists are deduplicated before
/// they are written.
pub async fn build_artist_playlists<C>(
    client: &C,
    user_id: &str,
    artists: &[String],
    options: &ArtistPlaylistOptions,
) -> Result<ArtistPlaylistsReport, CatalogError>
where
    C: Catalog + PlaylistStore + ?Sized,
{
    let popular_playlist_id = client
        .create_playlist(
            user_id,
            &options.popular_name,
            POPULAR_DESCRIPTION,
            options.public,
        )
        .await?;
    success!(
        "Created playlist '{}' with ID: {}",
        options.popular_name,
        popular_playlist_id
    );

    let deep_playlist_id = client
        .create_playlist(
            user_id,
            &options.deep_name,
            DEEP_CUTS_DESCRIPTION,
            options.public,
        )
        .await?;
    success!(
        "Created playlist '{}' with ID: {}",
        options.deep_name,
        deep_playlist_id
    );

    let mut summaries = Vec::new();
    let mut skipped = Vec::new();

    for (i, name) in artists.iter().enumerate() {
        info!("[{}/{}] Processing artist: {}", i + 1, artists.len(), name);

        match collect_artist(client, name, options).await {
            Some(summary) => {
                info!(
                    "  Added {} popular tracks and {} deep cuts for {}",
                    summary.popular.len(),
                    summary.deep_cuts.len(),
                    summary.matched
                );
                summaries.push(summary);
            }
            None => {
                warning!("  Could not find artist: {}", name);
                skipped.push(name.clone());
            }
        }

        if i + 1 < artists.len() && !options.artist_delay.is_zero() {
            sleep(options.artist_delay).await;
        }
    }

    let popular_track_ids = unique_ids(
        &summaries
            .iter()
            .flat_map(|s| s.popular.iter().map(|t| t.id.clone()))
            .collect::<Vec<_>>(),
    );
    let deep_cut_track_ids = unique_ids(
        &summaries
            .iter()
            .flat_map(|s| s.deep_cuts.iter().map(|t| t.id.clone()))
            .collect::<Vec<_>>(),
    );

    let popular = write_tracks(client, &popular_playlist_id, &popular_track_ids).await;
    let deep = write_tracks(client, &deep_playlist_id, &deep_cut_track_ids).await;

    Ok(ArtistPlaylistsReport {
        popular_playlist_id,
        deep_playlist_id,
        artists: summaries,
        skipped,
        popular_track_ids,
        deep_cut_track_ids,
        popular_written: popular.written,
        deep_written: deep.written,
        failed_batches: popular.failed_batches + deep.failed_batches,
    })
}

/// Gathers top tracks and deep cuts for one artist, `None` if the artist is unknown.
async fn collect_artist<C>(
    catalog: &C,
    name: &str,
    options: &ArtistPlaylistOptions,
) -> Option<ArtistSummary>
where
    C: Catalog + ?Sized,
{
    let artist = resolve_artist(name, catalog).await?;
    info!("  Found artist: {}", artist.name);

    let popular = match catalog.artist_top_tracks(&artist.id, &options.market).await {
        Ok(mut tracks) => {
            tracks.truncate(options.popular_limit);
            tracks
        }
        Err(e) => {
            warning!("  Error getting top tracks for {}: {}", artist.name, e);
            Vec::new()
        }
    };

    let deep_cuts = match collect_deep_cut_pool(
        catalog,
        &artist.id,
        &options.album_groups.to_string(),
        options.policy,
        options.lookup_delay,
    )
    .await
    {
        Ok(pool) => select_deep_cuts(&pool, options.deep_limit),
        Err(e) => {
            warning!("  Error getting deep cuts for {}: {}", artist.name, e);
            Vec::new()
        }
    };

    Some(ArtistSummary {
        requested: name.to_string(),
        matched: artist.name,
        popular,
        deep_cuts,
    })
}

/// Builds the pool of fully fetched tracks deep cuts are chosen from.
///
/// Albums are reduced with [`distinct_albums`], their tracks concatenated in album order
/// and cut at `policy.max_tracks` before each is looked up for its popularity. Failed
/// lookups are skipped.
pub async fn collect_deep_cut_pool<C>(
    catalog: &C,
    artist_id: &str,
    include_groups: &str,
    policy: DeepCutPolicy,
    lookup_delay: Duration,
) -> Result<Vec<TrackCandidate>, CatalogError>
where
    C: Catalog + ?Sized,
{
    let albums = catalog.artist_albums(artist_id, include_groups).await?;

    let mut tracks = Vec::new();
    for album in distinct_albums(&albums, policy.max_albums) {
        if tracks.len() >= policy.max_tracks {
            break;
        }
        tracks.extend(catalog.album_tracks(&album.id).await?);
    }
    tracks.truncate(policy.max_tracks);

    let mut pool = Vec::with_capacity(tracks.len());
    for track in tracks {
        match catalog.track(&track.id).await {
            Ok(full) => pool.push(full),
            Err(_) => continue,
        }
        if !lookup_delay.is_zero() {
            sleep(lookup_delay).await;
        }
    }

    Ok(pool)
}
