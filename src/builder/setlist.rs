use std::{collections::HashSet, time::Duration};

use chrono::NaiveDate;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use super::write_tracks;
use crate::{
    info,
    reconcile::{
        Catalog, CatalogError, PlaylistSnapshot, PlaylistStore, ResolvedTrack, TrackQuery,
        TrackRef, filter_new, resolve_candidate,
    },
    success, utils, warning,
};

#[derive(Debug, Clone)]
pub struct SetlistOptions {
    /// Date used in the playlist name.
    pub date: NaiveDate,
    /// Visibility of a newly created playlist.
    pub public: bool,
}

#[derive(Debug, Clone)]
pub struct SetlistReport {
    pub playlist_id: String,
    pub playlist_name: String,
    pub created: bool,
    pub total_entries: usize,
    /// Track count of the playlist before this run.
    pub existing_count: usize,
    /// New tracks that were written.
    pub added: Vec<ResolvedTrack>,
    /// New tracks whose batch was rejected.
    pub unwritten: Vec<ResolvedTrack>,
    pub already_present: Vec<ResolvedTrack>,
    pub not_found: Vec<TrackQuery>,
    pub written: usize,
    pub failed_batches: usize,
}

impl SetlistReport {
    pub fn final_size(&self) -> usize {
        self.existing_count + self.written
    }

    pub fn playlist_url(&self) -> String {
        utils::playlist_url(&self.playlist_id)
    }
}

/// Creates or updates the dated setlist playlist with the tracks matching `entries`.
///
/// An existing playlist of the same name owned by `user_id` is reused and only tracks
/// it does not contain yet are appended. Fails only when no playlist can be created.
pub async fn build_setlist<C>(
    client: &C,
    user_id: &str,
    entries: Vec<TrackQuery>,
    options: &SetlistOptions,
) -> Result<SetlistReport, CatalogError>
where
    C: Catalog + PlaylistStore + ?Sized,
{
    let playlist_name = utils::setlist_playlist_name(options.date);
    let (snapshot, created) = open_playlist(client, user_id, &playlist_name, options).await?;

    let total_entries = entries.len();
    let resolved = resolve_all(client, entries).await;

    let partition = filter_new(&resolved, &snapshot.existing_track_ids);
    for track in &partition.already_present {
        info!(
            "Already in playlist: {} - {}",
            track.matched_artist().unwrap_or_default(),
            track.candidate.as_ref().map(|c| c.title.as_str()).unwrap_or_default()
        );
    }

    let new_ids = partition.new_ids();
    let outcome = write_tracks(client, &snapshot.id, &new_ids).await;
    if new_ids.is_empty() {
        info!("No new tracks to add");
    } else if outcome.written > 0 {
        success!("Added {} new tracks to playlist", outcome.written);
    }

    let failed: HashSet<&str> = outcome.failed_ids.iter().map(String::as_str).collect();
    let (unwritten, added): (Vec<ResolvedTrack>, Vec<ResolvedTrack>) = partition
        .new_tracks
        .into_iter()
        .partition(|t| t.track_id().is_some_and(|id| failed.contains(id)));

    Ok(SetlistReport {
        playlist_id: snapshot.id.clone(),
        playlist_name,
        created,
        total_entries,
        existing_count: snapshot.len(),
        added,
        unwritten,
        already_present: partition.already_present,
        not_found: resolved
            .into_iter()
            .filter(|r| !r.is_found())
            .map(|r| r.query)
            .collect(),
        written: outcome.written,
        failed_batches: outcome.failed_batches,
    })
}

async fn open_playlist<C>(
    client: &C,
    user_id: &str,
    playlist_name: &str,
    options: &SetlistOptions,
) -> Result<(PlaylistSnapshot, bool), CatalogError>
where
    C: PlaylistStore + ?Sized,
{
    let existing = match client.find_playlist(user_id, playlist_name).await {
        Ok(found) => found,
        Err(e) => {
            warning!("Error searching for existing playlist: {}", e);
            None
        }
    };

    if let Some(id) = existing {
        info!("Found existing playlist: {} ({})", playlist_name, id);
        let existing_track_ids = match client.playlist_track_ids(&id).await {
            Ok(ids) => ids,
            Err(e) => {
                warning!("Error getting existing tracks: {}", e);
                Default::default()
            }
        };
        info!("Playlist currently has {} tracks", existing_track_ids.len());

        return Ok((
            PlaylistSnapshot {
                id,
                existing_track_ids,
            },
            false,
        ));
    }

    let id = client
        .create_playlist(
            user_id,
            playlist_name,
            &utils::setlist_playlist_description(options.date),
            options.public,
        )
        .await?;
    success!("Created new playlist: {} ({})", playlist_name, id);

    Ok((PlaylistSnapshot::empty(id), true))
}

async fn resolve_all<C>(catalog: &C, entries: Vec<TrackQuery>) -> Vec<ResolvedTrack>
where
    C: Catalog + ?Sized,
{
    let pb = ProgressBar::new(entries.len() as u64);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let mut resolved = Vec::with_capacity(entries.len());
    for query in entries {
        pb.set_message(format!("Searching for: {}", query));
        let result = match resolve_candidate(&query, catalog).await {
            Ok(Some(candidate)) => {
                pb.println(format!(
                    "  {} Found: {} - {}",
                    "✓".green(),
                    candidate.credited_as(&query.artist).unwrap_or(candidate.artist_name()),
                    candidate.title
                ));
                ResolvedTrack::found(query, candidate)
            }
            Ok(None) => {
                pb.println(format!("  {} Not found: {}", "✗".red(), query));
                ResolvedTrack::not_found(query)
            }
            Err(e) => {
                pb.println(format!(
                    "  {} Error searching for {}: {}",
                    "!".yellow().bold(),
                    query,
                    e
                ));
                ResolvedTrack::not_found(query)
            }
        };
        resolved.push(result);
        pb.inc(1);
    }

    pb.finish_and_clear();
    resolved
}
