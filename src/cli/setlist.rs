use std::path::PathBuf;

use chrono::Local;
use tabled::Table;

use super::auth::{load_config, session};
use crate::{
    builder::{self, SetlistOptions, SetlistReport},
    error, info, input,
    reconcile::ResolvedTrack,
    success,
    types::{NotFoundTableRow, TrackTableRow},
    warning,
};

pub async fn setlist(file: PathBuf, public: bool) {
    // fail on missing credentials before touching the input or the network
    load_config();

    let entries = match input::load_setlist(&file) {
        Ok(entries) => entries,
        Err(e) => error!("Could not load setlist from CSV file: {}", e),
    };
    info!("Loaded {} tracks from setlist", entries.len());

    let (client, user_id) = session().await;
    let options = SetlistOptions {
        date: Local::now().date_naive(),
        public,
    };

    match builder::build_setlist(&client, &user_id, entries, &options).await {
        Ok(report) => print_report(&report),
        Err(e) => error!("Error creating playlist: {}", e),
    }
}

fn print_report(report: &SetlistReport) {
    if !report.added.is_empty() {
        success!("Added to playlist:");
        println!("{}", Table::new(track_rows(&report.added)));
    }

    println!("\n=== Setlist Playlist Summary ===");
    info!("Playlist: {}", report.playlist_name);
    info!("Total tracks in CSV: {}", report.total_entries);
    info!("New tracks found and added: {}", report.written);
    info!("Tracks already in playlist: {}", report.already_present.len());
    info!("Tracks not found: {}", report.not_found.len());
    info!("Final playlist size: {} tracks", report.final_size());

    if report.failed_batches > 0 {
        warning!(
            "{} batches could not be added, {} tracks were not written:",
            report.failed_batches,
            report.unwritten.len()
        );
        println!("{}", Table::new(track_rows(&report.unwritten)));
    }

    if !report.not_found.is_empty() {
        warning!("Tracks not found:");
        let rows: Vec<NotFoundTableRow> = report
            .not_found
            .iter()
            .map(|q| NotFoundTableRow {
                artist: q.artist.clone(),
                song: q.title.clone().unwrap_or_default(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    success!("Playlist URL: {}", report.playlist_url());
}

fn track_rows(tracks: &[ResolvedTrack]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|t| TrackTableRow {
            requested: t.query.to_string(),
            artist: t.matched_artist().unwrap_or_default().to_string(),
            title: t
                .candidate
                .as_ref()
                .map(|c| c.title.clone())
                .unwrap_or_default(),
        })
        .collect()
}
