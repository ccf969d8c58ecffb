use std::path::PathBuf;

use tabled::Table;

use super::auth::{load_config, session};
use crate::{
    builder::{self, ArtistPlaylistOptions, ArtistPlaylistsReport},
    error, info, input, success,
    types::ArtistTableRow,
    warning,
};

pub async fn artists(file: PathBuf, options: ArtistPlaylistOptions) {
    load_config();

    let artists = match input::load_artists(&file) {
        Ok(artists) => artists,
        Err(e) => error!("Could not load artists: {}", e),
    };

    info!("Found {} artists in file", artists.len());
    if artists.len() > 5 {
        info!("First 5 artists: {}...", artists[..5].join(", "));
    } else {
        info!("Artists: {}", artists.join(", "));
    }

    let (client, user_id) = session().await;

    match builder::build_artist_playlists(&client, &user_id, &artists, &options).await {
        Ok(report) => print_report(&report),
        Err(e) => error!("Error creating playlists: {}", e),
    }
}

fn print_report(report: &ArtistPlaylistsReport) {
    if !report.artists.is_empty() {
        let rows: Vec<ArtistTableRow> = report
            .artists
            .iter()
            .map(|a| ArtistTableRow {
                requested: a.requested.clone(),
                matched: a.matched.clone(),
                popular: a.popular.len(),
                deep_cuts: a.deep_cuts.len(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    println!("\n=== Playlist Creation Summary ===");
    info!("Total artists processed: {}", report.processed());
    info!("Skipped artists: {}", report.skipped.len());
    if !report.skipped.is_empty() {
        warning!("Skipped artist names: {}", report.skipped.join(", "));
    }
    info!(
        "Total tracks in popular playlist: {}",
        report.popular_written
    );
    info!(
        "Total tracks in deep cuts playlist: {}",
        report.deep_written
    );
    if report.failed_batches > 0 {
        warning!("{} batches could not be added", report.failed_batches);
    }

    success!("Popular Tracks: {}", report.popular_url());
    success!("Deep Cuts: {}", report.deep_url());
}
