mod common;

use std::{collections::HashSet, time::Duration};

use chrono::NaiveDate;
use common::{FakeCatalog, album, rated, track};
use spotgen::{
    builder::{
        ArtistPlaylistOptions, SetlistOptions, build_artist_playlists, build_setlist,
        collect_deep_cut_pool, write_tracks,
    },
    reconcile::{DeepCutPolicy, TrackQuery},
};

const PLAYLIST_NAME: &str = "Setlist 2024-05-01";

fn options(public: bool) -> SetlistOptions {
    SetlistOptions {
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        public,
    }
}

fn strict(artist: &str, title: &str) -> String {
    TrackQuery::new(artist, title).strict_query()
}

fn artist_options() -> ArtistPlaylistOptions {
    ArtistPlaylistOptions {
        popular_limit: 3,
        deep_limit: 2,
        lookup_delay: Duration::ZERO,
        artist_delay: Duration::ZERO,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_setlist_appends_only_new_tracks() {
    let mut catalog = FakeCatalog::new()
        .with_search(&strict("A", "One"), vec![track("t1", "One", "A")])
        .with_search(&strict("B", "Two"), vec![track("t2", "Two", "B")])
        .with_search(&strict("B", "Two Again"), vec![track("t2", "Two", "B")])
        .with_search(&strict("C", "Three"), vec![track("t3", "Three", "C")]);
    catalog.playlists.insert(
        PLAYLIST_NAME.to_string(),
        ("existing".to_string(), HashSet::from(["t1".to_string()])),
    );

    let entries = vec![
        TrackQuery::new("A", "One"),
        TrackQuery::new("B", "Two"),
        TrackQuery::new("B", "Two Again"),
        TrackQuery::new("C", "Three"),
        TrackQuery::new("D", "Missing"),
    ];

    let report = build_setlist(&catalog, "listener", entries, &options(true))
        .await
        .unwrap();

    assert!(!report.created);
    assert!(catalog.created().is_empty());
    assert_eq!(report.playlist_id, "existing");
    assert_eq!(report.total_entries, 5);
    assert_eq!(report.existing_count, 1);
    assert_eq!(report.already_present.len(), 1);
    assert_eq!(report.not_found, vec![TrackQuery::new("D", "Missing")]);
    assert_eq!(report.written, 2);
    assert_eq!(report.final_size(), 3);
    assert_eq!(
        catalog.writes(),
        vec![(
            "existing".to_string(),
            vec!["t2".to_string(), "t3".to_string()]
        )]
    );
}

#[tokio::test]
async fn test_setlist_creates_dated_playlist() {
    let catalog = FakeCatalog::new().with_search(&strict("A", "One"), vec![track("t1", "One", "A")]);

    let report = build_setlist(
        &catalog,
        "listener",
        vec![TrackQuery::new("A", "One")],
        &options(false),
    )
    .await
    .unwrap();

    let created = catalog.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name, PLAYLIST_NAME);
    assert!(!created[0].public);
    assert!(report.created);
    assert_eq!(report.playlist_name, PLAYLIST_NAME);
    assert_eq!(
        report.playlist_url(),
        format!("https://open.spotify.com/playlist/{}", report.playlist_id)
    );
    assert_eq!(catalog.written_to(&report.playlist_id), vec!["t1".to_string()]);
}

#[tokio::test]
async fn test_setlist_lookup_failure_creates_new_playlist() {
    let mut catalog = FakeCatalog::new();
    catalog.fail_find_playlist = true;

    let report = build_setlist(
        &catalog,
        "listener",
        vec![TrackQuery::new("A", "One")],
        &options(true),
    )
    .await
    .unwrap();

    assert!(report.created);
    assert_eq!(report.not_found.len(), 1);
    assert!(catalog.writes().is_empty());
}

#[tokio::test]
async fn test_setlist_create_failure_aborts() {
    let mut catalog = FakeCatalog::new();
    catalog.failing_playlists.insert(PLAYLIST_NAME.to_string());

    let result = build_setlist(
        &catalog,
        "listener",
        vec![TrackQuery::new("A", "One")],
        &options(true),
    )
    .await;

    assert!(result.is_err());
    // nothing is resolved once the playlist cannot be opened
    assert!(catalog.queries().is_empty());
}

#[tokio::test]
async fn test_write_tracks_batches_and_continues_after_failure() {
    let mut catalog = FakeCatalog::new();
    catalog.failing_writes.insert(0);
    let ids: Vec<String> = (0..250).map(|i| format!("t{}", i)).collect();

    let outcome = write_tracks(&catalog, "pl", &ids).await;

    let sizes: Vec<usize> = catalog.writes().iter().map(|(_, b)| b.len()).collect();
    assert_eq!(sizes, vec![100, 100, 50]);
    assert_eq!(outcome.written, 150);
    assert_eq!(outcome.failed_batches, 1);
    assert_eq!(outcome.failed_ids, ids[..100].to_vec());
}

#[tokio::test]
async fn test_setlist_reports_only_written_tracks_as_added() {
    let mut catalog = FakeCatalog::new();
    let mut entries = Vec::new();
    for i in 0..150 {
        let title = format!("Song {}", i);
        catalog = catalog.with_search(
            &strict("Band", &title),
            vec![track(&format!("t{}", i), &title, "Band")],
        );
        entries.push(TrackQuery::new("Band", title));
    }
    catalog.failing_writes.insert(0);

    let report = build_setlist(&catalog, "listener", entries, &options(true))
        .await
        .unwrap();

    assert_eq!(report.written, 50);
    assert_eq!(report.failed_batches, 1);
    assert_eq!(report.added.len(), 50);
    assert_eq!(report.unwritten.len(), 100);
    assert_eq!(
        report.added[0].candidate.as_ref().map(|c| c.id.as_str()),
        Some("t100")
    );
    assert_eq!(report.final_size(), 50);
}

#[tokio::test]
async fn test_setlist_search_error_counts_as_not_found() {
    let mut catalog = FakeCatalog::new().with_search(&strict("A", "One"), vec![track("t1", "One", "A")]);
    catalog.failing_queries.insert(strict("B", "Two"));

    let report = build_setlist(
        &catalog,
        "listener",
        vec![TrackQuery::new("B", "Two"), TrackQuery::new("A", "One")],
        &options(true),
    )
    .await
    .unwrap();

    assert_eq!(report.not_found, vec![TrackQuery::new("B", "Two")]);
    assert_eq!(report.added.len(), 1);
    // no loose retry after a failed strict search
    assert!(!catalog.queries().contains(&"B Two".to_string()));
}

#[tokio::test]
async fn test_artist_playlists_popular_and_deep_cuts() {
    let mut catalog = FakeCatalog::new()
        .with_artist("radiohead", "r1", "Radiohead")
        .with_artist("portishead", "p1", "Portishead");
    catalog.top_tracks.insert(
        "r1".to_string(),
        vec![rated("h1", 90), rated("h2", 85), rated("h3", 80), rated("h4", 75)],
    );
    catalog
        .top_tracks
        .insert("p1".to_string(), vec![rated("h1", 90), rated("g1", 70)]);
    catalog.albums.insert(
        "r1".to_string(),
        vec![
            album("al1", "OK Computer"),
            album("al2", "ok computer"),
            album("al3", "Kid A"),
        ],
    );
    catalog
        .album_tracks
        .insert("al1".to_string(), vec![rated("x1", 0), rated("x2", 0)]);
    catalog
        .album_tracks
        .insert("al2".to_string(), vec![rated("dup", 0)]);
    catalog
        .album_tracks
        .insert("al3".to_string(), vec![rated("x3", 0)]);
    for (id, popularity) in [("x1", 50), ("x2", 10), ("x3", 30)] {
        catalog
            .full_tracks
            .insert(id.to_string(), rated(id, popularity));
    }

    let artists = vec![
        "radiohead".to_string(),
        "nobody".to_string(),
        "portishead".to_string(),
    ];
    let report = build_artist_playlists(&catalog, "listener", &artists, &artist_options())
        .await
        .unwrap();

    let created: Vec<String> = catalog.created().into_iter().map(|p| p.name).collect();
    assert_eq!(created, vec!["Most Popular Tracks", "Deep Cuts Collection"]);

    assert_eq!(report.processed(), 2);
    assert_eq!(report.skipped, vec!["nobody".to_string()]);
    assert_eq!(report.artists[0].matched, "Radiohead");
    assert_eq!(report.artists[0].popular.len(), 3);
    assert_eq!(
        report.artists[0]
            .deep_cuts
            .iter()
            .map(|t| t.id.as_str())
            .collect::<Vec<_>>(),
        vec!["x2", "x3"]
    );

    // h1 is a top track of both artists
    assert_eq!(report.popular_track_ids, vec!["h1", "h2", "h3", "g1"]);
    assert_eq!(
        catalog.written_to(&report.popular_playlist_id),
        report.popular_track_ids
    );
    assert_eq!(catalog.written_to(&report.deep_playlist_id), vec!["x2", "x3"]);
    assert_eq!(report.popular_written, 4);
    assert_eq!(report.deep_written, 2);
    assert_eq!(report.failed_batches, 0);
}

#[tokio::test]
async fn test_artist_playlists_create_failure_aborts() {
    let mut catalog = FakeCatalog::new().with_artist("radiohead", "r1", "Radiohead");
    catalog
        .failing_playlists
        .insert("Deep Cuts Collection".to_string());

    let result = build_artist_playlists(
        &catalog,
        "listener",
        &["radiohead".to_string()],
        &artist_options(),
    )
    .await;

    assert!(result.is_err());
    assert!(catalog.writes().is_empty());
    assert!(catalog.queries().is_empty());
}

#[tokio::test]
async fn test_deep_cut_pool_respects_track_cap() {
    let mut catalog = FakeCatalog::new();
    catalog.albums.insert(
        "r1".to_string(),
        vec![album("al1", "First"), album("al2", "Second")],
    );
    catalog
        .album_tracks
        .insert("al1".to_string(), vec![rated("x1", 0), rated("x2", 0), rated("x3", 0)]);
    catalog
        .album_tracks
        .insert("al2".to_string(), vec![rated("y1", 0)]);
    catalog.full_tracks.insert("x1".to_string(), rated("x1", 40));
    catalog.full_tracks.insert("x2".to_string(), rated("x2", 20));

    let policy = DeepCutPolicy {
        max_albums: 5,
        max_tracks: 2,
    };
    let pool = collect_deep_cut_pool(&catalog, "r1", "album", policy, Duration::ZERO)
        .await
        .unwrap();

    assert_eq!(
        pool.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        vec!["x1", "x2"]
    );
    assert_eq!(
        *catalog.track_lookups.lock().unwrap(),
        vec!["x1".to_string(), "x2".to_string()]
    );
}

#[tokio::test]
async fn test_deep_cut_pool_skips_failed_lookups() {
    let mut catalog = FakeCatalog::new();
    catalog
        .albums
        .insert("r1".to_string(), vec![album("al1", "Only")]);
    catalog
        .album_tracks
        .insert("al1".to_string(), vec![rated("x1", 0), rated("gone", 0)]);
    catalog.full_tracks.insert("x1".to_string(), rated("x1", 12));

    let pool = collect_deep_cut_pool(
        &catalog,
        "r1",
        "album",
        DeepCutPolicy::default(),
        Duration::ZERO,
    )
    .await
    .unwrap();

    assert_eq!(pool, vec![rated("x1", 12)]);
}
