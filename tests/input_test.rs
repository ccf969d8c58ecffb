use std::io::Write;

use spotgen::{
    input::{InputError, load_artists, load_setlist, parse_artists, read_setlist},
    reconcile::TrackQuery,
};
use tempfile::NamedTempFile;

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_read_setlist_trims_and_skips_incomplete_rows() {
    let csv = "artist,song\n Miles Davis , So What \n,Orphan Song\nJohn Coltrane,\nBill Evans,Peace Piece\n";

    let entries = read_setlist(csv.as_bytes()).unwrap();

    assert_eq!(
        entries,
        vec![
            TrackQuery::new("Miles Davis", "So What"),
            TrackQuery::new("Bill Evans", "Peace Piece"),
        ]
    );
}

#[test]
fn test_read_setlist_columns_in_any_order() {
    let csv = "song,year,artist\nGiant Steps,1960,John Coltrane\n";

    let entries = read_setlist(csv.as_bytes()).unwrap();

    assert_eq!(entries, vec![TrackQuery::new("John Coltrane", "Giant Steps")]);
}

#[test]
fn test_read_setlist_missing_columns() {
    let result = read_setlist("band,title\nA,B\n".as_bytes());

    assert!(matches!(result, Err(InputError::MissingColumns)));
}

#[test]
fn test_load_setlist_from_file() {
    let file = temp_file("artist,song\nPortishead,Roads\n");

    let entries = load_setlist(file.path()).unwrap();

    assert_eq!(entries, vec![TrackQuery::new("Portishead", "Roads")]);
}

#[test]
fn test_load_setlist_errors() {
    let header_only = temp_file("artist,song\n");
    assert!(matches!(
        load_setlist(header_only.path()),
        Err(InputError::Empty(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_setlist(&dir.path().join("missing.csv")),
        Err(InputError::Io { .. })
    ));
}

#[test]
fn test_parse_artists_skips_blank_lines() {
    let artists = parse_artists("Radiohead\n\n  Massive Attack  \n   \nBjörk");

    assert_eq!(artists, vec!["Radiohead", "Massive Attack", "Björk"]);
}

#[test]
fn test_load_artists() {
    let file = temp_file("Radiohead\r\nPortishead\r\n");
    assert_eq!(
        load_artists(file.path()).unwrap(),
        vec!["Radiohead", "Portishead"]
    );

    let empty = temp_file("\n\n");
    assert!(matches!(
        load_artists(empty.path()),
        Err(InputError::Empty(_))
    ));
}
