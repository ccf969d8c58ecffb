//! Readers for the two input formats.
//!
//! A setlist is a CSV file with a header row naming an `artist` and a `song` column,
//! in either order:
//!
//! ```text
//! artist,song
//! Miles Davis,All Blues
//! John Coltrane,Giant Steps
//! ```
//!
//! An artist list is plain text with one artist name per line.

use std::{io::Read, path::Path};

use thiserror::Error;

use crate::reconcile::TrackQuery;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV must contain 'artist' and 'song' columns")]
    MissingColumns,

    #[error("no entries found in {0}")]
    Empty(String),
}

/// Loads setlist entries from a CSV file.
pub fn load_setlist(path: &Path) -> Result<Vec<TrackQuery>, InputError> {
    let file = std::fs::File::open(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let entries = read_setlist(file)?;
    if entries.is_empty() {
        return Err(InputError::Empty(path.display().to_string()));
    }
    Ok(entries)
}

/// Parses setlist CSV content.
///
/// Values are trimmed and rows missing an artist or a song are skipped.
pub fn read_setlist<R: Read>(reader: R) -> Result<Vec<TrackQuery>, InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);
    let (Some(artist_col), Some(song_col)) = (column("artist"), column("song")) else {
        return Err(InputError::MissingColumns);
    };

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let artist = record.get(artist_col).unwrap_or_default();
        let song = record.get(song_col).unwrap_or_default();
        if artist.is_empty() || song.is_empty() {
            continue;
        }
        entries.push(TrackQuery::new(artist, song));
    }

    Ok(entries)
}

/// Loads artist names from a text file, one per line.
pub fn load_artists(path: &Path) -> Result<Vec<String>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let artists = parse_artists(&content);
    if artists.is_empty() {
        return Err(InputError::Empty(path.display().to_string()));
    }
    Ok(artists)
}

pub fn parse_artists(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
