use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

/// A free-text lookup for a single track, or an artist when `title` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackQuery {
    pub artist: String,
    pub title: Option<String>,
}

impl TrackQuery {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: Some(title.into()),
        }
    }

    pub fn artist_only(artist: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: None,
        }
    }

    /// Field-filtered search query, e.g. `artist:"Miles Davis" track:"So What"`.
    pub fn strict_query(&self) -> String {
        match &self.title {
            Some(title) => format!("artist:\"{}\" track:\"{}\"", self.artist, title),
            None => format!("artist:\"{}\"", self.artist),
        }
    }

    /// Unstructured search query made of the raw strings.
    pub fn loose_query(&self) -> String {
        match &self.title {
            Some(title) => format!("{} {}", self.artist, title),
            None => self.artist.clone(),
        }
    }
}

impl fmt::Display for TrackQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{} - {}", self.artist, title),
            None => write!(f, "{}", self.artist),
        }
    }
}

/// A catalog track as returned by a search or lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCandidate {
    pub id: String,
    pub title: String,
    /// Credited artists, primary artist first.
    pub artists: Vec<String>,
    /// Popularity in `0..=100`, only known for fully fetched tracks.
    pub popularity: Option<u8>,
}

impl TrackCandidate {
    pub fn artist_name(&self) -> &str {
        self.artists.first().map(String::as_str).unwrap_or_default()
    }

    /// Returns the credited artist matching `artist` case-insensitively, if any.
    pub fn credited_as(&self, artist: &str) -> Option<&str> {
        let wanted = artist.to_lowercase();
        self.artists
            .iter()
            .find(|a| a.to_lowercase() == wanted)
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistCandidate {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumCandidate {
    pub id: String,
    pub name: String,
}

/// Outcome of resolving one query. `candidate == None` means not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTrack {
    pub query: TrackQuery,
    pub candidate: Option<TrackCandidate>,
}

impl ResolvedTrack {
    pub fn found(query: TrackQuery, candidate: TrackCandidate) -> Self {
        Self {
            query,
            candidate: Some(candidate),
        }
    }

    pub fn not_found(query: TrackQuery) -> Self {
        Self {
            query,
            candidate: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.candidate.is_some()
    }

    /// Artist name to show for a match: the credit matching the query, else the primary.
    pub fn matched_artist(&self) -> Option<&str> {
        self.candidate.as_ref().map(|c| {
            c.credited_as(&self.query.artist)
                .unwrap_or_else(|| c.artist_name())
        })
    }
}

/// The only facts reconciliation needs about a target playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistSnapshot {
    pub id: String,
    pub existing_track_ids: HashSet<String>,
}

impl PlaylistSnapshot {
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            existing_track_ids: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.existing_track_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.existing_track_ids.is_empty()
    }
}

/// Anything carrying an (optional) catalog track id.
pub trait TrackRef {
    fn track_id(&self) -> Option<&str>;
}

impl TrackRef for TrackCandidate {
    fn track_id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

impl TrackRef for ResolvedTrack {
    fn track_id(&self) -> Option<&str> {
        self.candidate.as_ref().map(|c| c.id.as_str())
    }
}
