use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::reconcile::{AlbumCandidate, ArtistCandidate, TrackCandidate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// Spotify paging object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<Artist>,
    pub popularity: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: Page<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtistsResponse {
    pub artists: Page<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

impl Track {
    /// Local files and unavailable entries carry no id and are dropped.
    pub fn into_candidate(self) -> Option<TrackCandidate> {
        let id = self.id?;
        Some(TrackCandidate {
            id,
            title: self.name,
            artists: self.artists.into_iter().map(|a| a.name).collect(),
            popularity: self.popularity,
        })
    }
}

impl From<Artist> for ArtistCandidate {
    fn from(artist: Artist) -> Self {
        ArtistCandidate {
            id: artist.id,
            name: artist.name,
        }
    }
}

impl From<Album> for AlbumCandidate {
    fn from(album: Album) -> Self {
        AlbumCandidate {
            id: album.id,
            name: album.name,
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub requested: String,
    pub artist: String,
    pub title: String,
}

#[derive(Tabled)]
pub struct NotFoundTableRow {
    pub artist: String,
    pub song: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub requested: String,
    pub matched: String,
    pub popular: usize,
    pub deep_cuts: usize,
}
