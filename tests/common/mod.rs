#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;
use spotgen::reconcile::{
    AlbumCandidate, ArtistCandidate, Catalog, CatalogError, PlaylistStore, TrackCandidate,
};

pub fn track(id: &str, title: &str, artist: &str) -> TrackCandidate {
    TrackCandidate {
        id: id.to_string(),
        title: title.to_string(),
        artists: vec![artist.to_string()],
        popularity: None,
    }
}

pub fn rated(id: &str, popularity: u8) -> TrackCandidate {
    TrackCandidate {
        popularity: Some(popularity),
        ..track(id, &format!("title {}", id), "artist")
    }
}

pub fn album(id: &str, name: &str) -> AlbumCandidate {
    AlbumCandidate {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPlaylist {
    pub id: String,
    pub name: String,
    pub public: bool,
}

/// In-memory catalog and playlist store keyed by the exact query strings.
#[derive(Default)]
pub struct FakeCatalog {
    pub user_id: String,
    pub track_searches: HashMap<String, Vec<TrackCandidate>>,
    pub artist_searches: HashMap<String, Vec<ArtistCandidate>>,
    pub top_tracks: HashMap<String, Vec<TrackCandidate>>,
    pub albums: HashMap<String, Vec<AlbumCandidate>>,
    pub album_tracks: HashMap<String, Vec<TrackCandidate>>,
    pub full_tracks: HashMap<String, TrackCandidate>,
    pub failing_queries: HashSet<String>,
    pub failing_playlists: HashSet<String>,
    pub fail_find_playlist: bool,
    /// Playlist names mapped to (id, existing track ids).
    pub playlists: HashMap<String, (String, HashSet<String>)>,
    /// Write calls failing, counted from zero.
    pub failing_writes: HashSet<usize>,

    pub queries: Mutex<Vec<String>>,
    pub track_lookups: Mutex<Vec<String>>,
    pub created: Mutex<Vec<CreatedPlaylist>>,
    pub writes: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            user_id: "listener".to_string(),
            ..Default::default()
        }
    }

    pub fn with_search(mut self, query: &str, results: Vec<TrackCandidate>) -> Self {
        self.track_searches.insert(query.to_string(), results);
        self
    }

    pub fn with_artist(mut self, name: &str, id: &str, matched: &str) -> Self {
        self.artist_searches.insert(
            format!("artist:{}", name),
            vec![ArtistCandidate {
                id: id.to_string(),
                name: matched.to_string(),
            }],
        );
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<CreatedPlaylist> {
        self.created.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<(String, Vec<String>)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn written_to(&self, playlist_id: &str) -> Vec<String> {
        self.writes()
            .into_iter()
            .filter(|(id, _)| id == playlist_id)
            .flat_map(|(_, ids)| ids)
            .collect()
    }

    fn record(&self, query: &str) -> Result<(), CatalogError> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.failing_queries.contains(query) {
            return Err(CatalogError::Other(format!("search failed: {}", query)));
        }
        Ok(())
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn search_tracks(
        &self,
        query: &str,
        _limit: u32,
    ) -> Result<Vec<TrackCandidate>, CatalogError> {
        self.record(query)?;
        Ok(self.track_searches.get(query).cloned().unwrap_or_default())
    }

    async fn search_artists(
        &self,
        query: &str,
        _limit: u32,
    ) -> Result<Vec<ArtistCandidate>, CatalogError> {
        self.record(query)?;
        Ok(self.artist_searches.get(query).cloned().unwrap_or_default())
    }

    async fn artist_top_tracks(
        &self,
        artist_id: &str,
        _market: &str,
    ) -> Result<Vec<TrackCandidate>, CatalogError> {
        Ok(self.top_tracks.get(artist_id).cloned().unwrap_or_default())
    }

    async fn artist_albums(
        &self,
        artist_id: &str,
        _include_groups: &str,
    ) -> Result<Vec<AlbumCandidate>, CatalogError> {
        Ok(self.albums.get(artist_id).cloned().unwrap_or_default())
    }

    async fn album_tracks(&self, album_id: &str) -> Result<Vec<TrackCandidate>, CatalogError> {
        Ok(self.album_tracks.get(album_id).cloned().unwrap_or_default())
    }

    async fn track(&self, track_id: &str) -> Result<TrackCandidate, CatalogError> {
        self.track_lookups.lock().unwrap().push(track_id.to_string());
        self.full_tracks
            .get(track_id)
            .cloned()
            .ok_or_else(|| CatalogError::Other(format!("unknown track {}", track_id)))
    }
}

#[async_trait]
impl PlaylistStore for FakeCatalog {
    async fn current_user(&self) -> Result<String, CatalogError> {
        Ok(self.user_id.clone())
    }

    async fn find_playlist(
        &self,
        _user_id: &str,
        name: &str,
    ) -> Result<Option<String>, CatalogError> {
        if self.fail_find_playlist {
            return Err(CatalogError::Other("listing failed".to_string()));
        }
        Ok(self.playlists.get(name).map(|(id, _)| id.clone()))
    }

    async fn playlist_track_ids(
        &self,
        playlist_id: &str,
    ) -> Result<HashSet<String>, CatalogError> {
        Ok(self
            .playlists
            .values()
            .find(|(id, _)| id == playlist_id)
            .map(|(_, ids)| ids.clone())
            .unwrap_or_default())
    }

    async fn create_playlist(
        &self,
        _user_id: &str,
        name: &str,
        _description: &str,
        public: bool,
    ) -> Result<String, CatalogError> {
        if self.failing_playlists.contains(name) {
            return Err(CatalogError::Other(format!("cannot create {}", name)));
        }
        let mut created = self.created.lock().unwrap();
        let id = format!("pl{}", created.len() + 1);
        created.push(CreatedPlaylist {
            id: id.clone(),
            name: name.to_string(),
            public,
        });
        Ok(id)
    }

    async fn write_batch(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Result<(), CatalogError> {
        let mut writes = self.writes.lock().unwrap();
        let call = writes.len();
        writes.push((playlist_id.to_string(), track_ids.to_vec()));
        if self.failing_writes.contains(&call) {
            return Err(CatalogError::Other("write rejected".to_string()));
        }
        Ok(())
    }
}
