use std::collections::HashSet;

use async_trait::async_trait;

use super::SpotifyClient;
use crate::{
    reconcile::{CatalogError, PlaylistStore},
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, CurrentUser, Playlist, PlaylistItem,
    },
};

#[async_trait]
impl PlaylistStore for SpotifyClient {
    async fn current_user(&self) -> Result<String, CatalogError> {
        let url = self.url("/me");
        let user: CurrentUser = self.send(|http| http.get(&url)).await?;
        Ok(user.id)
    }

    async fn find_playlist(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<Option<String>, CatalogError> {
        let playlists: Vec<Playlist> = self.get_all_pages(self.url("/me/playlists?limit=50")).await?;

        Ok(playlists
            .into_iter()
            .find(|p| p.name == name && p.owner.id == user_id)
            .map(|p| p.id))
    }

    async fn playlist_track_ids(
        &self,
        playlist_id: &str,
    ) -> Result<HashSet<String>, CatalogError> {
        let url = self.url(&format!(
            "/playlists/{}/tracks?fields=items(track(id)),next&limit=100",
            playlist_id
        ));
        let items: Vec<PlaylistItem> = self.get_all_pages(url).await?;

        Ok(items
            .into_iter()
            .filter_map(|item| item.track.and_then(|t| t.id))
            .collect())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Result<String, CatalogError> {
        let url = self.url(&format!("/users/{}/playlists", user_id));
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public,
        };

        let res: CreatePlaylistResponse = self.send(|http| http.post(&url).json(&body)).await?;
        Ok(res.id)
    }

    async fn write_batch(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Result<(), CatalogError> {
        let url = self.url(&format!("/playlists/{}/tracks", playlist_id));
        let body = AddTrackToPlaylistRequest {
            uris: track_ids
                .iter()
                .map(|id| format!("spotify:track:{}", id))
                .collect(),
        };

        let _: AddTrackToPlaylistResponse = self.send(|http| http.post(&url).json(&body)).await?;
        Ok(())
    }
}
