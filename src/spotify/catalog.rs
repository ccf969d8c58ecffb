use async_trait::async_trait;

use super::SpotifyClient;
use crate::{
    reconcile::{AlbumCandidate, ArtistCandidate, Catalog, CatalogError, TrackCandidate},
    types::{Album, SearchArtistsResponse, SearchTracksResponse, TopTracksResponse, Track},
};

#[async_trait]
impl Catalog for SpotifyClient {
    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<TrackCandidate>, CatalogError> {
        let url = self.url("/search");
        let limit = limit.to_string();
        let params = [("q", query), ("type", "track"), ("limit", limit.as_str())];

        let res: SearchTracksResponse = self.send(|http| http.get(&url).query(&params)).await?;

        Ok(res
            .tracks
            .items
            .into_iter()
            .filter_map(Track::into_candidate)
            .collect())
    }

    async fn search_artists(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<ArtistCandidate>, CatalogError> {
        let url = self.url("/search");
        let limit = limit.to_string();
        let params = [("q", query), ("type", "artist"), ("limit", limit.as_str())];

        let res: SearchArtistsResponse = self.send(|http| http.get(&url).query(&params)).await?;

        Ok(res.artists.items.into_iter().map(Into::into).collect())
    }

    async fn artist_top_tracks(
        &self,
        artist_id: &str,
        market: &str,
    ) -> Result<Vec<TrackCandidate>, CatalogError> {
        let url = self.url(&format!("/artists/{}/top-tracks", artist_id));
        let params = [("market", market)];

        let res: TopTracksResponse = self.send(|http| http.get(&url).query(&params)).await?;

        Ok(res
            .tracks
            .into_iter()
            .filter_map(Track::into_candidate)
            .collect())
    }

    async fn artist_albums(
        &self,
        artist_id: &str,
        include_groups: &str,
    ) -> Result<Vec<AlbumCandidate>, CatalogError> {
        let url = self.url(&format!(
            "/artists/{id}/albums?include_groups={include_groups}&limit=50",
            id = artist_id,
            include_groups = include_groups
        ));

        let albums: Vec<Album> = self.get_all_pages(url).await?;
        Ok(albums.into_iter().map(Into::into).collect())
    }

    async fn album_tracks(&self, album_id: &str) -> Result<Vec<TrackCandidate>, CatalogError> {
        let url = self.url(&format!("/albums/{}/tracks?limit=50", album_id));

        let tracks: Vec<Track> = self.get_all_pages(url).await?;
        Ok(tracks
            .into_iter()
            .filter_map(Track::into_candidate)
            .collect())
    }

    async fn track(&self, track_id: &str) -> Result<TrackCandidate, CatalogError> {
        let url = self.url(&format!("/tracks/{}", track_id));

        let track: Track = self.send(|http| http.get(&url)).await?;
        track
            .into_candidate()
            .ok_or_else(|| CatalogError::Other(format!("track {} has no id", track_id)))
    }
}
