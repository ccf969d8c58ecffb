//! # Spotify Integration Module
//!
//! This module is the integration layer between spotgen and the Spotify Web API. It owns
//! the OAuth 2.0 PKCE flow and the [`SpotifyClient`], which implements the reconciler's
//! [`Catalog`](crate::reconcile::Catalog) and [`PlaylistStore`](crate::reconcile::PlaylistStore)
//! capabilities over HTTP.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! Builder Layer (setlist flow, artist flow)
//!     ↓
//! Reconciler (resolve, filter_new, select_deep_cuts, chunk)
//!     ↓  Catalog / PlaylistStore traits
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Catalog (search, top tracks, albums, tracks)
//!     └── Playlists (lookup, snapshot, create, add)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Error Handling
//!
//! - **Rate Limiting**: 429 responses are retried after `Retry-After` when it is at most
//!   120 seconds, otherwise surfaced as [`CatalogError::RateLimited`]
//! - **Bad Gateway**: 502 responses are retried after a 10 second pause, a few times
//! - **Authentication**: 401 responses ask the user to run `spotgen auth` again
//! - **Everything else** is returned to the caller, which decides whether the item
//!   is skipped or the run aborts
//!
//! ## API Coverage
//!
//! - `GET /me`, `GET /me/playlists`
//! - `GET /search` (track and artist)
//! - `GET /artists/{id}/top-tracks`, `GET /artists/{id}/albums`
//! - `GET /albums/{id}/tracks`, `GET /tracks/{id}`
//! - `GET /playlists/{id}/tracks`, `POST /playlists/{id}/tracks`
//! - `POST /users/{user_id}/playlists`
//! - `POST /api/token` for code exchange and refresh

pub mod auth;
mod catalog;
mod playlist;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio::{sync::Mutex, time::sleep};

use crate::{
    config::Config, management::TokenManager, reconcile::CatalogError, types::Page, warning,
};

/// How [`SpotifyClient`] retries throttled and failed gateway requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts per request, the first one included.
    pub max_attempts: u32,
    /// Longest `Retry-After` (seconds) still waited out.
    pub max_retry_after: u64,
    /// Pause before retrying a 502.
    pub bad_gateway_pause: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            max_retry_after: 120,
            bad_gateway_pause: Duration::from_secs(10),
        }
    }
}

/// An authenticated Spotify Web API client.
///
/// Constructed explicitly and passed to the flows; there is no global session.
pub struct SpotifyClient {
    http: Client,
    config: Config,
    tokens: Mutex<TokenManager>,
    retry: RetryPolicy,
}

impl SpotifyClient {
    pub fn new(config: Config, tokens: TokenManager) -> Self {
        Self {
            http: Client::new(),
            config,
            tokens: Mutex::new(tokens),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Creates a client from the cached token written by `spotgen auth`.
    pub async fn connect(config: Config) -> Result<Self, String> {
        let tokens = TokenManager::load().await?;
        Ok(Self::new(config, tokens))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    /// Sends a request built by `build`, handling auth, 429 and 502, and decodes the JSON body.
    async fn send<T, F>(&self, build: F) -> Result<T, CatalogError>
    where
        T: DeserializeOwned + Send,
        F: Fn(&Client) -> RequestBuilder + Send,
    {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let token = {
                let mut tokens = self.tokens.lock().await;
                tokens.get_valid_token(&self.http, &self.config).await
            };

            let response = build(&self.http).bearer_auth(token).send().await?;

            match response.status() {
                StatusCode::TOO_MANY_REQUESTS => {
                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .unwrap_or(1);

                    if retry_after > self.retry.max_retry_after
                        || attempt >= self.retry.max_attempts
                    {
                        warning!(
                            "Rate limited by Spotify, retry after {} seconds.",
                            retry_after
                        );
                        return Err(CatalogError::RateLimited(retry_after));
                    }
                    sleep(Duration::from_secs(retry_after)).await;
                }
                StatusCode::BAD_GATEWAY if attempt < self.retry.max_attempts => {
                    sleep(self.retry.bad_gateway_pause).await;
                }
                StatusCode::UNAUTHORIZED => {
                    return Err(CatalogError::Unauthorized(
                        "access token rejected, please run spotgen auth".to_string(),
                    ));
                }
                _ => {
                    let response = response.error_for_status()?;
                    return Ok(response.json::<T>().await?);
                }
            }
        }
    }

    /// Collects the items of every page, following `next` until it is absent.
    async fn get_all_pages<T>(&self, first_url: String) -> Result<Vec<T>, CatalogError>
    where
        T: DeserializeOwned + Send,
    {
        let mut items = Vec::new();
        let mut next = Some(first_url);

        while let Some(url) = next {
            let page: Page<T> = self.send(|http| http.get(&url)).await?;
            items.extend(page.items);
            next = page.next;
        }

        Ok(items)
    }
}
