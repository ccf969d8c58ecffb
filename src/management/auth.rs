use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;

use crate::{config::Config, spotify, types::Token};

/// Seconds before expiry at which a token is refreshed.
const EXPIRY_MARGIN: u64 = 240;

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(&path, json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Returns an access token, refreshing and persisting it first when it is about to expire.
    pub async fn get_valid_token(&mut self, client: &Client, config: &Config) -> String {
        if self.is_expired() {
            if let Ok(mut new_token) =
                spotify::auth::refresh_token(client, config, &self.token.refresh_token).await
            {
                // Spotify may omit the refresh token when it is not rotated.
                if new_token.refresh_token.is_empty() {
                    new_token.refresh_token = self.token.refresh_token.clone();
                }
                self.token = new_token;
                let _ = self.persist().await;
            }
        }

        self.token.access_token.clone()
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN >= self.token.obtained_at + self.token.expires_in
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotgen/cache/token.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(obtained_at: u64, expires_in: u64) -> Token {
        Token {
            access_token: "access".into(),
            refresh_token: "refresh".into(),
            scope: "playlist-modify-public".into(),
            expires_in,
            obtained_at,
        }
    }

    #[test]
    fn test_fresh_token_not_expired() {
        let now = Utc::now().timestamp() as u64;
        assert!(!TokenManager::new(token(now, 3600)).is_expired());
    }

    #[test]
    fn test_token_inside_margin_expired() {
        let now = Utc::now().timestamp() as u64;
        assert!(TokenManager::new(token(now - 3500, 3600)).is_expired());
        assert!(TokenManager::new(token(0, 3600)).is_expired());
    }
}
