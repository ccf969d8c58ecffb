//! Configuration management for the Spotify Playlist Generator.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Values are collected once into an explicit [`Config`]
//! that is handed to the Spotify client and the OAuth callback server, so no part of
//! the application reads the environment behind the caller's back.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use thiserror::Error;

pub const DEFAULT_SCOPE: &str =
    "playlist-modify-public playlist-modify-private playlist-read-private user-library-read";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Errors raised while assembling the configuration.
///
/// These are fatal: a run aborts before any playlist is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<String>),
}

/// Runtime configuration for talking to the Spotify Web API.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub server_addr: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// `SPOTIFY_CLIENT_ID` and `SPOTIFY_REDIRECT_URI` are required; the `SPOTIPY_`
    /// spellings used by older setups are accepted as fallbacks. Every missing
    /// variable is reported in a single [`ConfigError::Missing`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let either = |primary: &str, fallback: &str| get(primary).or_else(|| get(fallback));

        let client_id = either("SPOTIFY_CLIENT_ID", "SPOTIPY_CLIENT_ID");
        let redirect_uri = either("SPOTIFY_REDIRECT_URI", "SPOTIPY_REDIRECT_URI");

        let mut missing = Vec::new();
        if client_id.is_none() {
            missing.push("SPOTIFY_CLIENT_ID or SPOTIPY_CLIENT_ID".to_string());
        }
        if redirect_uri.is_none() {
            missing.push("SPOTIFY_REDIRECT_URI or SPOTIPY_REDIRECT_URI".to_string());
        }

        match (client_id, redirect_uri) {
            (Some(client_id), Some(redirect_uri)) => Ok(Self {
                client_id,
                redirect_uri,
                scope: get("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
                auth_url: get("SPOTIFY_API_AUTH_URL")
                    .unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
                token_url: get("SPOTIFY_API_TOKEN_URL")
                    .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
                api_url: get("SPOTIFY_API_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                server_addr: get("SERVER_ADDRESS")
                    .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            }),
            _ => Err(ConfigError::Missing(missing)),
        }
    }
}

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` in the current working directory first and then in the
/// platform-specific local data directory under `spotgen/.env`. Variables that are
/// already set are never overwritten, and a missing file is not an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotgen/.env`
/// - macOS: `~/Library/Application Support/spotgen/.env`
/// - Windows: `%LOCALAPPDATA%/spotgen/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.to_string()),
    }

    let path = data_env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotgen/.env");
    path
}
