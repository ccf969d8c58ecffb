//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that completes the Spotify
//! OAuth 2.0 PKCE flow started by `spotgen auth`.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the authorization code from Spotify, exchanges it together
//!   with the stored code verifier for an access token and hands the token back to the
//!   waiting auth flow through the shared state.
//! - [`health`] - Reports service name, version and whether a token has arrived yet.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use spotgen::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health))
//!     .layer(Extension(shared_state))
//!     .layer(Extension(config));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
