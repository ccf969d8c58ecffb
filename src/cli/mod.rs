//! # CLI Module
//!
//! User-facing commands of spotgen. Each command reads its configuration, authenticates
//! with the cached token, hands the parsed input to the matching flow in
//! [`crate::builder`] and renders the returned report.
//!
//! ## Commands
//!
//! - [`auth`] - Runs the Spotify OAuth 2.0 PKCE flow and caches the token
//! - [`setlist`] - Builds (or tops up) the dated setlist playlist from a CSV file
//! - [`artists`] - Builds the popular tracks and deep cuts playlists from an artist list
//!
//! ## Failure Handling
//!
//! Missing configuration, an unreadable input file or a missing token end the command
//! with [`error!`](crate::error) before any playlist is touched. Tracks or artists that
//! cannot be found are reported at the end and never abort a run.
//!
//! ## Usage
//!
//! ```bash
//! spotgen auth                                  # Authenticate with Spotify
//! spotgen setlist setlist.csv                   # Today's setlist playlist
//! spotgen artists artists.txt --deep-limit 5    # Popular and deep cut playlists
//! ```

mod artists;
mod auth;
mod setlist;

pub use artists::artists;
pub use auth::auth;
pub use setlist::setlist;
