use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::Config,
    error, info,
    reconcile::PlaylistStore,
    spotify::{self, SpotifyClient},
    types::PkceToken,
};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    let config = load_config();
    spotify::auth::auth(Arc::new(config), shared_state).await;
}

/// Reads the configuration or exits listing every missing variable.
pub(super) fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!(
            "{}\nPlease create a .env file with these variables or set them in your environment.",
            e
        ),
    }
}

/// Connects with the cached token and resolves the current user id.
pub(super) async fn session() -> (SpotifyClient, String) {
    let config = load_config();

    let client = match SpotifyClient::connect(config).await {
        Ok(client) => client,
        Err(e) => error!(
            "Failed to load token. Please run spotgen auth\n Error: {}",
            e
        ),
    };

    let user_id = match client.current_user().await {
        Ok(id) => id,
        Err(e) => error!("Authentication error: {}", e),
    };
    info!("Authenticated as: {}", user_id);

    (client, user_id)
}
