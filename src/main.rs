use std::{path::PathBuf, sync::Arc, time::Duration};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotgen::{
    builder::ArtistPlaylistOptions, cli, config, reconcile::DeepCutPolicy, types::PkceToken,
    utils, warning,
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Create or update today's setlist playlist from a CSV file
    Setlist(SetlistOptions),

    /// Create popular tracks and deep cuts playlists from a list of artists
    Artists(ArtistsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SetlistOptions {
    /// CSV file with `artist` and `song` columns
    pub file: PathBuf,

    /// Create the playlist as private
    #[clap(long)]
    pub private: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Text file with one artist name per line
    pub file: PathBuf,

    /// Number of popular tracks per artist
    #[clap(long, default_value_t = 3)]
    pub popular_limit: usize,

    /// Number of deep cuts per artist
    #[clap(long, default_value_t = 3)]
    pub deep_limit: usize,

    /// Market (ISO country code) used for top tracks
    #[clap(long, default_value = "US")]
    pub country: String,

    /// Name of the popular tracks playlist
    #[clap(long, default_value = "Most Popular Tracks")]
    pub popular_name: String,

    /// Name of the deep cuts playlist
    #[clap(long, default_value = "Deep Cuts Collection")]
    pub deep_name: String,

    /// Albums per artist considered for deep cuts
    #[clap(long, default_value_t = DeepCutPolicy::DEFAULT_MAX_ALBUMS)]
    pub max_albums: usize,

    /// Tracks per artist looked up for deep cuts
    #[clap(long, default_value_t = DeepCutPolicy::DEFAULT_MAX_TRACKS)]
    pub max_tracks: usize,

    /// Album groups to draw deep cuts from (album, single, appears_on, compilation or all)
    #[clap(long, default_value = "album", value_parser = utils::parse_album_groups)]
    pub album_groups: utils::AlbumGroups,

    /// Create the playlists as private
    #[clap(long)]
    pub private: bool,
}

impl From<ArtistsOptions> for ArtistPlaylistOptions {
    fn from(opt: ArtistsOptions) -> Self {
        ArtistPlaylistOptions {
            popular_limit: opt.popular_limit,
            deep_limit: opt.deep_limit,
            market: opt.country,
            popular_name: opt.popular_name,
            deep_name: opt.deep_name,
            album_groups: opt.album_groups,
            policy: DeepCutPolicy {
                max_albums: opt.max_albums,
                max_tracks: opt.max_tracks,
            },
            public: !opt.private,
            lookup_delay: Duration::from_millis(100),
            artist_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Setlist(opt) => cli::setlist(opt.file, !opt.private).await,
        Command::Artists(opt) => {
            let file = opt.file.clone();
            cli::artists(file, opt.into()).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
