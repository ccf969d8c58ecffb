use std::{collections::BTreeSet, fmt};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::NaiveDate;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

pub fn setlist_playlist_name(date: NaiveDate) -> String {
    format!("Setlist {}", date.format("%Y-%m-%d"))
}

pub fn setlist_playlist_description(date: NaiveDate) -> String {
    format!(
        "Setlist playlist created/updated on {}",
        date.format("%Y-%m-%d")
    )
}

pub fn playlist_url(playlist_id: &str) -> String {
    format!("https://open.spotify.com/playlist/{}", playlist_id)
}

/// Album groups accepted by the artist albums endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlbumGroup {
    Album,
    Single,
    AppearsOn,
    Compilation,
}

impl AlbumGroup {
    pub const ALL: [AlbumGroup; 4] = [
        AlbumGroup::Album,
        AlbumGroup::Single,
        AlbumGroup::AppearsOn,
        AlbumGroup::Compilation,
    ];

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().replace('-', "_").as_str() {
            "album" => Some(AlbumGroup::Album),
            "single" => Some(AlbumGroup::Single),
            "appears_on" => Some(AlbumGroup::AppearsOn),
            "compilation" => Some(AlbumGroup::Compilation),
            _ => None,
        }
    }
}

impl fmt::Display for AlbumGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlbumGroup::Album => "album",
            AlbumGroup::Single => "single",
            AlbumGroup::AppearsOn => "appears_on",
            AlbumGroup::Compilation => "compilation",
        };
        f.write_str(s)
    }
}

/// Set of album groups, rendered as the comma separated `include_groups` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumGroups(pub BTreeSet<AlbumGroup>);

impl AlbumGroups {
    pub fn iter(&self) -> impl Iterator<Item = AlbumGroup> + '_ {
        self.0.iter().copied()
    }
}

impl Default for AlbumGroups {
    fn default() -> Self {
        AlbumGroups(BTreeSet::from([AlbumGroup::Album]))
    }
}

impl fmt::Display for AlbumGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

/// Parses `--album-groups` values like `album,single` or `all`.
pub fn parse_album_groups(input: &str) -> Result<AlbumGroups, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("album groups cannot be empty".to_string());
    }
    if trimmed.eq_ignore_ascii_case("all") {
        return Ok(AlbumGroups(AlbumGroup::ALL.into_iter().collect()));
    }

    let mut groups = BTreeSet::new();
    for segment in trimmed.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            return Err(format!("empty segment in '{}'", input));
        }
        match AlbumGroup::parse(segment) {
            Some(group) => {
                groups.insert(group);
            }
            None => {
                return Err(format!(
                    "invalid value '{}', expected one of album, single, appears_on, compilation, all",
                    segment
                ));
            }
        }
    }

    Ok(AlbumGroups(groups))
}
