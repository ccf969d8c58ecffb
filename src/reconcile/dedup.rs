use std::collections::HashSet;

use super::model::TrackRef;

/// Result of [`filter_new`]: both sides keep input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    pub new_tracks: Vec<T>,
    pub already_present: Vec<T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            new_tracks: Vec::new(),
            already_present: Vec::new(),
        }
    }
}

impl<T: TrackRef> Partition<T> {
    /// Ids of the new tracks, ready for batching.
    pub fn new_ids(&self) -> Vec<String> {
        self.new_tracks
            .iter()
            .filter_map(|t| t.track_id().map(str::to_string))
            .collect()
    }
}

/// Splits found tracks into those missing from `existing_ids` and those already there.
///
/// Items without a track id are skipped. Repeated ids keep only their first
/// occurrence, so no id is ever written twice in one run.
pub fn filter_new<T>(items: &[T], existing_ids: &HashSet<String>) -> Partition<T>
where
    T: TrackRef + Clone,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut partition = Partition::default();

    for item in items {
        let Some(id) = item.track_id() else {
            continue;
        };
        if !seen.insert(id) {
            continue;
        }

        if existing_ids.contains(id) {
            partition.already_present.push(item.clone());
        } else {
            partition.new_tracks.push(item.clone());
        }
    }

    partition
}

/// Drops repeated ids keeping first occurrences, for lists with no target snapshot.
pub fn unique_ids(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
