// src/engine/snapshot.rs
use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::types::{Observation, ObservationSet, Snapshot};

/// Latest observation per project on `date`, ordered by title.
///
/// Projects with nothing on that day are absent, not zero. Input order is
/// not trusted: observations are walked in time order so the last write per
/// project is its maximum timestamp.
pub fn snapshot(set: &ObservationSet, date: NaiveDate) -> Vec<Snapshot> {
    let mut latest: BTreeMap<&str, &Observation> = BTreeMap::new();
    for o in set.chronological() {
        if o.date() == date {
            latest.insert(o.project_title.as_str(), o);
        }
    }

    latest
        .into_values()
        .map(|o| Snapshot {
            project_title: o.project_title.clone(),
            vote_count: o.vote_count,
            as_of: date,
        })
        .collect()
}

/// `snapshot` keyed by title.
pub fn snapshot_map(set: &ObservationSet, date: NaiveDate) -> BTreeMap<String, u64> {
    snapshot(set, date)
        .into_iter()
        .map(|s| (s.project_title, s.vote_count))
        .collect()
}
