// src/engine/window.rs
//
// Window deltas: how much each project gained since the start of the most
// recent hour/day/week/month that has any data.
//
// Windows are calendar-aligned truncations, not rolling lookbacks: the log
// is polled at irregular intervals, and truncation gives boundaries that can
// be reproduced by hand.
//
// Always run against the full history. The dashboard's project/date filter
// does not apply here.

use std::collections::BTreeMap;

use super::types::{signed, Delta, ObservationSet, Window, WindowKey};

/// Deltas of one granularity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowDeltas {
    pub window: Window,
    /// Most recent window with data; None for an empty set.
    pub current: Option<WindowKey>,
    /// One entry per project in the set, ordered by title.
    pub deltas: Vec<Delta>,
}

impl WindowDeltas {
    fn empty(window: Window) -> Self {
        Self { window, current: None, deltas: Vec::new() }
    }

    /// Sum over all projects; what the dashboard's metric strip shows.
    pub fn total(&self) -> i64 {
        self.deltas.iter().fold(0i64, |acc, d| acc.saturating_add(d.value))
    }

    pub fn get(&self, title: &str) -> Option<i64> {
        self.deltas.iter().find(|d| d.project_title == title).map(|d| d.value)
    }

    pub fn to_map(&self) -> BTreeMap<String, i64> {
        self.deltas.iter().map(|d| (d.project_title.clone(), d.value)).collect()
    }
}

/// `latest - first_in_current_window` per project.
///
/// - `latest` is the project's chronologically last observation anywhere.
/// - the baseline is its first observation whose key equals the overall max
///   key; a project with no sample there gets baseline 0 (delta = latest).
/// - negative results are kept as-is.
pub fn window_deltas(set: &ObservationSet, window: Window) -> WindowDeltas {
    let ordered = set.chronological();

    let Some(current) = ordered.iter().map(|o| window.key(o.observed_at)).max() else {
        return WindowDeltas::empty(window);
    };

    let mut latest: BTreeMap<&str, u64> = BTreeMap::new();
    let mut start: BTreeMap<&str, u64> = BTreeMap::new();

    for o in &ordered {
        let title = o.project_title.as_str();
        latest.insert(title, o.vote_count);
        if window.key(o.observed_at) == current {
            start.entry(title).or_insert(o.vote_count);
        }
    }

    let deltas = latest
        .into_iter()
        .map(|(title, last)| {
            let base = start.get(title).copied().unwrap_or(0);
            Delta {
                project_title: s!(title),
                window,
                value: signed(last).saturating_sub(signed(base)),
            }
        })
        .collect();

    WindowDeltas { window, current: Some(current), deltas }
}

/// `window_deltas` for hour, day, week and month, in that order.
pub fn all_window_deltas(set: &ObservationSet) -> Vec<WindowDeltas> {
    Window::ALL.iter().map(|&w| window_deltas(set, w)).collect()
}
