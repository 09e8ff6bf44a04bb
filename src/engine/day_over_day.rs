// src/engine/day_over_day.rs
use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::snapshot::{snapshot, snapshot_map};
use super::types::{signed, ObservationSet};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayDiff {
    pub project_title: String,
    /// Snapshot value on the last day.
    pub last: u64,
    /// Snapshot value on the day before, 0 when there was none.
    pub previous: u64,
    pub diff: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DayOverDay {
    pub last_date: Option<NaiveDate>,
    pub prev_date: Option<NaiveDate>,
    /// One row per project present on `last_date`, ordered by title.
    pub rows: Vec<DayDiff>,
}

impl DayOverDay {
    pub fn get(&self, title: &str) -> Option<&DayDiff> {
        self.rows.iter().find(|r| r.project_title == title)
    }

    pub fn to_map(&self) -> BTreeMap<String, i64> {
        self.rows.iter().map(|r| (r.project_title.clone(), r.diff)).collect()
    }
}

/// Compare the last day present in `filtered` against the calendar day
/// before it. Empty input gives an empty result with no dates.
pub fn day_over_day(filtered: &ObservationSet) -> DayOverDay {
    match filtered.last_date() {
        Some(last) => day_over_day_at(filtered, last),
        None => DayOverDay::default(),
    }
}

/// Snapshot(`last_date`) minus Snapshot(`last_date - 1 day`).
///
/// The baseline day is always the immediately preceding calendar day, even
/// when it has no data; there is no search for the nearest earlier sample.
/// Projects missing from the baseline compare against 0.
pub fn day_over_day_at(filtered: &ObservationSet, last_date: NaiveDate) -> DayOverDay {
    let prev_date = last_date.pred_opt();
    let previous = prev_date
        .map(|d| snapshot_map(filtered, d))
        .unwrap_or_default();

    let rows = snapshot(filtered, last_date)
        .into_iter()
        .map(|s| {
            let prev = previous.get(&s.project_title).copied().unwrap_or(0);
            DayDiff {
                diff: signed(s.vote_count).saturating_sub(signed(prev)),
                last: s.vote_count,
                previous: prev,
                project_title: s.project_title,
            }
        })
        .collect();

    DayOverDay { last_date: Some(last_date), prev_date, rows }
}
