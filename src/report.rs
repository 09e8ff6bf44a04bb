// src/report.rs
//
// One dashboard refresh, computed from a loaded ObservationSet.
//
// Snapshot, standings, details and day-over-day use the *filtered* set.
// Window deltas always use the *full* set, so a project filtered out of the
// tables still counts toward the hour/day/week/month totals.

use chrono::NaiveDate;

use crate::config::options::ReportOptions;
use crate::engine::{
    all_window_deltas, day_over_day, filter, snapshot, DayOverDay, Observation, ObservationSet,
    Snapshot, WindowDeltas,
};

#[derive(Clone, Debug)]
pub struct Report {
    /// Last date present after filtering.
    pub last_date: Option<NaiveDate>,
    /// Snapshot of `last_date`.
    pub last_day: Vec<Snapshot>,
    pub day_over_day: DayOverDay,
    /// Hour, day, week, month.
    pub windows: Vec<WindowDeltas>,
    /// Latest count per filtered project, highest first.
    pub standings: Vec<Observation>,
    /// Filtered observations, newest first.
    pub details: Vec<Observation>,
    /// Rows dropped while loading.
    pub skipped: usize,
}

impl Report {
    pub fn build(full: &ObservationSet, opts: &ReportOptions, skipped: usize) -> Self {
        let filtered = filter(full, &opts.selection, opts.range);
        let last_date = filtered.last_date();

        let last_day = last_date.map(|d| snapshot(&filtered, d)).unwrap_or_default();

        let mut standings: Vec<Observation> =
            filtered.latest_per_title().into_values().cloned().collect();
        standings.sort_by(|a, b| {
            b.vote_count.cmp(&a.vote_count).then_with(|| a.project_title.cmp(&b.project_title))
        });

        let mut details: Vec<Observation> = filtered.iter().cloned().collect();
        // stable: equal timestamps keep load order
        details.sort_by(|a, b| b.observed_at.cmp(&a.observed_at));

        logd!(
            "Report: {} of {} observation(s) after filter, last date {:?}",
            filtered.len(),
            full.len(),
            last_date
        );

        Self {
            last_date,
            last_day,
            day_over_day: day_over_day(&filtered),
            windows: all_window_deltas(full),
            standings,
            details,
            skipped,
        }
    }

    /// Nothing survived the filter.
    pub fn is_empty(&self) -> bool { self.details.is_empty() }
}

/// Group digits by thousands with spaces: `1234567` → `1 234 567`.
pub fn fmt_thousands(v: i64) -> String {
    let digits = v.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if v < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// `fmt_thousands` for vote counts; counts past `i64::MAX` saturate.
pub fn fmt_count(v: u64) -> String {
    fmt_thousands(i64::try_from(v).unwrap_or(i64::MAX))
}

/// Like `fmt_thousands` but always signed: `+12`, `-3`, `+0`.
pub fn fmt_signed(v: i64) -> String {
    if v < 0 { fmt_thousands(v) } else { format!("+{}", fmt_thousands(v)) }
}
