// src/engine/types.rs
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::config::consts::TIMESTAMP_FORMAT;
use crate::error::Error;

/// One row of the persisted log, as text. `line` is the 1-based file line
/// (0 for rows built in memory).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub line: usize,
    pub title: String,
    pub votes: String,
    pub timestamp: String,
}

impl RawRecord {
    pub fn new(title: impl Into<String>, votes: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self { line: 0, title: title.into(), votes: votes.into(), timestamp: timestamp.into() }
    }

    /// Stamp with the current local time in the log's fixed format.
    pub fn now(title: impl Into<String>, votes: impl Into<String>) -> Self {
        let ts = Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string();
        Self::new(title, votes, ts)
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![self.title.clone(), self.votes.clone(), self.timestamp.clone()]
    }
}

/// A single `(project, vote count, timestamp)` sample.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    pub project_title: String,
    pub vote_count: u64,
    pub observed_at: NaiveDateTime,
}

impl Observation {
    pub fn new(project_title: impl Into<String>, vote_count: u64, observed_at: NaiveDateTime) -> Self {
        Self { project_title: project_title.into(), vote_count, observed_at }
    }

    #[inline]
    pub fn date(&self) -> NaiveDate { self.observed_at.date() }
}

/// Caller-owned collection of observations, in load order.
/// Never mutated after construction; every query borrows it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObservationSet {
    items: Vec<Observation>,
}

impl ObservationSet {
    pub fn new(items: Vec<Observation>) -> Self { Self { items } }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn as_slice(&self) -> &[Observation] { &self.items }
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> { self.items.iter() }

    /// Stable sort by `observed_at`: rows sharing a timestamp keep load order,
    /// so "last" picks the later row and "first" the earlier one.
    pub fn chronological(&self) -> Vec<&Observation> {
        let mut v: Vec<&Observation> = self.items.iter().collect();
        v.sort_by_key(|o| o.observed_at);
        v
    }

    /// Distinct project titles, sorted.
    pub fn titles(&self) -> BTreeSet<String> {
        self.items.iter().map(|o| o.project_title.clone()).collect()
    }

    /// `(first date, last date)` present, if any.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.items.iter().map(Observation::date).min()?;
        let last = self.items.iter().map(Observation::date).max()?;
        Some((first, last))
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.items.iter().map(Observation::date).max()
    }

    /// Chronologically last observation per project.
    pub fn latest_per_title(&self) -> BTreeMap<&str, &Observation> {
        let mut out = BTreeMap::new();
        for o in self.chronological() {
            out.insert(o.project_title.as_str(), o);
        }
        out
    }
}

impl FromIterator<Observation> for ObservationSet {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ObservationSet {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

/// Calendar granularity used to pick a delta baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Window {
    Hour,
    Day,
    Week,
    Month,
}

impl Window {
    pub const ALL: [Window; 4] = [Window::Hour, Window::Day, Window::Week, Window::Month];

    pub fn as_str(self) -> &'static str {
        match self {
            Window::Hour => "hour",
            Window::Day => "day",
            Window::Week => "week",
            Window::Month => "month",
        }
    }

    /// Dashboard caption.
    pub fn label(self) -> &'static str {
        match self {
            Window::Hour => "Since start of hour",
            Window::Day => "Since start of day",
            Window::Week => "Since start of week",
            Window::Month => "Since start of month",
        }
    }

    /// Truncate a timestamp to this window.
    pub fn key(self, at: NaiveDateTime) -> WindowKey {
        let date = at.date();
        match self {
            Window::Hour => WindowKey::Hour(date, at.hour()),
            Window::Day => WindowKey::Day(date),
            Window::Week => {
                let iso = date.iso_week();
                WindowKey::Week { year: iso.year(), week: iso.week() }
            }
            Window::Month => WindowKey::Month { year: date.year(), month: date.month() },
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Window {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hour" => Ok(Window::Hour),
            "day" => Ok(Window::Day),
            "week" => Ok(Window::Week),
            "month" => Ok(Window::Month),
            other => Err(Error::InvalidWindow(s!(other))),
        }
    }
}

/// Result of `Window::key`. Keys of one granularity order chronologically;
/// week and month keys carry the year so December never outranks January.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindowKey {
    Hour(NaiveDate, u32),
    Day(NaiveDate),
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowKey::Hour(d, h) => write!(f, "{} {h:02}:00", d.format("%Y-%m-%d")),
            WindowKey::Day(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            WindowKey::Week { year, week } => write!(f, "{year}-W{week:02}"),
            WindowKey::Month { year, month } => write!(f, "{year}-{month:02}"),
        }
    }
}

/// Latest count minus the first count inside the current window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delta {
    pub project_title: String,
    pub window: Window,
    pub value: i64,
}

/// Latest observation of a project on one day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub project_title: String,
    pub vote_count: u64,
    pub as_of: NaiveDate,
}

/// Inclusive `[start, end]` date range. `start > end` is valid and matches nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self { Self { start, end } }

    #[inline]
    pub fn is_inverted(&self) -> bool { self.start > self.end }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Vote counts are unsigned; deltas are signed. Saturate instead of wrapping.
#[inline]
pub(crate) fn signed(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
