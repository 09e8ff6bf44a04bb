// src/config/options.rs
//
// Per-request configuration surface: which projects, which days, and how a
// report is written out. Owned by the front-ends; the engine only reads it.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::consts::DATE_INPUT_FORMAT;
use crate::csv::Delim;
use crate::engine::types::{DateRange, ObservationSet};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Selected project titles. Empty selects nothing.
    pub selection: BTreeSet<String>,
    /// Inclusive date range applied to snapshots and day-over-day.
    pub range: DateRange,
}

impl ReportOptions {
    pub fn new(selection: BTreeSet<String>, range: DateRange) -> Self {
        Self { selection, range }
    }

    /// Everything selected, full date span. None for an empty set.
    pub fn defaults_for(set: &ObservationSet) -> Option<Self> {
        let (start, end) = set.date_span()?;
        Some(Self { selection: set.titles(), range: DateRange::new(start, end) })
    }

    /// Keep only titles still present in `set` (after a reload).
    pub fn retain_known(&mut self, set: &ObservationSet) {
        let known = set.titles();
        self.selection.retain(|t| known.contains(t));
    }

    /// Carry the filter over a reload from `previous` to `current`.
    ///
    /// A selection that covered every old title grows to every new title.
    /// A range edge that sat on the old first/last date moves with the data;
    /// an edge the user picked stays put.
    pub fn follow_reload(&mut self, previous: &ObservationSet, current: &ObservationSet) {
        if self.selection == previous.titles() {
            self.selection = current.titles();
        } else {
            self.retain_known(current);
        }

        if let (Some((old_first, old_last)), Some((first, last))) = (previous.date_span(), current.date_span()) {
            if self.range.start == old_first {
                self.range.start = first;
            }
            if self.range.end == old_last {
                self.range.end = last;
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Delimited(Delim),
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Delimited(Delim::Csv)),
            "tsv" => Ok(Self::Delimited(Delim::Tsv)),
            other => Err(format!("invalid format '{other}', expected one of: table, csv, tsv")),
        }
    }
}

/// `YYYY-MM-DD` as typed on the command line.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_INPUT_FORMAT)
        .map_err(|_| Error::InvalidDate(s!(text.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::Observation;

    fn obs(title: &str, day: u32) -> Observation {
        let at = NaiveDate::from_ymd_opt(2024, 5, day).unwrap().and_hms_opt(12, 0, 0).unwrap();
        Observation::new(title, 1, at)
    }

    #[test]
    fn defaults_cover_all_titles_and_days() {
        let set = ObservationSet::new(vec![obs("B", 3), obs("A", 1), obs("B", 2)]);
        let opts = ReportOptions::defaults_for(&set).unwrap();
        assert_eq!(opts.selection.iter().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(opts.range.start, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(opts.range.end, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    }

    #[test]
    fn no_defaults_for_empty_set() {
        assert!(ReportOptions::defaults_for(&ObservationSet::default()).is_none());
    }

    #[test]
    fn retain_known_drops_vanished_titles() {
        let set = ObservationSet::new(vec![obs("A", 1)]);
        let mut opts = ReportOptions::defaults_for(&set).unwrap();
        opts.selection.insert(s!("Gone"));
        opts.retain_known(&set);
        assert_eq!(opts.selection.len(), 1);
    }

    #[test]
    fn reload_grows_full_selection_and_open_range() {
        let before = ObservationSet::new(vec![obs("A", 1), obs("A", 2)]);
        let after = ObservationSet::new(vec![obs("A", 1), obs("A", 2), obs("A", 3), obs("B", 3)]);
        let mut opts = ReportOptions::defaults_for(&before).unwrap();
        opts.follow_reload(&before, &after);
        assert_eq!(opts.selection.iter().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(opts.range.end, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    }

    #[test]
    fn reload_keeps_user_picks() {
        let before = ObservationSet::new(vec![obs("A", 1), obs("B", 1), obs("A", 2)]);
        let after = ObservationSet::new(vec![obs("A", 1), obs("B", 1), obs("A", 2), obs("C", 3)]);
        let mut opts = ReportOptions::defaults_for(&before).unwrap();
        opts.selection.remove("B");
        opts.range.end = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        opts.follow_reload(&before, &after);
        assert_eq!(opts.selection.iter().collect::<Vec<_>>(), vec!["A"]);
        assert_eq!(opts.range.end, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn format_and_date_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Delimited(Delim::Csv));
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(parse_date("2024-05-01").unwrap(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(matches!(parse_date("01.05.2024"), Err(Error::InvalidDate(_))));
    }
}
