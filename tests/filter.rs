// tests/filter.rs
use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use votewatch::engine::{filter, DateRange, Observation, ObservationSet};

fn day(d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(2024, 5, d).unwrap() }
fn at(d: u32, h: u32) -> NaiveDateTime { day(d).and_hms_opt(h, 0, 0).unwrap() }

fn set() -> ObservationSet {
    ObservationSet::new(vec![
        Observation::new("A", 1, at(1, 9)),
        Observation::new("B", 2, at(1, 23)),
        Observation::new("A", 3, at(2, 0)),
        Observation::new("C", 4, at(3, 12)),
        Observation::new("A", 5, at(3, 23)),
    ])
}

fn pick(titles: &[&str]) -> BTreeSet<String> {
    titles.iter().map(|t| t.to_string()).collect()
}

#[test]
fn selection_and_inclusive_range() {
    let out = filter(&set(), &pick(&["A", "C"]), DateRange::new(day(2), day(3)));
    let got: Vec<(String, u64)> = out.iter().map(|o| (o.project_title.clone(), o.vote_count)).collect();
    assert_eq!(got, vec![("A".into(), 3), ("C".into(), 4), ("A".into(), 5)]);
}

#[test]
fn single_day_range_includes_whole_day() {
    let out = filter(&set(), &pick(&["A", "B"]), DateRange::new(day(1), day(1)));
    assert_eq!(out.len(), 2);
}

#[test]
fn empty_selection_is_empty_regardless_of_range() {
    let out = filter(&set(), &BTreeSet::new(), DateRange::new(day(1), day(31)));
    assert!(out.is_empty());
}

#[test]
fn inverted_range_is_empty_not_error() {
    let out = filter(&set(), &pick(&["A", "B", "C"]), DateRange::new(day(3), day(1)));
    assert!(out.is_empty());
}

#[test]
fn unknown_titles_match_nothing() {
    let out = filter(&set(), &pick(&["Z"]), DateRange::new(day(1), day(3)));
    assert!(out.is_empty());
}

#[test]
fn source_set_is_untouched() {
    let s = set();
    let before = s.clone();
    let _ = filter(&s, &pick(&["A"]), DateRange::new(day(1), day(1)));
    assert_eq!(s, before);
}
