// tests/window_delta.rs
//
// Calendar-window deltas over the full history.
//
use chrono::{NaiveDate, NaiveDateTime};
use votewatch::engine::{
    all_window_deltas, day_over_day, window_deltas, Observation, ObservationSet, Window, WindowKey,
};

fn at(m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

fn o(title: &str, votes: u64, when: NaiveDateTime) -> Observation {
    Observation::new(title, votes, when)
}

/// A: 100 @ 05-01 09:00, 105 @ 05-01 10:15, 110 @ 05-02 10:05
/// B:  50 @ 05-01 09:30,  50 @ 05-02 10:10
fn sample() -> Vec<Observation> {
    vec![
        o("A", 100, at(5, 1, 9, 0)),
        o("A", 105, at(5, 1, 10, 15)),
        o("A", 110, at(5, 2, 10, 5)),
        o("B", 50, at(5, 1, 9, 30)),
        o("B", 50, at(5, 2, 10, 10)),
    ]
}

#[test]
fn hour_window_covers_latest_hour_only() {
    let d = window_deltas(&ObservationSet::new(sample()), Window::Hour);
    assert_eq!(d.current, Some(WindowKey::Hour(at(5, 2, 0, 0).date(), 10)));
    assert_eq!(d.get("A"), Some(0));
    assert_eq!(d.get("B"), Some(0));
}

#[test]
fn month_window_spans_whole_sample() {
    let d = window_deltas(&ObservationSet::new(sample()), Window::Month);
    assert_eq!(d.get("A"), Some(10));
    assert_eq!(d.get("B"), Some(0));
    assert_eq!(d.total(), 10);
}

#[test]
fn independent_of_input_order() {
    let forward = sample();
    let mut backward = sample();
    backward.reverse();
    let mut shuffled = sample();
    shuffled.swap(0, 4);
    shuffled.swap(1, 3);

    for w in Window::ALL {
        let a = window_deltas(&ObservationSet::new(forward.clone()), w);
        let b = window_deltas(&ObservationSet::new(backward.clone()), w);
        let c = window_deltas(&ObservationSet::new(shuffled.clone()), w);
        assert_eq!(a, b, "{w}");
        assert_eq!(a, c, "{w}");
    }
}

#[test]
fn project_absent_from_current_window_uses_zero_baseline() {
    // C stopped reporting before the last day: delta = its latest value.
    let mut items = sample();
    items.push(o("C", 40, at(5, 1, 8, 0)));
    let d = window_deltas(&ObservationSet::new(items), Window::Day);
    assert_eq!(d.get("C"), Some(40));
    assert_eq!(d.get("A"), Some(0));
}

#[test]
fn single_sample_in_window_is_zero() {
    let set = ObservationSet::new(vec![o("A", 7, at(5, 1, 9, 0)), o("A", 9, at(5, 2, 9, 0))]);
    assert_eq!(window_deltas(&set, Window::Day).get("A"), Some(0));
    assert_eq!(window_deltas(&set, Window::Week).get("A"), Some(2));
}

#[test]
fn decreases_stay_negative() {
    let set = ObservationSet::new(vec![o("A", 90, at(5, 2, 9, 0)), o("A", 80, at(5, 2, 18, 0))]);
    assert_eq!(window_deltas(&set, Window::Day).get("A"), Some(-10));
}

#[test]
fn every_project_gets_an_entry() {
    let set = ObservationSet::new(sample());
    for d in all_window_deltas(&set) {
        let titles: Vec<&str> = d.deltas.iter().map(|x| x.project_title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"], "{}", d.window);
        assert!(d.deltas.iter().all(|x| x.window == d.window));
    }
}

#[test]
fn all_windows_come_in_fixed_order() {
    let windows: Vec<Window> = all_window_deltas(&ObservationSet::new(sample()))
        .into_iter()
        .map(|d| d.window)
        .collect();
    assert_eq!(windows, Window::ALL.to_vec());
}

#[test]
fn empty_set_has_no_current_window() {
    for d in all_window_deltas(&ObservationSet::default()) {
        assert_eq!(d.current, None);
        assert!(d.deltas.is_empty());
        assert_eq!(d.total(), 0);
    }
}

#[test]
fn week_boundary_is_iso_monday() {
    // 2024-05-05 is a Sunday, 2024-05-06 a Monday.
    let set = ObservationSet::new(vec![
        o("A", 10, at(5, 5, 23, 0)),
        o("A", 12, at(5, 6, 1, 0)),
        o("A", 15, at(5, 6, 2, 0)),
    ]);
    assert_eq!(window_deltas(&set, Window::Week).get("A"), Some(3));
}

#[test]
fn month_rollover_into_new_year() {
    let dec = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap().and_hms_opt(22, 0, 0).unwrap();
    let jan = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(1, 0, 0).unwrap();
    let set = ObservationSet::new(vec![o("A", 500, dec), o("A", 520, jan)]);
    let d = window_deltas(&set, Window::Month);
    assert_eq!(d.current, Some(WindowKey::Month { year: 2025, month: 1 }));
    assert_eq!(d.get("A"), Some(0));
}

#[test]
fn shared_timestamp_earlier_row_is_window_start() {
    let set = ObservationSet::new(vec![
        o("A", 100, at(5, 2, 9, 0)),
        o("A", 103, at(5, 2, 9, 0)),
        o("A", 110, at(5, 2, 12, 0)),
    ]);
    assert_eq!(window_deltas(&set, Window::Day).get("A"), Some(10));

    // both rows share the latest timestamp: first is 7, latest is 9
    let tie = ObservationSet::new(vec![o("B", 7, at(5, 2, 9, 0)), o("B", 9, at(5, 2, 9, 0))]);
    assert_eq!(window_deltas(&tie, Window::Hour).get("B"), Some(2));
}

#[test]
fn two_day_log_day_window_and_day_over_day() {
    let day_one = vec![o("A", 10, at(5, 1, 9, 0)), o("A", 15, at(5, 1, 18, 0))];
    let mut both = day_one.clone();
    both.push(o("A", 20, at(5, 2, 9, 0)));

    let full = ObservationSet::new(both);
    assert_eq!(window_deltas(&full, Window::Day).get("A"), Some(0));
    assert_eq!(window_deltas(&ObservationSet::new(day_one), Window::Day).get("A"), Some(5));
    assert_eq!(day_over_day(&full).get("A").map(|d| d.diff), Some(5));
}
