// tests/normalize.rs
//
// Raw rows → observation set, including the rows that get dropped.
//
use votewatch::engine::{normalize, RawRecord};

fn raw(line: usize, title: &str, votes: &str, ts: &str) -> RawRecord {
    let mut r = RawRecord::new(title, votes, ts);
    r.line = line;
    r
}

#[test]
fn coerces_votes_and_counts_bad_timestamps() {
    let rows = vec![
        raw(2, "Park", "12,345 votes", "01-05-2024 09:00:00"),
        raw(3, "Park", "n/a", "01-05-2024 10:00:00"),
        raw(4, "Square", "7", "2024-05-01 10:00"),
        raw(5, " Square ", "", "01-05-2024 11:00:00"),
        raw(6, "Pier", "3", ""),
    ];
    let n = normalize(&rows);

    assert_eq!(n.observations.len(), 3);
    assert_eq!(n.skipped(), 2);
    assert_eq!(n.rejected.iter().map(|r| r.line).collect::<Vec<_>>(), vec![4, 6]);

    let counts: Vec<u64> = n.observations.iter().map(|o| o.vote_count).collect();
    assert_eq!(counts, vec![12345, 0, 0]);
    // titles are trimmed
    assert_eq!(n.observations.as_slice()[2].project_title, "Square");
}

#[test]
fn empty_input_is_empty_set() {
    let n = normalize(&[]);
    assert!(n.observations.is_empty());
    assert_eq!(n.skipped(), 0);
}

#[test]
fn keeps_input_order() {
    let rows = vec![
        raw(2, "B", "2", "02-05-2024 09:00:00"),
        raw(3, "A", "1", "01-05-2024 09:00:00"),
    ];
    let n = normalize(&rows);
    let titles: Vec<&str> = n.observations.iter().map(|o| o.project_title.as_str()).collect();
    assert_eq!(titles, vec!["B", "A"]);
}
