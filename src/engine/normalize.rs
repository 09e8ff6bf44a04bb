// src/engine/normalize.rs
//
// Raw log rows → typed observations.
//
// - Vote text is scraped page text ("12 345 голосов", "1,024", ""), so every
//   ASCII digit is kept in order and the rest dropped. No digits means 0.
// - The timestamp has one accepted format. A row whose timestamp does not
//   parse is dropped and reported as a MalformedRecord; the batch continues.

use chrono::NaiveDateTime;

use super::types::{Observation, ObservationSet, RawRecord};
use crate::config::consts::TIMESTAMP_FORMAT;
use crate::error::MalformedRecord;

/// Normalizer output: the usable observations plus what was dropped.
#[derive(Clone, Debug, Default)]
pub struct Normalized {
    pub observations: ObservationSet,
    pub rejected: Vec<MalformedRecord>,
}

impl Normalized {
    /// Number of rows excluded from the observation set.
    pub fn skipped(&self) -> usize { self.rejected.len() }
}

pub fn normalize(rows: &[RawRecord]) -> Normalized {
    let mut observations = Vec::with_capacity(rows.len());
    let mut rejected = Vec::new();

    for row in rows {
        match normalize_row(row) {
            Ok(obs) => observations.push(obs),
            Err(bad) => {
                logd!("Normalize: skipping {}", bad);
                rejected.push(bad);
            }
        }
    }

    Normalized { observations: ObservationSet::new(observations), rejected }
}

pub fn normalize_row(row: &RawRecord) -> Result<Observation, MalformedRecord> {
    let observed_at = parse_timestamp(&row.timestamp).ok_or_else(|| MalformedRecord {
        line: row.line,
        reason: if row.timestamp.trim().is_empty() {
            s!("missing timestamp")
        } else {
            format!("unparseable timestamp '{}'", row.timestamp.trim())
        },
    })?;

    Ok(Observation {
        project_title: row.title.trim().to_string(),
        vote_count: parse_votes(&row.votes),
        observed_at,
    })
}

/// Digits of `raw` in order, as a number. Never fails: no digits (or a digit
/// run too long for u64) gives 0.
pub fn parse_votes(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<u64>() {
        Ok(v) => v,
        Err(_) => {
            logd!("Normalize: vote text '{}' overflows, using 0", raw);
            0
        }
    }
}

/// `DD-MM-YYYY HH:MM:SS`, surrounding whitespace ignored.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
}
