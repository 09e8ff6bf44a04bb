// src/store.rs
//
// The append-only observation log on disk.
//
// - Loading tolerates a missing or empty file (empty set, not an error) and
//   an optional `title,votes,timestamp` header line.
// - Appending is the collector's half of the contract: header only when the
//   file is new/empty, rows only ever added at the end, and only rows whose
//   timestamp the normalizer will accept.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::config::consts::{LOG_HEADER, LOG_SEP};
use crate::csv::{parse_records, write_row};
use crate::engine::normalize::{normalize, normalize_row, Normalized};
use crate::engine::types::RawRecord;
use crate::error::{MalformedRecord, Result};

/// Read every row of the log as text. Missing file → no rows.
pub fn load_raw(path: &Path) -> Result<Vec<RawRecord>> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            logd!("Store: {} not found, treating as empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut records = parse_records(text, LOG_SEP);
    if records.first().is_some_and(|(_, row)| is_header(row)) {
        records.remove(0);
    }

    Ok(records
        .into_iter()
        .map(|(line, mut row)| {
            row.resize(3, s!());
            let mut cells = row.into_iter();
            RawRecord {
                line,
                title: cells.next().unwrap_or_default(),
                votes: cells.next().unwrap_or_default(),
                timestamp: cells.next().unwrap_or_default(),
            }
        })
        .collect())
}

/// Load and normalize in one go; the caller keeps the result for a whole
/// refresh cycle.
pub fn load_observations(path: &Path) -> Result<Normalized> {
    let raw = load_raw(path)?;
    let normalized = normalize(&raw);
    logf!(
        "Store: loaded {} observation(s) from {} ({} skipped)",
        normalized.observations.len(),
        path.display(),
        normalized.skipped()
    );
    Ok(normalized)
}

fn is_header(row: &[String]) -> bool {
    row.len() >= LOG_HEADER.len()
        && row.iter().zip(LOG_HEADER).all(|(cell, h)| cell.trim().eq_ignore_ascii_case(h))
}

/// Outcome of an append: how many rows were written and which were refused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppendReport {
    pub written: usize,
    pub rejected: Vec<MalformedRecord>,
}

/// Append well-formed records to the log. Rows with a bad timestamp are
/// returned in `rejected` and never reach the file.
pub fn append_records(path: &Path, records: &[RawRecord]) -> Result<AppendReport> {
    let mut report = AppendReport::default();
    let mut good: Vec<&RawRecord> = Vec::with_capacity(records.len());
    for r in records {
        match normalize_row(r) {
            Ok(_) => good.push(r),
            Err(bad) => {
                logw!("Store: refusing to append {}", bad);
                report.rejected.push(bad);
            }
        }
    }
    if good.is_empty() {
        return Ok(report);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).read(true).append(true).open(path)?;
    let fresh = file.metadata()?.len() == 0;
    let needs_newline = !fresh && !ends_with_newline(&mut file)?;
    let mut out = BufWriter::new(file);

    if fresh {
        let header: Vec<String> = LOG_HEADER.iter().map(|h| s!(*h)).collect();
        write_row(&mut out, &header, LOG_SEP)?;
    } else if needs_newline {
        // hand-edited file without a final newline
        writeln!(out)?;
    }
    for r in &good {
        write_row(&mut out, &r.to_row(), LOG_SEP)?;
    }
    out.flush()?;

    report.written = good.len();
    logf!("Store: appended {} row(s) to {}", report.written, path.display());
    Ok(report)
}

fn ends_with_newline(file: &mut fs::File) -> Result<bool> {
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
