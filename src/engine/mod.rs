// src/engine/mod.rs
//! # Aggregation engine
//!
//! Pure functions over a caller-owned [`ObservationSet`]. Nothing in here
//! opens files, caches, or keeps state between calls; calling any query twice
//! on the same set returns the same answer.
//!
//! ```text
//! RawRecord rows ─ normalize ─► ObservationSet ─┬─ filter ─► snapshot / day_over_day
//!                                               └──────────► window_deltas (full history)
//! ```
//!
//! "Missing data" never errors: empty inputs give empty results, and absent
//! baselines count as zero.
pub mod day_over_day;
pub mod filter;
pub mod normalize;
pub mod snapshot;
pub mod types;
pub mod window;

pub use day_over_day::{day_over_day, day_over_day_at, DayDiff, DayOverDay};
pub use filter::filter;
pub use normalize::{normalize, parse_timestamp, parse_votes, Normalized};
pub use snapshot::{snapshot, snapshot_map};
pub use types::{DateRange, Delta, Observation, ObservationSet, RawRecord, Snapshot, Window, WindowKey};
pub use window::{all_window_deltas, window_deltas, WindowDeltas};
