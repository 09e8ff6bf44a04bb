// src/engine/filter.rs
use std::collections::BTreeSet;

use super::types::{DateRange, ObservationSet};

/// Observations whose project is selected and whose date is inside `range`
/// (inclusive), in input order.
///
/// An empty selection selects nothing, and an inverted range matches nothing.
/// Both are ordinary states of the dashboard, not errors.
pub fn filter(set: &ObservationSet, selected: &BTreeSet<String>, range: DateRange) -> ObservationSet {
    if selected.is_empty() || range.is_inverted() {
        return ObservationSet::default();
    }

    set.iter()
        .filter(|o| selected.contains(&o.project_title) && range.contains(o.date()))
        .cloned()
        .collect()
}
