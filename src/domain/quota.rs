// ==========================================
// Nationality Quota Engine - Quota Snapshots
// ==========================================
// Role: derived per-nationality quota state
// Red line: a snapshot is a pure projection of tallies + deltas;
//           it is never persisted or mutated in place
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::tally::fold_key;

// ==========================================
// QuotaSnapshot - one nationality row
// ==========================================

/// Derived quota state for one nationality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaSnapshot {
    /// Canonical nationality name
    pub nationality: String,
    /// Baseline worker count (before any requested addition)
    pub count: u32,
    /// Hypothetical hires being tested for this nationality
    pub requested_addition: u32,
    /// Adjusted count / adjusted total × 100, two decimals;
    /// 0.0 when the adjusted total is zero
    pub percentage: f64,
    /// Regulatory ceiling share for this nationality
    pub ceiling_percentage: f64,
    /// Workers that can still be added (positive) or must be removed
    /// (negative) to land exactly on the ceiling
    pub max_addition_count: i64,
}

impl QuotaSnapshot {
    /// Baseline count plus the requested addition. Widened to u64: both
    /// addends may individually be anything a u32 holds, and their sum
    /// must never wrap or panic.
    pub fn adjusted_count(&self) -> u64 {
        u64::from(self.count) + u64::from(self.requested_addition)
    }

    /// True when the adjusted headcount already exceeds the ceiling.
    pub fn over_ceiling(&self) -> bool {
        self.max_addition_count < 0
    }
}

// ==========================================
// SnapshotSet - the full derived report state
// ==========================================

/// The full per-nationality quota state at a point in time.
///
/// Requested additions inflate the shared denominator, so any change to
/// one row shifts every percentage; the engine always rebuilds the whole
/// set and hands back a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotSet {
    /// Employee total the report was built against (before deltas)
    pub baseline_total: u32,
    /// One row per distinct nationality, report order
    pub rows: Vec<QuotaSnapshot>,
}

impl SnapshotSet {
    /// Baseline total plus every pending requested addition.
    pub fn adjusted_total(&self) -> u64 {
        u64::from(self.baseline_total)
            + self
                .rows
                .iter()
                .map(|r| u64::from(r.requested_addition))
                .sum::<u64>()
    }

    /// Look up a row by nationality (case-insensitive, normalized).
    pub fn row(&self, nationality: &str) -> Option<&QuotaSnapshot> {
        let key = fold_key(nationality);
        self.rows.iter().find(|r| fold_key(&r.nationality) == key)
    }
}
