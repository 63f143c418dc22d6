// ==========================================
// Nationality Quota Engine - Tally Extractor
// ==========================================
// Role: group roster rows into nationality tallies
// Red line: missing nationality cells follow one explicit policy;
//           nothing is coerced into an accidental key
// ==========================================

use crate::domain::roster::WorkerRecord;
use crate::domain::tally::{NationalityTally, TallySheet};

/// Bucket name used by [`MissingNationalityPolicy::BucketUnknown`].
pub const UNKNOWN_NATIONALITY: &str = "unknown";

// ==========================================
// Extraction policies
// ==========================================

/// What to do with roster rows whose nationality cell is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingNationalityPolicy {
    /// Drop the row from the tallies (canonical default)
    #[default]
    Skip,
    /// Count the row under the explicit "unknown" bucket
    BucketUnknown,
}

/// Output ordering for extracted tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TallyOrder {
    /// Insertion order of first occurrence (default)
    #[default]
    FirstSeen,
    /// Count descending, used for pre-report breakdowns
    CountDescending,
}

// ==========================================
// TallyExtractor
// ==========================================

/// Groups worker rows by normalized nationality and counts them.
///
/// Only the nationality column is read; everything else on the row is
/// ignored. Counts over all buckets always sum to the number of rows
/// that carried a nationality (plus, under `BucketUnknown`, the rows
/// that did not).
#[derive(Debug, Clone, Default)]
pub struct TallyExtractor {
    missing: MissingNationalityPolicy,
}

impl TallyExtractor {
    pub fn new(missing: MissingNationalityPolicy) -> Self {
        Self { missing }
    }

    /// Tally `rows` in first-occurrence order.
    pub fn extract(&self, rows: &[WorkerRecord]) -> Vec<NationalityTally> {
        self.extract_ordered(rows, TallyOrder::FirstSeen)
    }

    /// Tally `rows` with an explicit output ordering.
    pub fn extract_ordered(&self, rows: &[WorkerRecord], order: TallyOrder) -> Vec<NationalityTally> {
        let mut sheet = TallySheet::new();
        let mut skipped: usize = 0;

        for row in rows {
            if row.nationality.trim().is_empty() {
                match self.missing {
                    MissingNationalityPolicy::Skip => {
                        skipped += 1;
                        continue;
                    }
                    MissingNationalityPolicy::BucketUnknown => {
                        sheet.increment(UNKNOWN_NATIONALITY);
                        continue;
                    }
                }
            }
            sheet.increment(&row.nationality);
        }

        if skipped > 0 {
            tracing::debug!(skipped, "roster rows without nationality dropped");
        }

        match order {
            TallyOrder::FirstSeen => sheet.into_tallies(),
            TallyOrder::CountDescending => sheet.into_tallies_by_count_desc(),
        }
    }
}
