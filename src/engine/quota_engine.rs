// ==========================================
// Nationality Quota Engine - QuotaEngine
// ==========================================
// Role: build snapshot sets from tallies, apply requested additions
// Red line: any delta change recomputes EVERY row against the shared
//           denominator; the previous set is never mutated in place
// ==========================================

use crate::config::QuotaPolicy;
use crate::domain::quota::{QuotaSnapshot, SnapshotSet};
use crate::domain::tally::{fold_key, NationalityTally};
use crate::engine::error::{ValidationError, ValidationResult};
use crate::engine::quota_core::QuotaCore;

// ==========================================
// QuotaEngine
// ==========================================

/// Snapshot builder over a [`QuotaPolicy`].
///
/// Stateless apart from the policy table: every operation takes its
/// inputs whole and returns a fresh [`SnapshotSet`], so callers keep
/// undo/redo and re-render semantics trivial.
#[derive(Debug, Clone, Default)]
pub struct QuotaEngine {
    policy: QuotaPolicy,
}

impl QuotaEngine {
    pub fn new(policy: QuotaPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &QuotaPolicy {
        &self.policy
    }

    /// Max addition for one nationality under the engine's policy.
    pub fn max_addition(&self, nationality: &str, count: u64, total: u64) -> i64 {
        QuotaCore::max_addition(self.policy.ceiling_percentage(nationality), count, total)
    }

    /// Derive a snapshot set from tallies and an employee baseline.
    ///
    /// # Rules
    /// - nationality names are canonicalized through the policy alias
    ///   table; the canonical key set must be unique and non-empty
    /// - every row starts with `requested_addition = 0`
    /// - percentages and max additions are computed against
    ///   `baseline_total` (0 is legal and yields 0.0 percentages)
    pub fn build_snapshot(
        &self,
        tallies: &[NationalityTally],
        baseline_total: u32,
    ) -> ValidationResult<SnapshotSet> {
        let mut rows = Vec::with_capacity(tallies.len());
        let mut seen: Vec<String> = Vec::with_capacity(tallies.len());

        for tally in tallies {
            let canonical = self.policy.canonical_name(&tally.nationality);
            if canonical.is_empty() {
                return Err(ValidationError::EmptyNationality);
            }
            let key = fold_key(&canonical);
            if seen.contains(&key) {
                return Err(ValidationError::DuplicateNationality(canonical));
            }
            seen.push(key);

            rows.push(QuotaSnapshot {
                nationality: canonical,
                count: tally.count,
                requested_addition: 0,
                percentage: 0.0,
                ceiling_percentage: 0.0,
                max_addition_count: 0,
            });
        }

        let mut set = SnapshotSet {
            baseline_total,
            rows,
        };
        self.recompute(&mut set);
        Ok(set)
    }

    /// Set the requested addition for one nationality and rebuild the set.
    ///
    /// # Rules
    /// - delta < 0 → `NegativeDelta`; the input set is untouched
    /// - unknown nationality → `UnknownNationality`
    /// - the delta REPLACES the row's previous requested addition (the
    ///   product UI retypes the field, it does not accumulate)
    /// - the shared denominator moves, so every row's percentage and
    ///   max addition are recomputed, not just the target's
    pub fn apply_requested_addition(
        &self,
        set: &SnapshotSet,
        nationality: &str,
        delta: i64,
    ) -> ValidationResult<SnapshotSet> {
        if delta < 0 {
            return Err(ValidationError::NegativeDelta {
                nationality: nationality.to_string(),
                delta,
            });
        }
        let delta = u32::try_from(delta).map_err(|_| ValidationError::DeltaOutOfRange {
            nationality: nationality.to_string(),
            delta,
            max: u32::MAX,
        })?;

        let key = fold_key(&self.policy.canonical_name(nationality));
        let mut next = set.clone();
        let row = next
            .rows
            .iter_mut()
            .find(|r| fold_key(&r.nationality) == key)
            .ok_or_else(|| ValidationError::UnknownNationality(nationality.to_string()))?;
        row.requested_addition = delta;

        self.recompute(&mut next);
        Ok(next)
    }

    /// Recompute every derived field from counts + deltas.
    fn recompute(&self, set: &mut SnapshotSet) {
        let total = set.adjusted_total();
        for row in &mut set.rows {
            let adjusted = row.adjusted_count();
            row.ceiling_percentage = self.policy.ceiling_percentage(&row.nationality);
            row.percentage = QuotaCore::percentage(adjusted, total);
            row.max_addition_count =
                QuotaCore::max_addition(row.ceiling_percentage, adjusted, total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tallies() -> Vec<NationalityTally> {
        vec![
            NationalityTally::new("Indian", 31),
            NationalityTally::new("Yemeni", 15),
            NationalityTally::new("Saudi", 8),
        ]
    }

    fn engine() -> QuotaEngine {
        QuotaEngine::default()
    }

    #[test]
    fn test_max_addition_goes_through_policy() {
        let engine = engine();
        assert_eq!(engine.max_addition("Saudi", 8, 72), 64);
        assert_eq!(engine.max_addition("Yemeni", 18, 72), 0);
        assert_eq!(engine.max_addition("Ethiopian", 0, 100), 1);
        assert_eq!(engine.max_addition("Uruguayan", 50, 100), -10);
    }

    #[test]
    fn test_build_snapshot_basic_fields() {
        let set = engine().build_snapshot(&tallies(), 72).unwrap();
        assert_eq!(set.baseline_total, 72);
        assert_eq!(set.adjusted_total(), 72);

        let yemeni = set.row("Yemeni").unwrap();
        assert_eq!(yemeni.count, 15);
        assert_eq!(yemeni.requested_addition, 0);
        assert_eq!(yemeni.percentage, 20.83);
        assert_eq!(yemeni.ceiling_percentage, 25.0);
        assert_eq!(yemeni.max_addition_count, 3); // 25% of 72 = 18

        let saudi = set.row("Saudi").unwrap();
        assert_eq!(saudi.ceiling_percentage, 100.0);
        assert_eq!(saudi.max_addition_count, 64);
    }

    #[test]
    fn test_build_snapshot_zero_total_is_degenerate_not_an_error() {
        let set = engine()
            .build_snapshot(&[NationalityTally::new("Nepali", 7)], 0)
            .unwrap();
        let row = &set.rows[0];
        assert_eq!(row.percentage, 0.0);
        assert_eq!(row.max_addition_count, -7);
    }

    #[test]
    fn test_build_snapshot_rejects_duplicates_even_via_alias() {
        // "يمني" canonicalizes to "Yemeni" and must collide
        let tallies = vec![
            NationalityTally::new("Yemeni", 5),
            NationalityTally::new("يمني", 2),
        ];
        assert_eq!(
            engine().build_snapshot(&tallies, 7),
            Err(ValidationError::DuplicateNationality("Yemeni".to_string()))
        );
    }

    #[test]
    fn test_apply_delta_recomputes_every_row() {
        let set = engine().build_snapshot(&tallies(), 72).unwrap();
        let next = engine().apply_requested_addition(&set, "Yemeni", 3).unwrap();

        assert_eq!(next.adjusted_total(), 75);
        let yemeni = next.row("Yemeni").unwrap();
        assert_eq!(yemeni.adjusted_count(), 18);
        assert_eq!(yemeni.percentage, 24.0);
        assert_eq!(yemeni.max_addition_count, 1); // round(18.75 − 18)

        // untouched rows shift too: the denominator grew
        let indian = next.row("Indian").unwrap();
        assert_eq!(indian.count, 31);
        assert_eq!(indian.percentage, 41.33); // 31/75
        assert_eq!(indian.max_addition_count, -1); // round(30 − 31)

        // the input set is untouched
        assert_eq!(set.row("Yemeni").unwrap().requested_addition, 0);
    }

    #[test]
    fn test_apply_delta_replaces_previous_delta() {
        let set = engine().build_snapshot(&tallies(), 72).unwrap();
        let with_five = engine().apply_requested_addition(&set, "Yemeni", 5).unwrap();
        let back_to_two = engine()
            .apply_requested_addition(&with_five, "Yemeni", 2)
            .unwrap();
        assert_eq!(back_to_two.row("Yemeni").unwrap().requested_addition, 2);
        assert_eq!(back_to_two.adjusted_total(), 74);
    }

    #[test]
    fn test_apply_zero_delta_is_idempotent() {
        let set = engine().build_snapshot(&tallies(), 72).unwrap();
        let same = engine().apply_requested_addition(&set, "Indian", 0).unwrap();
        assert_eq!(same, set);
    }

    #[test]
    fn test_apply_negative_delta_rejected_set_unchanged() {
        let set = engine().build_snapshot(&tallies(), 72).unwrap();
        let err = engine()
            .apply_requested_addition(&set, "Yemeni", -1)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeDelta {
                nationality: "Yemeni".to_string(),
                delta: -1
            }
        );
        // caller's set still valid and untouched
        assert_eq!(set.row("Yemeni").unwrap().max_addition_count, 3);
    }

    #[test]
    fn test_apply_maximum_delta_does_not_overflow() {
        // the guard admits any delta up to u32::MAX, so the adjusted
        // count must be summed in u64
        let set = engine().build_snapshot(&tallies(), 72).unwrap();
        let next = engine()
            .apply_requested_addition(&set, "Yemeni", i64::from(u32::MAX))
            .unwrap();

        let yemeni = next.row("Yemeni").unwrap();
        assert_eq!(yemeni.adjusted_count(), u64::from(u32::MAX) + 15);
        assert_eq!(next.adjusted_total(), u64::from(u32::MAX) + 72);
        assert_eq!(yemeni.percentage, 100.0);
        assert!(yemeni.max_addition_count < 0);
    }

    #[test]
    fn test_apply_delta_above_u32_is_out_of_range() {
        let set = engine().build_snapshot(&tallies(), 72).unwrap();
        let err = engine()
            .apply_requested_addition(&set, "Yemeni", i64::from(u32::MAX) + 1)
            .unwrap_err();
        assert!(matches!(err, ValidationError::DeltaOutOfRange { .. }));
    }

    #[test]
    fn test_apply_unknown_nationality_rejected() {
        let set = engine().build_snapshot(&tallies(), 72).unwrap();
        assert_eq!(
            engine().apply_requested_addition(&set, "Ethiopian", 1),
            Err(ValidationError::UnknownNationality("Ethiopian".to_string()))
        );
    }

    #[test]
    fn test_delta_is_monotone_on_max_addition() {
        let set = engine().build_snapshot(&tallies(), 72).unwrap();
        let mut last = set.row("Yemeni").unwrap().max_addition_count;
        for delta in 1..=10 {
            let next = engine()
                .apply_requested_addition(&set, "Yemeni", delta)
                .unwrap();
            let max = next.row("Yemeni").unwrap().max_addition_count;
            assert!(
                max <= last,
                "delta {delta}: max addition rose from {last} to {max}"
            );
            last = max;
        }
    }

    #[test]
    fn test_alias_key_targets_canonical_row() {
        let set = engine().build_snapshot(&tallies(), 72).unwrap();
        let next = engine()
            .apply_requested_addition(&set, "يمني", 2)
            .unwrap();
        assert_eq!(next.row("Yemeni").unwrap().requested_addition, 2);
    }
}
