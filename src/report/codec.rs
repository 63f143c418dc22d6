// ==========================================
// Nationality Quota Engine - Result String Codec
// ==========================================
// Role: encode/decode the persisted report `result` field
// Format: nationality,count,percentage|nationality,count,percentage|...
//         one canonical encoding; the retired space-grouped variant
//         does not decode
// Red line: strict — malformed segments are rejected, never dropped
// ==========================================

use crate::domain::quota::QuotaSnapshot;
use crate::domain::tally::{normalize_nationality, NationalityTally};
use crate::report::error::DecodeError;

/// One decoded `result` segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub nationality: String,
    pub count: u32,
    pub percentage: f64,
}

impl ResultEntry {
    pub fn tally(&self) -> NationalityTally {
        NationalityTally::new(self.nationality.clone(), self.count)
    }
}

/// Encode snapshot rows into the canonical `result` string.
///
/// Baseline counts are persisted (requested additions are UI state, not
/// report state) and percentages carry exactly two decimals, so
/// decode(encode(rows)) reproduces every triple bit-for-bit.
pub fn encode_result(rows: &[QuotaSnapshot]) -> Result<String, DecodeError> {
    let mut segments = Vec::with_capacity(rows.len());
    for row in rows {
        if row.nationality.contains(',') || row.nationality.contains('|') {
            return Err(DecodeError::ReservedDelimiter(row.nationality.clone()));
        }
        segments.push(format!(
            "{},{},{:.2}",
            row.nationality, row.count, row.percentage
        ));
    }
    Ok(segments.join("|"))
}

/// Decode a `result` string into its (nationality, count, percentage)
/// triples.
///
/// # Rules
/// - empty input → empty report (round-trips the empty snapshot set)
/// - each segment must split into exactly three non-empty fields
/// - count must parse as a non-negative integer
/// - percentage must parse as a finite number in 0..=100
pub fn decode_result(input: &str) -> Result<Vec<ResultEntry>, DecodeError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for (pos, segment) in input.split('|').enumerate() {
        if segment.trim().is_empty() {
            return Err(DecodeError::EmptySegment(pos));
        }

        let fields: Vec<&str> = segment.split(',').collect();
        if fields.len() != 3 {
            return Err(DecodeError::MalformedSegment {
                pos,
                got: segment.to_string(),
            });
        }

        let nationality = normalize_nationality(fields[0]);
        if nationality.is_empty() {
            return Err(DecodeError::EmptyName(pos));
        }

        let count_str = fields[1].trim();
        let count: u32 = count_str.parse().map_err(|_| DecodeError::InvalidCount {
            pos,
            value: count_str.to_string(),
        })?;

        let pct_str = fields[2].trim();
        let percentage: f64 = pct_str.parse().map_err(|_| DecodeError::InvalidPercentage {
            pos,
            value: pct_str.to_string(),
        })?;
        if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
            return Err(DecodeError::InvalidPercentage {
                pos,
                value: pct_str.to_string(),
            });
        }

        entries.push(ResultEntry {
            nationality,
            count,
            percentage,
        });
    }
    Ok(entries)
}
