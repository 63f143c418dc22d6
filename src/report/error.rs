// ==========================================
// Nationality Quota Engine - Report Codec Errors
// ==========================================
// Tooling: thiserror derive macro
// Red line: a malformed segment fails the whole decode; partial
//           results are never returned
// ==========================================

use thiserror::Error;

/// Failures while encoding or decoding a report `result` string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    // ===== Segment shape =====
    #[error("empty segment at position {0}")]
    EmptySegment(usize),

    #[error("malformed segment at position {pos}: expected 'nationality,count,percentage', got {got:?}")]
    MalformedSegment { pos: usize, got: String },

    #[error("empty nationality name in segment {0}")]
    EmptyName(usize),

    // ===== Field values =====
    #[error("invalid count in segment {pos}: {value:?}")]
    InvalidCount { pos: usize, value: String },

    #[error("invalid percentage in segment {pos}: {value:?} (expected finite 0..=100)")]
    InvalidPercentage { pos: usize, value: String },

    // ===== Encode side =====
    #[error("nationality name contains a reserved delimiter: {0:?}")]
    ReservedDelimiter(String),
}
