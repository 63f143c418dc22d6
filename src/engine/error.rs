// ==========================================
// Nationality Quota Engine - Engine Error Types
// ==========================================
// Tooling: thiserror derive macro
// Red line: invalid input is rejected with an explicit error,
//           never clamped or silently coerced
// ==========================================

use thiserror::Error;

/// Validation failures raised by the quota engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // ===== Key errors =====
    #[error("empty nationality key")]
    EmptyNationality,

    #[error("duplicate nationality key: {0}")]
    DuplicateNationality(String),

    #[error("unknown nationality key: {0}")]
    UnknownNationality(String),

    // ===== Delta errors =====
    #[error("negative delta rejected: nationality={nationality}, delta={delta}")]
    NegativeDelta { nationality: String, delta: i64 },

    #[error("delta out of range: nationality={nationality}, delta={delta}, max={max}")]
    DeltaOutOfRange {
        nationality: String,
        delta: i64,
        max: u32,
    },
}

pub type ValidationResult<T> = Result<T, ValidationError>;
