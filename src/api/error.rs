// ==========================================
// Nationality Quota Engine - API Error Types
// ==========================================
// Tooling: thiserror derive macro
// Role: one surface error for dashboard callers; every message keeps
//       its explicit cause (no silent coercion, no partial renders)
// ==========================================

use thiserror::Error;

use crate::engine::error::ValidationError;
use crate::importer::error::ImportError;
use crate::report::error::DecodeError;

/// API layer errors.
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Input errors =====
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    // ===== Domain errors =====
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("unable to parse report result: {0}")]
    Decode(#[from] DecodeError),

    #[error("roster import failed: {0}")]
    Import(#[from] ImportError),

    // ===== Collaborator errors =====
    #[error("backend request failed: {0}")]
    Backend(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
