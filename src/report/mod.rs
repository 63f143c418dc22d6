// ==========================================
// Nationality Quota Engine - Report Layer
// ==========================================
// Role: the canonical `result` string codec for persisted reports
// ==========================================

pub mod codec;
pub mod error;

// Re-export core types
pub use codec::{decode_result, encode_result, ResultEntry};
pub use error::DecodeError;
