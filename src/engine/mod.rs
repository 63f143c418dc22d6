// ==========================================
// Nationality Quota Engine - Engine Layer
// ==========================================
// Role: the business rules — tallying, quota math, snapshots
// Red line: pure and synchronous; no I/O, no shared mutable state;
//           invalid input is a typed error, never a clamp
// ==========================================

pub mod error;
pub mod quota_core;
pub mod quota_engine;
pub mod tally;

// Re-export core engine types
pub use error::{ValidationError, ValidationResult};
pub use quota_core::QuotaCore;
pub use quota_engine::QuotaEngine;
pub use tally::{MissingNationalityPolicy, TallyExtractor, TallyOrder, UNKNOWN_NATIONALITY};
