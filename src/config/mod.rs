// ==========================================
// Nationality Quota Engine - Configuration Layer
// ==========================================
// Role: regulatory policy data (ceiling table, alias table)
// Red line: ceilings are configuration, never hard-coded branches
// ==========================================

pub mod quota_policy;

// Re-export core configuration types
pub use quota_policy::{CeilingRule, PolicyError, QuotaPolicy};
