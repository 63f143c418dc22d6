// ==========================================
// Nationality Quota Engine - Domain Layer
// ==========================================
// Role: entities, value types, nationality key normalization
// Red line: no data access, no engine logic, no I/O
// ==========================================

pub mod quota;
pub mod report;
pub mod roster;
pub mod tally;

// Re-export core types
pub use quota::{QuotaSnapshot, SnapshotSet};
pub use report::NationalityReport;
pub use roster::WorkerRecord;
pub use tally::{normalize_nationality, NationalityTally, TallySheet};
