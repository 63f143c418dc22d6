// ==========================================
// Nationality Quota Compliance Engine - Core Library
// ==========================================
// Scope: the quota/threshold computation behind the workforce
//        dashboard's nationality-ratios reports
// Positioning: decision support — the engine computes, callers decide
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and value types
pub mod domain;

// Engine layer - business rules
pub mod engine;

// Configuration layer - regulatory policy data
pub mod config;

// Report layer - persisted result codec
pub mod report;

// Importer layer - roster files
pub mod importer;

// API layer - dashboard-facing assembly
pub mod api;

// Logging
pub mod logging;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::{
    normalize_nationality, NationalityReport, NationalityTally, QuotaSnapshot, SnapshotSet,
    TallySheet, WorkerRecord,
};

// Engine
pub use engine::{
    MissingNationalityPolicy, QuotaCore, QuotaEngine, TallyExtractor, TallyOrder, ValidationError,
};

// Configuration
pub use config::{CeilingRule, QuotaPolicy};

// Report codec
pub use report::{decode_result, encode_result, DecodeError, ResultEntry};

// Importer
pub use importer::{ImportError, RosterImporter};

// API
pub use api::{ApiError, ApiResult, ReportApi, ReportSource, SessionContext};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Product name
pub const APP_NAME: &str = "Nationality Quota Compliance Engine";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
