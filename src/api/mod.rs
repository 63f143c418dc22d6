// ==========================================
// Nationality Quota Engine - API Layer
// ==========================================
// Role: assemble reports for the dashboard; the only layer that
//       touches the backend collaborator
// ==========================================

pub mod error;
pub mod report_api;
pub mod session;

// Re-export core types
pub use error::{ApiError, ApiResult};
pub use report_api::{ReportApi, ReportSource};
pub use session::SessionContext;
