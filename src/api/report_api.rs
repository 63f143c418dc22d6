// ==========================================
// Nationality Quota Engine - Report API
// ==========================================
// Role: fetch/decode persisted reports, assemble snapshot sets,
//       build new report records from uploaded rosters
// Architecture: API layer → engine (pure) + report codec;
//               backend access only through the ReportSource trait
// ==========================================

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::session::SessionContext;
use crate::domain::quota::SnapshotSet;
use crate::domain::report::NationalityReport;
use crate::domain::roster::WorkerRecord;
use crate::domain::tally::NationalityTally;
use crate::engine::quota_engine::QuotaEngine;
use crate::engine::tally::TallyExtractor;
use crate::report::codec::{decode_result, encode_result};

// ==========================================
// ReportSource - backend fetch collaborator
// ==========================================

/// Where persisted nationality reports come from (REST backend in the
/// product; a mock in tests).
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch one report by id; `None` when the backend has no such report.
    async fn fetch_report(&self, id: &str) -> anyhow::Result<Option<NationalityReport>>;
}

// ==========================================
// ReportApi
// ==========================================

/// Dashboard-facing report operations.
pub struct ReportApi {
    source: Arc<dyn ReportSource>,
    engine: QuotaEngine,
    extractor: TallyExtractor,
}

impl ReportApi {
    pub fn new(source: Arc<dyn ReportSource>, engine: QuotaEngine) -> Self {
        Self {
            source,
            engine,
            extractor: TallyExtractor::default(),
        }
    }

    pub fn engine(&self) -> &QuotaEngine {
        &self.engine
    }

    /// Load a persisted report and derive its snapshot set.
    ///
    /// # Rules
    /// - the `result` field must decode cleanly; a malformed report
    ///   surfaces as a decode failure, never as a partial table
    /// - quota denominators use the foreign workforce only:
    ///   `total_employees − saudis`
    pub async fn load_report(&self, _ctx: &SessionContext, id: &str) -> ApiResult<SnapshotSet> {
        if id.trim().is_empty() {
            return Err(ApiError::InvalidInput("report id must not be empty".into()));
        }

        let report = self
            .source
            .fetch_report(id)
            .await
            .map_err(|e| ApiError::Backend(e.to_string()))?
            .ok_or_else(|| ApiError::NotFound(format!("report {id}")))?;

        if report.saudis > report.total_employees {
            return Err(ApiError::InvalidInput(format!(
                "report {id}: saudis ({}) exceed total employees ({})",
                report.saudis, report.total_employees
            )));
        }

        let entries = decode_result(&report.result)?;
        let tallies: Vec<NationalityTally> = entries.iter().map(|e| e.tally()).collect();
        let set = self
            .engine
            .build_snapshot(&tallies, report.foreign_baseline())?;

        tracing::debug!(
            report_id = %report.id,
            rows = set.rows.len(),
            baseline = set.baseline_total,
            "report snapshot assembled"
        );
        Ok(set)
    }

    /// Load a report and test a hypothetical addition against it.
    pub async fn preview_addition(
        &self,
        ctx: &SessionContext,
        id: &str,
        nationality: &str,
        delta: i64,
    ) -> ApiResult<SnapshotSet> {
        let set = self.load_report(ctx, id).await?;
        Ok(self.engine.apply_requested_addition(&set, nationality, delta)?)
    }

    /// Build a new report record from uploaded roster rows.
    ///
    /// The record is returned for the caller to persist; storing it is
    /// the backend's job. Counts and percentages are computed over the
    /// full headcount as of creation; `saudis` is carried separately so
    /// viewers can derive the foreign baseline.
    pub fn create_report(
        &self,
        ctx: &SessionContext,
        name: &str,
        records: &[WorkerRecord],
    ) -> ApiResult<NationalityReport> {
        if name.trim().is_empty() {
            return Err(ApiError::InvalidInput("report name must not be empty".into()));
        }

        let tallies = self.extractor.extract(records);
        let total: u64 = tallies.iter().map(|t| u64::from(t.count)).sum();
        let total = u32::try_from(total)
            .map_err(|_| ApiError::InvalidInput("roster exceeds supported headcount".into()))?;

        let saudi_key = self.engine.policy().canonical_name("Saudi");
        let saudis = tallies
            .iter()
            .find(|t| self.engine.policy().canonical_name(&t.nationality) == saudi_key)
            .map(|t| t.count)
            .unwrap_or(0);

        let set = self.engine.build_snapshot(&tallies, total)?;
        let result = encode_result(&set.rows)?;
        let max_addition: HashMap<String, i64> = set
            .rows
            .iter()
            .map(|r| (r.nationality.clone(), r.max_addition_count))
            .collect();

        let now = Utc::now();
        let report = NationalityReport {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            entity_id: ctx.entity_id.clone(),
            user_id: ctx.user_id,
            saudis,
            total_employees: total,
            result,
            max_addition,
            created_at: now,
            updated_at: now,
        };

        tracing::info!(
            report_id = %report.id,
            rows = set.rows.len(),
            total_employees = total,
            "nationality report built from roster"
        );
        Ok(report)
    }
}
