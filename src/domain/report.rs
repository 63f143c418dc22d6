// ==========================================
// Nationality Quota Engine - Report Records
// ==========================================
// Role: the backend's nationality-report record shape
// Wire format: camelCase JSON, `result` carries the encoded
//              nationality,count,percentage segments (report layer)
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A persisted nationality-ratios report as the backend returns it.
///
/// `result` is opaque here; decoding belongs to the report codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalityReport {
    pub id: Uuid,
    pub name: String,
    /// Owning establishment (commercial registration scope)
    pub entity_id: Option<String>,
    pub user_id: i64,
    /// Saudi headcount, excluded from the foreign-workforce denominator
    pub saudis: u32,
    /// Full headcount including Saudis
    pub total_employees: u32,
    /// Encoded per-nationality triples, see `report::codec`
    pub result: String,
    /// Max addition per nationality as computed at creation time
    #[serde(default)]
    pub max_addition: HashMap<String, i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NationalityReport {
    /// Headcount the quota denominators are built on: foreign workforce
    /// only. Callers must have validated `saudis <= total_employees`.
    pub fn foreign_baseline(&self) -> u32 {
        self.total_employees - self.saudis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_round_trips_camel_case_json() {
        let report = NationalityReport {
            id: Uuid::new_v4(),
            name: "Q3 nationalities".to_string(),
            entity_id: Some("CRN-1010101010".to_string()),
            user_id: 7,
            saudis: 8,
            total_employees: 72,
            result: "Indian,31,48.44|Yemeni,15,23.44".to_string(),
            max_addition: HashMap::from([("Yemeni".to_string(), 1)]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"totalEmployees\":72"));
        assert!(json.contains("\"entityId\""));

        let back: NationalityReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert_eq!(back.foreign_baseline(), 64);
    }
}
