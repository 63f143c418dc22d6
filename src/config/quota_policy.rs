// ==========================================
// Nationality Quota Engine - Quota Policy
// ==========================================
// Role: the regulatory ceiling table and nationality alias table
// Basis: MHRSD nationality ceiling circular (citizen 100%,
//        Yemeni 25%, Ethiopian 1%, general 40%)
// ==========================================
// The ceiling set changes by circular, not by release: it is data,
// loadable from JSON, and the engine only ever reads it through
// ceiling_percentage()/canonical_name().
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::tally::{fold_key, normalize_nationality};

/// Policy configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyError {
    #[error("ceiling out of range for {nationality}: {ceiling} (expected 0..=100)")]
    CeilingOutOfRange { nationality: String, ceiling: f64 },

    #[error("default ceiling out of range: {0} (expected 0..=100)")]
    DefaultCeilingOutOfRange(f64),

    #[error("empty nationality name in ceiling table")]
    EmptyCeilingKey,

    #[error("alias maps to empty name: {0}")]
    EmptyAliasTarget(String),

    #[error("policy JSON invalid: {0}")]
    Json(String),
}

/// One row of the ceiling table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeilingRule {
    pub nationality: String,
    pub ceiling: f64,
}

// ==========================================
// QuotaPolicy
// ==========================================

/// Regulatory quota policy: per-nationality ceiling shares plus a
/// fallback, and an alias table mapping source-language report keys
/// (ministry exports label columns in Arabic) to canonical names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaPolicy {
    /// Ceiling share applied when no rule names the nationality
    pub default_ceiling: f64,
    /// Special-cased nationalities
    pub ceilings: Vec<CeilingRule>,
    /// Raw report key → canonical nationality name
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            default_ceiling: 40.0,
            ceilings: vec![
                CeilingRule { nationality: "Saudi".to_string(), ceiling: 100.0 },
                CeilingRule { nationality: "Yemeni".to_string(), ceiling: 25.0 },
                CeilingRule { nationality: "Ethiopian".to_string(), ceiling: 1.0 },
            ],
            aliases: HashMap::from(
                [
                    ("سعودي", "Saudi"),
                    ("يمني", "Yemeni"),
                    ("أثيوبي", "Ethiopian"),
                    ("هندي", "Indian"),
                    ("فلبيني", "Filipino"),
                    ("نيبالي", "Nepali"),
                    ("باكستاني", "Pakistani"),
                    ("مصري", "Egyptian"),
                    ("مصرى", "Egyptian"),
                    ("سوداني", "Sudanese"),
                ]
                .map(|(k, v)| (k.to_string(), v.to_string())),
            ),
        }
    }
}

impl QuotaPolicy {
    /// Load a policy from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        let policy: QuotaPolicy =
            serde_json::from_str(json).map_err(|e| PolicyError::Json(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Check every ceiling lands in 0..=100 and no key is degenerate.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !(0.0..=100.0).contains(&self.default_ceiling) || !self.default_ceiling.is_finite() {
            return Err(PolicyError::DefaultCeilingOutOfRange(self.default_ceiling));
        }
        for rule in &self.ceilings {
            if normalize_nationality(&rule.nationality).is_empty() {
                return Err(PolicyError::EmptyCeilingKey);
            }
            if !(0.0..=100.0).contains(&rule.ceiling) || !rule.ceiling.is_finite() {
                return Err(PolicyError::CeilingOutOfRange {
                    nationality: rule.nationality.clone(),
                    ceiling: rule.ceiling,
                });
            }
        }
        for (alias, target) in &self.aliases {
            if normalize_nationality(target).is_empty() {
                return Err(PolicyError::EmptyAliasTarget(alias.clone()));
            }
        }
        Ok(())
    }

    /// Resolve a raw nationality string to its canonical policy name.
    ///
    /// Aliases win; otherwise the normalized input is already canonical.
    pub fn canonical_name(&self, raw: &str) -> String {
        let key = fold_key(raw);
        for (alias, target) in &self.aliases {
            if fold_key(alias) == key {
                return normalize_nationality(target);
            }
        }
        normalize_nationality(raw)
    }

    /// Ceiling share for a nationality, falling back to the default.
    pub fn ceiling_percentage(&self, nationality: &str) -> f64 {
        let key = fold_key(&self.canonical_name(nationality));
        self.ceilings
            .iter()
            .find(|rule| fold_key(&rule.nationality) == key)
            .map(|rule| rule.ceiling)
            .unwrap_or(self.default_ceiling)
    }
}
