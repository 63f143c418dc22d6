// ==========================================
// Nationality Quota Engine - Worker Roster Records
// ==========================================
// Role: the raw row shape handed to the tally extractor
// Source: spreadsheet import (importer layer) or backend fetch
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One worker row from an uploaded roster.
///
/// The quota engine only ever reads `nationality`; every other column
/// travels along untouched in `extra` so callers can keep rendering the
/// original sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerRecord {
    /// Raw nationality cell (may be empty; the extractor's missing-value
    /// policy decides what happens then)
    pub nationality: String,
    /// Remaining columns, header → cell
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

impl WorkerRecord {
    pub fn new(nationality: impl Into<String>) -> Self {
        Self {
            nationality: nationality.into(),
            extra: HashMap::new(),
        }
    }

    pub fn with_extra(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(header.into(), value.into());
        self
    }
}
