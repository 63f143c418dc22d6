// ==========================================
// Nationality Quota Engine - Roster Importer
// ==========================================
// Role: parsed sheets → WorkerRecords via nationality column detection
// Headers: ministry exports label the column in Arabic, self-built
//          sheets in English; both are recognized
// ==========================================

use std::path::Path;

use crate::domain::roster::WorkerRecord;
use crate::domain::tally::fold_key;
use crate::importer::error::ImportError;
use crate::importer::file_parser::{parser_for, ParsedSheet};

/// Header spellings accepted for the nationality column, fold-compared.
const NATIONALITY_HEADERS: &[&str] = &["nationality", "الجنسية", "جنسية"];

// ==========================================
// RosterImporter
// ==========================================

/// Reads a roster file and lifts each row into a [`WorkerRecord`].
#[derive(Debug, Clone, Default)]
pub struct RosterImporter;

impl RosterImporter {
    pub fn new() -> Self {
        Self
    }

    /// Parse `path` (CSV or Excel) into worker records.
    pub fn import(&self, path: &Path) -> Result<Vec<WorkerRecord>, ImportError> {
        let parser = parser_for(path)?;
        let sheet = parser.parse_sheet(path)?;
        tracing::info!(
            file = %path.display(),
            rows = sheet.rows.len(),
            "roster file parsed"
        );
        self.sheet_to_records(sheet)
    }

    /// Map a parsed sheet to worker records.
    ///
    /// The nationality column is located from the sheet's header row —
    /// never from a data row's key set, which ragged rows truncate.
    /// Rows missing the cell keep an empty nationality so the
    /// extractor's missing-value policy can decide their fate.
    pub fn sheet_to_records(&self, sheet: ParsedSheet) -> Result<Vec<WorkerRecord>, ImportError> {
        if sheet.rows.is_empty() {
            return Ok(Vec::new());
        }

        let nationality_header = Self::detect_nationality_header(&sheet.headers)?;

        let records = sheet
            .rows
            .into_iter()
            .map(|mut row| {
                let nationality = row.remove(&nationality_header).unwrap_or_default();
                WorkerRecord { nationality, extra: row }
            })
            .collect();
        Ok(records)
    }

    fn detect_nationality_header(headers: &[String]) -> Result<String, ImportError> {
        for header in headers {
            let folded = fold_key(header);
            if NATIONALITY_HEADERS.iter().any(|h| fold_key(h) == folded) {
                return Ok(header.clone());
            }
        }
        Err(ImportError::MissingNationalityColumn {
            available: headers.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sheet(headers: &[&str], rows: &[&[(&str, &str)]]) -> ParsedSheet {
        ParsedSheet {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|pairs| {
                    pairs
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect::<HashMap<String, String>>()
                })
                .collect(),
        }
    }

    #[test]
    fn test_english_header_detected_case_insensitively() {
        let sheet = sheet(
            &["Name", "Nationality"],
            &[&[("Nationality", "Indian"), ("Name", "A")]],
        );
        let records = RosterImporter::new().sheet_to_records(sheet).unwrap();
        assert_eq!(records[0].nationality, "Indian");
        assert_eq!(records[0].extra.get("Name").map(String::as_str), Some("A"));
    }

    #[test]
    fn test_arabic_header_detected() {
        let sheet = sheet(&["الاسم", "الجنسية"], &[&[("الجنسية", "يمني"), ("الاسم", "أ")]]);
        let records = RosterImporter::new().sheet_to_records(sheet).unwrap();
        assert_eq!(records[0].nationality, "يمني");
    }

    #[test]
    fn test_missing_nationality_column_is_an_error() {
        let sheet = sheet(&["Name", "Occupation"], &[&[("Name", "A")]]);
        let err = RosterImporter::new().sheet_to_records(sheet).unwrap_err();
        assert!(matches!(
            err,
            ImportError::MissingNationalityColumn { available } if available.len() == 2
        ));
    }

    #[test]
    fn test_no_rows_is_empty_not_an_error() {
        let records = RosterImporter::new()
            .sheet_to_records(ParsedSheet::default())
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_ragged_first_row_still_finds_the_column() {
        // flexible CSV drops missing trailing cells, so the first data
        // row may not carry the nationality key at all
        let sheet = sheet(
            &["Name", "Nationality"],
            &[&[("Name", "A")], &[("Name", "B"), ("Nationality", "Indian")]],
        );
        let records = RosterImporter::new().sheet_to_records(sheet).unwrap();
        assert_eq!(records[0].nationality, "");
        assert_eq!(records[1].nationality, "Indian");
    }
}
