// ==========================================
// Nationality Quota Engine - Roster File Parsers
// ==========================================
// Role: CSV/Excel → header list + header-keyed rows
// Supports: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================

use crate::importer::error::ImportError;
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// One parsed roster sheet: the header row plus the data rows.
///
/// Headers travel separately because data rows may be ragged (flexible
/// CSV drops missing trailing cells), so a row's key set is not a
/// reliable picture of the sheet's columns.
#[derive(Debug, Clone, Default)]
pub struct ParsedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

/// A parser that reads one roster file into a [`ParsedSheet`].
pub trait RosterFileParser {
    fn parse_sheet(&self, path: &Path) -> Result<ParsedSheet, ImportError>;
}

/// Pick a parser from the file extension.
pub fn parser_for(path: &Path) -> Result<Box<dyn RosterFileParser>, ImportError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "csv" => Ok(Box::new(CsvRosterParser)),
        "xlsx" | "xls" => Ok(Box::new(ExcelRosterParser)),
        other => Err(ImportError::UnsupportedFormat(other.to_string())),
    }
}

// ==========================================
// CSV parser
// ==========================================
pub struct CsvRosterParser;

impl RosterFileParser for CsvRosterParser {
    fn parse_sheet(&self, path: &Path) -> Result<ParsedSheet, ImportError> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // tolerate ragged row lengths
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::MissingHeaderRow);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row = HashMap::new();
            for (col, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col) {
                    row.insert(header.clone(), value.trim().to_string());
                }
            }
            // skip fully blank rows
            if row.values().all(|v| v.is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(ParsedSheet { headers, rows })
    }
}

// ==========================================
// Excel parser
// ==========================================
pub struct ExcelRosterParser;

impl RosterFileParser for ExcelRosterParser {
    fn parse_sheet(&self, path: &Path) -> Result<ParsedSheet, ImportError> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // open_workbook_auto sniffs the container, so legacy BIFF .xls
        // books open as readily as .xlsx
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // rosters live on the first sheet
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names.first().ok_or(ImportError::NoSheets)?.clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut sheet_rows = range.rows();
        let header_row = sheet_rows.next().ok_or(ImportError::MissingHeaderRow)?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in sheet_rows {
            let mut row = HashMap::new();
            for (col, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col) {
                    row.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }
            if row.values().all(|v| v.is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(ParsedSheet { headers, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_dispatch_by_extension() {
        assert!(parser_for(Path::new("roster.csv")).is_ok());
        assert!(parser_for(Path::new("roster.xlsx")).is_ok());
        assert!(parser_for(Path::new("roster.xls")).is_ok());
        assert!(parser_for(Path::new("ROSTER.XLSX")).is_ok());
        assert!(matches!(
            parser_for(Path::new("roster.txt")),
            Err(ImportError::UnsupportedFormat(ext)) if ext == "txt"
        ));
        assert!(matches!(
            parser_for(Path::new("roster")),
            Err(ImportError::UnsupportedFormat(ext)) if ext.is_empty()
        ));
    }
}
