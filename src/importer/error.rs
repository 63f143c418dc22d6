// ==========================================
// Nationality Quota Engine - Importer Error Types
// ==========================================
// Tooling: thiserror derive macro
// ==========================================

use thiserror::Error;

/// Roster import failures.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0:?} (expected .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("Excel parse failed: {0}")]
    ExcelParseError(String),

    #[error("CSV parse failed: {0}")]
    CsvParseError(String),

    // ===== Sheet shape errors =====
    #[error("workbook has no sheets")]
    NoSheets,

    #[error("sheet has no header row")]
    MissingHeaderRow,

    #[error("no nationality column found; headers were: {available:?}")]
    MissingNationalityColumn { available: Vec<String> },
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}
