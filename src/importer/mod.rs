// ==========================================
// Nationality Quota Engine - Importer Layer
// ==========================================
// Role: turn uploaded roster files into worker records
// Supports: Excel (.xlsx/.xls) / CSV (.csv)
// Red line: the engine never sees file formats; it gets WorkerRecords
// ==========================================

pub mod error;
pub mod file_parser;
pub mod roster;

// Re-export core types
pub use error::ImportError;
pub use file_parser::{parser_for, CsvRosterParser, ExcelRosterParser, ParsedSheet, RosterFileParser};
pub use roster::RosterImporter;
