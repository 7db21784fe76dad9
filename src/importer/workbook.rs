// ==========================================
// Snackhouse POS - Workbook intake
// ==========================================
// Turns an uploaded spreadsheet (.xlsx/.xls/.csv) into
// header-keyed rows. Headers and cells are trimmed, fully
// blank rows are dropped, and for Excel files the data
// sheet is chosen by name heuristic so re-uploading an
// exported report lands on "Order Details" rather than
// the summary sheet.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// One spreadsheet row: column header -> trimmed cell text.
pub type RawRow = HashMap<String, String>;

// ==========================================
// Sheet selection
// ==========================================

/// Picks the data sheet from a workbook's sheet names.
///
/// First sheet whose name contains "Details" or "Template"
/// wins (case-sensitive, workbook order); otherwise the
/// first sheet. Returns None only for an empty workbook.
pub fn select_sheet(names: &[String]) -> Option<&str> {
    names
        .iter()
        .find(|n| n.contains("Details") || n.contains("Template"))
        .or_else(|| names.first())
        .map(|s| s.as_str())
}

// ==========================================
// CSV reader
// ==========================================

pub struct CsvReader;

impl CsvReader {
    pub fn read_rows(&self, path: &Path) -> ImportResult<Vec<RawRow>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row = RawRow::new();
            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row.insert(header.clone(), value.trim().to_string());
                }
            }
            if row.values().all(|v| v.is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

// ==========================================
// Excel reader
// ==========================================

pub struct ExcelReader;

impl ExcelReader {
    pub fn read_rows(&self, path: &Path) -> ImportResult<Vec<RawRow>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let mut workbook = open_workbook_auto(path)?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = select_sheet(&sheet_names)
            .ok_or(ImportError::NoSheets)?
            .to_string();

        let range = workbook.worksheet_range(&sheet_name)?;

        let mut range_rows = range.rows();
        let header_row = range_rows.next().ok_or(ImportError::EmptySheet)?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in range_rows {
            let mut row = RawRow::new();
            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }
            if row.values().all(|v| v.is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

// ==========================================
// Extension dispatch
// ==========================================

pub struct WorkbookReader;

impl WorkbookReader {
    /// Reads data rows from any supported upload format.
    /// An empty result (headers only, or nothing at all)
    /// is reported as `EmptySheet`.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<RawRow>> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let rows = match ext.as_str() {
            "csv" => CsvReader.read_rows(path)?,
            "xlsx" | "xls" => ExcelReader.read_rows(path)?,
            _ => return Err(ImportError::UnsupportedFormat(ext)),
        };

        if rows.is_empty() {
            return Err(ImportError::EmptySheet);
        }
        Ok(rows)
    }
}
