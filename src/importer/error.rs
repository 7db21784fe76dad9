// ==========================================
// Snackhouse POS - Import error types
// ==========================================
// Cell-level defects never surface here; they degrade to
// documented defaults inside the parsers. Only file and
// sheet level failures become errors.
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    FileRead(String),

    #[error("failed to parse Excel workbook: {0}")]
    ExcelParse(String),

    #[error("failed to parse CSV file: {0}")]
    CsvParse(String),

    #[error("workbook contains no sheets")]
    NoSheets,

    #[error("selected sheet is empty")]
    EmptySheet,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileRead(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParse(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParse(err.to_string())
    }
}

pub type ImportResult<T> = Result<T, ImportError>;
