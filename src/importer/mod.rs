// ==========================================
// Snackhouse POS - Import layer
// ==========================================
// Spreadsheet intake: file parsing, numeric cleaning and
// row-to-order reconstruction. All parsing is pure and
// synchronous; defects degrade row-locally and never abort
// a batch.
// ==========================================

pub mod error;
pub mod numeric;
pub mod row_parser;
pub mod workbook;

pub use error::{ImportError, ImportResult};
pub use numeric::clean_number;
pub use row_parser::{RowParser, FALLBACK_ITEM_NAME, IMPORT_ORDER_TYPE, IMPORT_TABLE_NO, NO_ITEMS_SUMMARY};
pub use workbook::{select_sheet, CsvReader, ExcelReader, RawRow, WorkbookReader};
