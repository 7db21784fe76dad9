// ==========================================
// Snackhouse POS - Export layer
// ==========================================
// Order flattening and workbook production for the sales
// report download and the import template.
// ==========================================

pub mod report_writer;
pub mod row_formatter;

pub use report_writer::{
    build_import_template, build_sales_report, report_file_name, ExportError, ExportResult,
    EXPORT_HEADERS, ORDER_DETAILS_SHEET, SALES_SUMMARY_SHEET, TEMPLATE_FILE_NAME, TEMPLATE_SHEET,
};
pub use row_formatter::{
    build_export, format_order_row, items_summary, ExportRow, ExportSummary, MISSING_FIELD,
};
