// ==========================================
// Snackhouse POS - Workbook writing
// ==========================================
// Builds the downloadable sales report (summary sheet +
// order details sheet) and the import template workbook.
// ==========================================

use crate::export::row_formatter::{ExportRow, ExportSummary};
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::Workbook;
use thiserror::Error;

pub const SALES_SUMMARY_SHEET: &str = "Sales Summary";
pub const ORDER_DETAILS_SHEET: &str = "Order Details";
pub const TEMPLATE_SHEET: &str = "Import Template";
pub const TEMPLATE_FILE_NAME: &str = "Import_Template.xlsx";

/// Column headers of the details/template sheets, in
/// order. These are also the keys the importer reads.
pub const EXPORT_HEADERS: [&str; 7] = [
    "Order ID",
    "Customer",
    "Items Summary",
    "Date",
    "Time",
    "Payment Mode",
    "Total Amount",
];

const DETAIL_COLUMN_WIDTHS: [f64; 7] = [20.0, 20.0, 50.0, 15.0, 15.0, 15.0, 15.0];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to build workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Timestamped download name, e.g. `Sales_Report_2026-08-30.xlsx`.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("Sales_Report_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Builds the two-sheet sales report workbook and returns
/// its bytes.
pub fn build_sales_report(
    store_name: &str,
    rows: &[ExportRow],
    summary: &ExportSummary,
) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    // Sheet 1: headline summary
    let sheet = workbook.add_worksheet();
    sheet.set_name(SALES_SUMMARY_SHEET)?;
    sheet.set_column_width(0, 30)?;
    sheet.set_column_width(1, 20)?;

    sheet.write_string(0, 0, format!("{store_name} - Sales Report"))?;
    sheet.write_string(1, 0, "Generated On")?;
    sheet.write_string(1, 1, Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())?;
    sheet.write_string(2, 0, "Period Covered")?;
    sheet.write_string(2, 1, &summary.date_range)?;
    // row 3 intentionally blank
    sheet.write_string(4, 0, "Metric")?;
    sheet.write_string(4, 1, "Value")?;
    sheet.write_string(5, 0, "Total Revenue")?;
    sheet.write_number(5, 1, summary.total_revenue)?;
    sheet.write_string(6, 0, "Total Completed Orders")?;
    sheet.write_number(6, 1, summary.total_orders as f64)?;
    sheet.write_string(7, 0, "Average Order Value")?;
    sheet.write_string(7, 1, format!("{:.2}", summary.avg_order_value))?;

    // Sheet 2: one row per completed order
    let sheet = workbook.add_worksheet();
    sheet.set_name(ORDER_DETAILS_SHEET)?;
    write_detail_headers(sheet)?;
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, &row.order_id)?;
        sheet.write_string(r, 1, &row.customer)?;
        sheet.write_string(r, 2, &row.items_summary)?;
        sheet.write_string(r, 3, &row.date)?;
        sheet.write_string(r, 4, &row.time)?;
        sheet.write_string(r, 5, &row.payment_mode)?;
        sheet.write_number(r, 6, row.total_amount)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Builds the one-row import template workbook.
pub fn build_import_template() -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(TEMPLATE_SHEET)?;
    write_detail_headers(sheet)?;

    sheet.write_string(1, 0, "10245")?;
    sheet.write_string(1, 1, "John Doe")?;
    sheet.write_string(1, 2, "Burger (x2 @ ₱150)")?;
    sheet.write_string(1, 3, "1/24/2026")?;
    sheet.write_string(1, 4, "10:30 AM")?;
    sheet.write_string(1, 5, "Cash")?;
    sheet.write_number(1, 6, 300)?;

    Ok(workbook.save_to_buffer()?)
}

fn write_detail_headers(sheet: &mut rust_xlsxwriter::Worksheet) -> ExportResult<()> {
    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
        sheet.set_column_width(col as u16, DETAIL_COLUMN_WIDTHS[col])?;
    }
    Ok(())
}
