// ==========================================
// Snackhouse POS - Import row parsing
// ==========================================
// Reconstructs submittable orders from spreadsheet rows,
// including the free-text "Items Summary" column written
// by the exporter. Summary parsing is best effort: bad
// fragments are dropped, never raised. The format is
// ambiguous for item names containing `"),"` - a known
// limitation of the interchange format.
// ==========================================

use crate::domain::{
    parse_flexible_timestamp, Bills, CustomerDetails, ImportedOrder, LineItem, OrderStatus,
    DEFAULT_CUSTOMER, DEFAULT_PAYMENT_MODE,
};
use crate::importer::numeric::clean_number;
use crate::importer::workbook::RawRow;
use chrono::{DateTime, Local};
use regex::Regex;

/// Summary literal written for orders without line items.
pub const NO_ITEMS_SUMMARY: &str = "No Items";

/// Stand-in line item when a summary cannot be parsed but
/// the row still carries a total, so totals stay
/// reconcilable.
pub const FALLBACK_ITEM_NAME: &str = "Imported Item";

// Imported historical orders have no physical seating
// context; they are filed under a fixed table as take-out.
pub const IMPORT_TABLE_NO: u32 = 1;
pub const IMPORT_ORDER_TYPE: &str = "Take-out";

/// Parses one raw spreadsheet row into an [`ImportedOrder`].
pub struct RowParser {
    // `<name> (x<qty> @ ₱<unit price>)` with arbitrary
    // currency noise ahead of the price.
    item_pattern: Regex,
}

impl RowParser {
    pub fn new() -> Self {
        Self {
            item_pattern: Regex::new(r"(.+?)\s*\(x(\d+)\s*@\s*[^\d]*(\d[\d.]*)")
                .expect("item summary pattern is valid"),
        }
    }

    /// Rows missing all of Customer, Order ID and Total
    /// Amount carry nothing importable and are skipped
    /// before parsing.
    pub fn row_has_identity(row: &RawRow) -> bool {
        ["Customer", "Order ID", "Total Amount"]
            .iter()
            .any(|key| row.get(*key).is_some_and(|v| !v.trim().is_empty()))
    }

    /// Builds a candidate order from a row. Never fails:
    /// malformed cells degrade to documented defaults.
    pub fn parse_row(&self, row: &RawRow, acting_user: &str) -> ImportedOrder {
        let raw_total = row
            .get("Total Amount")
            .or_else(|| row.get("Total"))
            .map(String::as_str)
            .unwrap_or("");
        let total_amount = clean_number(raw_total);

        let mut items = self.parse_items_summary(
            row.get("Items Summary").map(String::as_str).unwrap_or(""),
        );
        if items.is_empty() && total_amount > 0.0 {
            items.push(LineItem::new(FALLBACK_ITEM_NAME, 1, total_amount));
        }

        let customer = row
            .get("Customer")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_CUSTOMER)
            .to_string();
        let payment_mode = row
            .get("Payment Mode")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_PAYMENT_MODE)
            .to_string();

        ImportedOrder {
            user: acting_user.to_string(),
            cashier: acting_user.to_string(),
            customer_details: CustomerDetails {
                name: Some(customer),
                contact: Some("N/A".to_string()),
            },
            items,
            bills: Bills {
                total: total_amount,
                sub_total: Some(total_amount),
            },
            payment_mode,
            // Imported rows are historical records, assumed
            // already fulfilled.
            status: OrderStatus::Completed,
            created_at: Self::parse_row_date(row),
            table_no: IMPORT_TABLE_NO,
            order_type: IMPORT_ORDER_TYPE.to_string(),
        }
    }

    /// Splits an Items Summary back into line items. The
    /// reconstructed line price is unit price x quantity,
    /// re-derived from the summary rather than trusting the
    /// total column.
    fn parse_items_summary(&self, summary: &str) -> Vec<LineItem> {
        let summary = summary.trim();
        if summary.is_empty() || summary == NO_ITEMS_SUMMARY {
            return Vec::new();
        }

        let mut items = Vec::new();
        for fragment in summary.split("),") {
            let Some(caps) = self.item_pattern.captures(fragment) else {
                tracing::debug!(fragment, "dropping unparseable item fragment");
                continue;
            };

            let name = caps[1].trim().to_string();
            let quantity: u32 = match caps[2].parse() {
                Ok(q) => q,
                Err(_) => continue,
            };
            let unit_price = clean_number(&caps[3]);

            if name.is_empty() || quantity == 0 {
                continue;
            }
            items.push(LineItem::new(name, quantity, unit_price * quantity as f64));
        }
        items
    }

    // Date + Time cells are concatenated and parsed
    // leniently; failure falls back to the current time,
    // so a malformed date silently becomes "now".
    fn parse_row_date(row: &RawRow) -> DateTime<Local> {
        let date = row.get("Date").map(|s| s.trim()).unwrap_or("");
        if date.is_empty() {
            return Local::now();
        }
        let time = row.get("Time").map(|s| s.trim()).unwrap_or("");
        let combined = format!("{date} {time}");
        parse_flexible_timestamp(combined.trim()).unwrap_or_else(Local::now)
    }
}

impl Default for RowParser {
    fn default() -> Self {
        Self::new()
    }
}
