// ==========================================
// Snackhouse POS - Export row formatting
// ==========================================
// Flattens orders into the spreadsheet row shape. The
// Items Summary string doubles as the import interchange
// format, so its layout must stay in lockstep with the
// RowParser pattern.
// ==========================================

use crate::domain::{LineItem, Order, OrderStatus};
use crate::importer::NO_ITEMS_SUMMARY;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Placeholder for missing/unparseable dates and empty
/// date ranges.
pub const MISSING_FIELD: &str = "-";

const EXPORT_DATE_FORMAT: &str = "%-m/%-d/%Y";
const EXPORT_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// One row of the "Order Details" sheet. Serde names match
/// the column headers the importer expects back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Order ID")]
    pub order_id: String,
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "Items Summary")]
    pub items_summary: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Payment Mode")]
    pub payment_mode: String,
    #[serde(rename = "Total Amount")]
    pub total_amount: f64,
}

/// Headline metrics shown alongside an export, computed
/// over the completed orders only.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub total_revenue: f64,
    pub total_orders: usize,
    pub avg_order_value: f64,
    /// `"<oldest> to <newest>"`, or `"- to -"` when no
    /// order has a parseable date.
    pub date_range: String,
}

/// Renders line items as `"<name> (x<qty> @ ₱<unit>)"`
/// joined by `", "`. Unit price is re-derived per line so
/// the summary always agrees with price/quantity.
pub fn items_summary(items: &[LineItem]) -> String {
    if items.is_empty() {
        return NO_ITEMS_SUMMARY.to_string();
    }
    items
        .iter()
        .map(|item| {
            format!(
                "{} (x{} @ ₱{})",
                item.name,
                item.quantity,
                item.unit_price()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Maps one order onto one export row.
pub fn format_order_row(order: &Order) -> ExportRow {
    let (date, time) = match order.created_at_local() {
        Some(dt) => (
            dt.format(EXPORT_DATE_FORMAT).to_string(),
            dt.format(EXPORT_TIME_FORMAT).to_string(),
        ),
        None => (MISSING_FIELD.to_string(), MISSING_FIELD.to_string()),
    };

    ExportRow {
        order_id: order.id.clone(),
        customer: order.customer_name().to_string(),
        items_summary: items_summary(&order.items),
        date,
        time,
        payment_mode: order.payment_mode().to_string(),
        total_amount: order.bills.total,
    }
}

/// Prepares a full export: completed orders only, newest
/// first, plus the headline summary.
pub fn build_export(orders: &[Order]) -> (Vec<ExportRow>, ExportSummary) {
    let mut completed: Vec<&Order> = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .collect();

    // Newest first; undated orders sink to the end. Stable
    // sort keeps input order on equal timestamps.
    completed.sort_by(|a, b| {
        let ka = a.created_at_local();
        let kb = b.created_at_local();
        match (ka, kb) {
            (Some(da), Some(db)) => db.cmp(&da),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });

    let rows: Vec<ExportRow> = completed.iter().map(|o| format_order_row(o)).collect();

    let total_revenue: f64 = completed.iter().map(|o| o.bills.total).sum();
    let total_orders = completed.len();
    let avg_order_value = if total_orders > 0 {
        total_revenue / total_orders as f64
    } else {
        0.0
    };

    let dates: Vec<DateTime<Local>> = completed
        .iter()
        .filter_map(|o| o.created_at_local())
        .collect();
    let date_range = match (dates.iter().min(), dates.iter().max()) {
        (Some(min), Some(max)) => format!(
            "{} to {}",
            min.format(EXPORT_DATE_FORMAT),
            max.format(EXPORT_DATE_FORMAT)
        ),
        _ => format!("{MISSING_FIELD} to {MISSING_FIELD}"),
    };

    (
        rows,
        ExportSummary {
            total_revenue,
            total_orders,
            avg_order_value,
            date_range,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bills, CustomerDetails};

    fn order(id: &str, status: OrderStatus, total: f64, created_at: Option<&str>) -> Order {
        Order {
            id: id.to_string(),
            customer_details: CustomerDetails::default(),
            items: Vec::new(),
            bills: Bills {
                total,
                sub_total: None,
            },
            status,
            created_at: created_at.map(String::from),
            payment_mode: None,
        }
    }

    #[test]
    fn test_items_summary_integer_unit_price() {
        let items = vec![LineItem::new("Burger", 2, 300.0)];
        assert_eq!(items_summary(&items), "Burger (x2 @ ₱150)");
    }

    #[test]
    fn test_items_summary_fractional_unit_price() {
        let items = vec![LineItem::new("Burger", 2, 301.0)];
        assert_eq!(items_summary(&items), "Burger (x2 @ ₱150.5)");
    }

    #[test]
    fn test_items_summary_joins_and_empty() {
        let items = vec![
            LineItem::new("Burger", 2, 300.0),
            LineItem::new("Iced Tea", 3, 45.0),
        ];
        assert_eq!(
            items_summary(&items),
            "Burger (x2 @ ₱150), Iced Tea (x3 @ ₱15)"
        );
        assert_eq!(items_summary(&[]), "No Items");
    }

    #[test]
    fn test_format_row_defaults() {
        let o = order("o1", OrderStatus::Completed, 0.0, None);
        let row = format_order_row(&o);
        assert_eq!(row.customer, "Walk-in");
        assert_eq!(row.payment_mode, "Cash");
        assert_eq!(row.items_summary, "No Items");
        assert_eq!(row.date, "-");
        assert_eq!(row.time, "-");
        assert_eq!(row.total_amount, 0.0);
    }

    #[test]
    fn test_format_row_bad_date_dashes() {
        let o = order("o1", OrderStatus::Completed, 10.0, Some("garbage"));
        let row = format_order_row(&o);
        assert_eq!((row.date.as_str(), row.time.as_str()), ("-", "-"));
    }

    #[test]
    fn test_build_export_filters_and_sorts() {
        let orders = vec![
            order("old", OrderStatus::Completed, 100.0, Some("2026-01-01T08:00:00Z")),
            order("pending", OrderStatus::Pending, 999.0, Some("2026-01-03T08:00:00Z")),
            order("new", OrderStatus::Completed, 200.0, Some("2026-01-02T08:00:00Z")),
        ];
        let (rows, summary) = build_export(&orders);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].order_id, "new");
        assert_eq!(rows[1].order_id, "old");
        assert_eq!(summary.total_revenue, 300.0);
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.avg_order_value, 150.0);
        assert_eq!(summary.date_range, "1/1/2026 to 1/2/2026");
    }

    #[test]
    fn test_build_export_empty() {
        let (rows, summary) = build_export(&[]);
        assert!(rows.is_empty());
        assert_eq!(summary.avg_order_value, 0.0);
        assert_eq!(summary.date_range, "- to -");
    }
}
