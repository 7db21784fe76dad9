// ==========================================
// Snackhouse POS - Order entities
// ==========================================
// Wire shapes of the orders API. Field names follow
// the backend schema (camelCase, nested bills and
// customerDetails), so these types round-trip through
// serde without manual mapping.
// ==========================================

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer name substituted when an order carries none.
pub const DEFAULT_CUSTOMER: &str = "Walk-in";

/// Payment mode substituted when an order carries none.
pub const DEFAULT_PAYMENT_MODE: &str = "Cash";

// ==========================================
// Order status
// ==========================================
// Only Completed orders count toward revenue analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::InProgress => write!(f, "In Progress"),
            OrderStatus::Completed => write!(f, "Completed"),
        }
    }
}

// ==========================================
// Line item
// ==========================================

/// One line of an order.
///
/// `price` is the line total, not the unit price. The unit
/// price only exists as a derived value for display/export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    /// Category recorded on the order at sale time, if any.
    /// Used as the third tier of category resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            category: None,
        }
    }

    /// Derived unit price; zero-quantity lines price at 0.
    pub fn unit_price(&self) -> f64 {
        if self.quantity > 0 {
            self.price / self.quantity as f64
        } else {
            0.0
        }
    }
}

// ==========================================
// Nested wire structures
// ==========================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bills {
    #[serde(default)]
    pub total: f64,
    #[serde(rename = "subTotal", default, skip_serializing_if = "Option::is_none")]
    pub sub_total: Option<f64>,
}

// ==========================================
// Order (as returned by the list-orders API)
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "customerDetails", default)]
    pub customer_details: CustomerDetails,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub bills: Bills,
    #[serde(rename = "orderStatus")]
    pub status: OrderStatus,
    /// Raw backend timestamp. Kept as a string so a single
    /// malformed value cannot fail deserialization of the
    /// whole order list; parse lazily via `created_at_local`.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "paymentMode", default)]
    pub payment_mode: Option<String>,
}

impl Order {
    pub fn customer_name(&self) -> &str {
        self.customer_details
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(DEFAULT_CUSTOMER)
    }

    pub fn payment_mode(&self) -> &str {
        self.payment_mode
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_PAYMENT_MODE)
    }

    /// Creation time in the local calendar, or None when the
    /// raw timestamp is missing or unparseable.
    pub fn created_at_local(&self) -> Option<DateTime<Local>> {
        self.created_at
            .as_deref()
            .and_then(parse_flexible_timestamp)
    }
}

// ==========================================
// ImportedOrder (bulk-import submission shape)
// ==========================================

/// Candidate order reconstructed from a spreadsheet row,
/// ready for the bulk-import endpoint. The backend schema
/// requires a user and a cashier reference, so both carry
/// the acting administrator id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportedOrder {
    pub user: String,
    pub cashier: String,
    #[serde(rename = "customerDetails")]
    pub customer_details: CustomerDetails,
    pub items: Vec<LineItem>,
    pub bills: Bills,
    #[serde(rename = "paymentMode")]
    pub payment_mode: String,
    #[serde(rename = "orderStatus")]
    pub status: OrderStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Local>,
    #[serde(rename = "tableNo")]
    pub table_no: u32,
    #[serde(rename = "orderType")]
    pub order_type: String,
}

// ==========================================
// Lenient timestamp parsing
// ==========================================

const DATETIME_FORMATS: [&str; 7] = [
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// Parses backend timestamps and spreadsheet date cells.
///
/// Accepts RFC 3339 (the API format) and the local formats a
/// spreadsheet export produces (`1/24/2026 10:30 AM` and
/// friends). Returns None instead of failing so that callers
/// can apply their documented defaults.
pub fn parse_flexible_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Local));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Local.from_local_datetime(&naive).earliest();
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return Local.from_local_datetime(&naive).earliest();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_unit_price() {
        let item = LineItem::new("Burger", 2, 300.0);
        assert_eq!(item.unit_price(), 150.0);

        let zero_qty = LineItem::new("Burger", 0, 300.0);
        assert_eq!(zero_qty.unit_price(), 0.0);
    }

    #[test]
    fn test_order_defaults() {
        let order: Order = serde_json::from_str(
            r#"{"_id":"o1","orderStatus":"Completed"}"#,
        )
        .unwrap();
        assert_eq!(order.customer_name(), "Walk-in");
        assert_eq!(order.payment_mode(), "Cash");
        assert!(order.items.is_empty());
        assert_eq!(order.bills.total, 0.0);
        assert!(order.created_at_local().is_none());
    }

    #[test]
    fn test_status_wire_names() {
        let status: OrderStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, OrderStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&OrderStatus::Completed).unwrap(),
            "\"Completed\""
        );
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_flexible_timestamp("2026-01-24T10:30:00Z").unwrap();
        assert_eq!(dt.with_timezone(&chrono::Utc).hour(), 10);
    }

    #[test]
    fn test_parse_spreadsheet_formats() {
        let dt = parse_flexible_timestamp("1/24/2026 10:30:00 AM").unwrap();
        assert_eq!((dt.month(), dt.day(), dt.year()), (1, 24, 2026));
        assert_eq!((dt.hour(), dt.minute()), (10, 30));

        let date_only = parse_flexible_timestamp("1/24/2026").unwrap();
        assert_eq!(date_only.hour(), 0);

        assert!(parse_flexible_timestamp("not a date").is_none());
        assert!(parse_flexible_timestamp("").is_none());
    }
}
