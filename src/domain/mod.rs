// ==========================================
// Snackhouse POS - Domain layer
// ==========================================
// Entities mirroring the backend wire shapes.
// Orders and menus are sourced from the API and are
// read-only to this crate; ImportedOrder is the one
// shape this crate constructs itself.
// ==========================================

pub mod menu;
pub mod order;

pub use menu::{MenuCategory, MenuItem};
pub use order::{
    parse_flexible_timestamp, Bills, CustomerDetails, ImportedOrder, LineItem, Order, OrderStatus,
    DEFAULT_CUSTOMER, DEFAULT_PAYMENT_MODE,
};
