// ==========================================
// Snackhouse POS - Back-office core
// ==========================================
// Order import/export and sales analytics for a
// restaurant point-of-sale back office:
// - importer: spreadsheet intake and row reconstruction
// - export: order flattening and workbook production
// - analytics: dashboard metric derivation
// - client: typed REST access to the POS backend
// - orchestrator: the end-to-end workflows
// ==========================================

pub mod analytics;
pub mod client;
pub mod config;
pub mod domain;
pub mod export;
pub mod importer;
pub mod logging;
pub mod orchestrator;

pub use analytics::{AnalyticsEngine, CategoryResolver, SalesAnalytics};
pub use client::{IdentityProvider, PosClient, StoredSessionIdentity};
pub use config::ClientConfig;
pub use domain::{ImportedOrder, LineItem, MenuCategory, Order, OrderStatus};
pub use export::{build_export, build_sales_report};
pub use importer::{RowParser, WorkbookReader};
pub use orchestrator::{ImportExportOrchestrator, ImportReport};

pub const APP_NAME: &str = "snackhouse-pos";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
