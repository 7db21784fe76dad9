// ==========================================
// Snackhouse POS - Analytics layer
// ==========================================
// Pure derivation of dashboard metrics from the order
// stream and the live menu. No I/O, no shared state; the
// orchestrator recomputes on every input change.
// ==========================================

pub mod aggregator;
pub mod category_resolver;

pub use aggregator::{
    AnalyticsEngine, CategoryPerformance, CategorySales, ItemStat, MonthlyEstimate,
    SalesAnalytics, WeekdayBucket, LOW_PERFORMER_LIMIT, MONTHLY_ESTIMATE_WEIGHTS,
    POPULAR_ITEM_LIMIT, TOP_REVENUE_LIMIT, WEEKDAY_NAMES,
};
pub use category_resolver::{CategoryOverrideTable, CategoryResolver, UNCATEGORIZED};
