// ==========================================
// Snackhouse POS - Sales analytics engine
// ==========================================
// Derives every dashboard metric from the raw order
// stream in one pass: headline totals, weekday buckets,
// the monthly estimate, item stats and category stats.
// Only Completed orders participate; Pending/In Progress
// are excluded entirely, not zero-weighted.
// ==========================================

use crate::analytics::category_resolver::CategoryResolver;
use crate::domain::{Order, OrderStatus};
use chrono::Datelike;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Fixed apportionment of total revenue across the four
/// weeks of a month. A declared estimate for trend
/// visualization, not a per-week recomputation.
pub const MONTHLY_ESTIMATE_WEIGHTS: [(&str, f64); 4] = [
    ("Week 1", 0.22),
    ("Week 2", 0.28),
    ("Week 3", 0.25),
    ("Week 4", 0.25),
];

pub const POPULAR_ITEM_LIMIT: usize = 8;
pub const TOP_REVENUE_LIMIT: usize = 6;
pub const LOW_PERFORMER_LIMIT: usize = 5;

// ==========================================
// Output shapes
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayBucket {
    pub name: &'static str,
    pub sales: f64,
    pub orders: u32,
}

/// One bucket of the fixed-weight monthly estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyEstimate {
    pub name: &'static str,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStat {
    pub name: String,
    pub quantity: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPerformance {
    pub name: String,
    pub quantity: u64,
    pub revenue: f64,
    /// Orders containing at least one item of this
    /// category, counted once per order.
    pub orders: u32,
    pub avg_order_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySales {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesAnalytics {
    pub total_revenue: f64,
    pub total_orders: usize,
    pub average_order_value: f64,
    /// Always all seven Sun..Sat buckets, zeroed when no
    /// order falls on that weekday.
    pub weekly_sales: Vec<WeekdayBucket>,
    /// Always four buckets; labeled estimate (see
    /// [`MONTHLY_ESTIMATE_WEIGHTS`]).
    pub monthly_estimate: Vec<MonthlyEstimate>,
    pub popular_items: Vec<ItemStat>,
    pub top_revenue_items: Vec<ItemStat>,
    pub low_performing_items: Vec<ItemStat>,
    pub category_performance: Vec<CategoryPerformance>,
    /// Positive-revenue categories only, for share charts.
    pub sales_by_category: Vec<CategorySales>,
}

// ==========================================
// Engine
// ==========================================

struct CategoryAccumulator {
    name: String,
    quantity: u64,
    revenue: f64,
    orders: u32,
}

pub struct AnalyticsEngine<'a> {
    resolver: &'a CategoryResolver,
}

impl<'a> AnalyticsEngine<'a> {
    pub fn new(resolver: &'a CategoryResolver) -> Self {
        Self { resolver }
    }

    pub fn aggregate(&self, orders: &[Order]) -> SalesAnalytics {
        let completed: Vec<&Order> = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .collect();

        let total_revenue: f64 = completed.iter().map(|o| o.bills.total).sum();
        let total_orders = completed.len();
        let average_order_value = if total_orders > 0 {
            total_revenue / total_orders as f64
        } else {
            0.0
        };

        // Weekday buckets. Orders whose timestamp does not
        // parse are skipped here only; their totals still
        // count toward the headline revenue above.
        let mut weekly_sales: Vec<WeekdayBucket> = WEEKDAY_NAMES
            .iter()
            .map(|name| WeekdayBucket {
                name,
                sales: 0.0,
                orders: 0,
            })
            .collect();
        for order in &completed {
            if let Some(dt) = order.created_at_local() {
                let idx = dt.weekday().num_days_from_sunday() as usize;
                weekly_sales[idx].sales += order.bills.total;
                weekly_sales[idx].orders += 1;
            }
        }

        let monthly_estimate: Vec<MonthlyEstimate> = MONTHLY_ESTIMATE_WEIGHTS
            .iter()
            .map(|(name, weight)| MonthlyEstimate {
                name,
                sales: total_revenue * weight,
            })
            .collect();

        // Item and category stats, accumulated in first-seen
        // order so stable ranking sorts keep input order on
        // ties. Item stats key on the raw name; category
        // resolution normalizes.
        let mut item_index: HashMap<String, usize> = HashMap::new();
        let mut item_stats: Vec<ItemStat> = Vec::new();
        let mut category_index: HashMap<String, usize> = HashMap::new();
        let mut categories: Vec<CategoryAccumulator> = Vec::new();

        for order in &completed {
            let mut categories_in_order: HashSet<usize> = HashSet::new();

            for item in &order.items {
                let quantity = u64::from(item.quantity);
                // Line total as recorded on the order; not
                // re-derived from the unit price.
                let revenue = item.price;

                let item_slot = *item_index.entry(item.name.clone()).or_insert_with(|| {
                    item_stats.push(ItemStat {
                        name: item.name.clone(),
                        quantity: 0,
                        revenue: 0.0,
                    });
                    item_stats.len() - 1
                });
                item_stats[item_slot].quantity += quantity;
                item_stats[item_slot].revenue += revenue;

                let category = self
                    .resolver
                    .resolve(&item.name, item.category.as_deref())
                    .to_string();
                let cat_slot = *category_index.entry(category.clone()).or_insert_with(|| {
                    categories.push(CategoryAccumulator {
                        name: category.clone(),
                        quantity: 0,
                        revenue: 0.0,
                        orders: 0,
                    });
                    categories.len() - 1
                });
                categories[cat_slot].quantity += quantity;
                categories[cat_slot].revenue += revenue;
                categories_in_order.insert(cat_slot);
            }

            // One increment per distinct category per order,
            // so multi-item orders are not double counted.
            for cat_slot in categories_in_order {
                categories[cat_slot].orders += 1;
            }
        }

        let mut popular_items = item_stats.clone();
        popular_items.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        popular_items.truncate(POPULAR_ITEM_LIMIT);

        let mut top_revenue_items = item_stats.clone();
        top_revenue_items.sort_by(|a, b| cmp_f64(b.revenue, a.revenue));
        top_revenue_items.truncate(TOP_REVENUE_LIMIT);

        let mut low_performing_items = item_stats;
        low_performing_items.sort_by(|a, b| a.quantity.cmp(&b.quantity));
        low_performing_items.truncate(LOW_PERFORMER_LIMIT);

        let mut category_performance: Vec<CategoryPerformance> = categories
            .into_iter()
            .map(|c| CategoryPerformance {
                avg_order_value: if c.orders > 0 {
                    c.revenue / f64::from(c.orders)
                } else {
                    0.0
                },
                name: c.name,
                quantity: c.quantity,
                revenue: c.revenue,
                orders: c.orders,
            })
            .collect();
        category_performance.sort_by(|a, b| cmp_f64(b.revenue, a.revenue));

        let sales_by_category = category_performance
            .iter()
            .filter(|c| c.revenue > 0.0)
            .map(|c| CategorySales {
                name: c.name.clone(),
                value: c.revenue,
            })
            .collect();

        SalesAnalytics {
            total_revenue,
            total_orders,
            average_order_value,
            weekly_sales,
            monthly_estimate,
            popular_items,
            top_revenue_items,
            low_performing_items,
            category_performance,
            sales_by_category,
        }
    }
}

// Revenue values are finite by construction; treat any
// incomparable pair as equal to keep the sort total.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::category_resolver::CategoryOverrideTable;
    use crate::domain::{Bills, CustomerDetails, LineItem, MenuCategory, MenuItem};

    fn order(status: OrderStatus, total: f64, created_at: Option<&str>, items: Vec<LineItem>) -> Order {
        Order {
            id: "o".to_string(),
            customer_details: CustomerDetails::default(),
            items,
            bills: Bills {
                total,
                sub_total: None,
            },
            status,
            created_at: created_at.map(String::from),
            payment_mode: None,
        }
    }

    fn drinks_menu() -> Vec<MenuCategory> {
        vec![MenuCategory::new(
            "Drinks",
            vec![
                MenuItem {
                    name: "Iced Tea".to_string(),
                    price: 15.0,
                },
                MenuItem {
                    name: "Hot Choco".to_string(),
                    price: 45.0,
                },
            ],
        )]
    }

    fn engine_fixture() -> (Vec<MenuCategory>, CategoryOverrideTable) {
        (drinks_menu(), CategoryOverrideTable::default())
    }

    #[test]
    fn test_empty_order_list_has_full_bucket_domains() {
        let (menu, overrides) = engine_fixture();
        let resolver = CategoryResolver::new(&menu, overrides);
        let analytics = AnalyticsEngine::new(&resolver).aggregate(&[]);

        assert_eq!(analytics.total_revenue, 0.0);
        assert_eq!(analytics.total_orders, 0);
        assert_eq!(analytics.average_order_value, 0.0);
        assert_eq!(analytics.weekly_sales.len(), 7);
        assert!(analytics.weekly_sales.iter().all(|b| b.sales == 0.0 && b.orders == 0));
        assert_eq!(analytics.monthly_estimate.len(), 4);
        assert!(analytics.popular_items.is_empty());
    }

    #[test]
    fn test_non_completed_orders_are_excluded() {
        let (menu, overrides) = engine_fixture();
        let resolver = CategoryResolver::new(&menu, overrides);
        let orders = vec![
            order(OrderStatus::Pending, 1000.0, None, vec![]),
            order(OrderStatus::Completed, 200.0, None, vec![]),
        ];
        let analytics = AnalyticsEngine::new(&resolver).aggregate(&orders);
        assert_eq!(analytics.total_revenue, 200.0);
        assert_eq!(analytics.total_orders, 1);
        assert_eq!(analytics.average_order_value, 200.0);
    }

    #[test]
    fn test_weekday_bucketing_skips_bad_dates_only() {
        let (menu, overrides) = engine_fixture();
        let resolver = CategoryResolver::new(&menu, overrides);
        // 2026-01-04 is a Sunday.
        let orders = vec![
            order(
                OrderStatus::Completed,
                100.0,
                Some("2026-01-04T12:00:00"),
                vec![],
            ),
            order(OrderStatus::Completed, 50.0, Some("garbage"), vec![]),
        ];
        let analytics = AnalyticsEngine::new(&resolver).aggregate(&orders);

        // Bad timestamp still counts toward the headline
        // totals, just not toward any weekday bucket.
        assert_eq!(analytics.total_revenue, 150.0);
        assert_eq!(analytics.weekly_sales[0].name, "Sun");
        assert_eq!(analytics.weekly_sales[0].sales, 100.0);
        assert_eq!(analytics.weekly_sales[0].orders, 1);
        let bucketed: u32 = analytics.weekly_sales.iter().map(|b| b.orders).sum();
        assert_eq!(bucketed, 1);
    }

    #[test]
    fn test_monthly_estimate_weights() {
        let (menu, overrides) = engine_fixture();
        let resolver = CategoryResolver::new(&menu, overrides);
        let orders = vec![order(OrderStatus::Completed, 1000.0, None, vec![])];
        let analytics = AnalyticsEngine::new(&resolver).aggregate(&orders);

        let sales: Vec<f64> = analytics.monthly_estimate.iter().map(|m| m.sales).collect();
        assert_eq!(sales, vec![220.0, 280.0, 250.0, 250.0]);
        assert_eq!(analytics.monthly_estimate[0].name, "Week 1");
    }

    #[test]
    fn test_item_stats_key_on_raw_name() {
        let (menu, overrides) = engine_fixture();
        let resolver = CategoryResolver::new(&menu, overrides);
        let orders = vec![order(
            OrderStatus::Completed,
            90.0,
            None,
            vec![
                LineItem::new("Iced Tea", 2, 30.0),
                LineItem::new("iced tea", 1, 15.0),
            ],
        )];
        let analytics = AnalyticsEngine::new(&resolver).aggregate(&orders);

        // Different casing stays separate in item stats,
        // unlike category resolution.
        assert_eq!(analytics.popular_items.len(), 2);
        assert_eq!(analytics.popular_items[0].name, "Iced Tea");
        assert_eq!(analytics.popular_items[0].quantity, 2);
        assert_eq!(analytics.popular_items[0].revenue, 30.0);
    }

    #[test]
    fn test_category_order_count_once_per_order() {
        let (menu, overrides) = engine_fixture();
        let resolver = CategoryResolver::new(&menu, overrides);
        let orders = vec![order(
            OrderStatus::Completed,
            60.0,
            None,
            vec![
                LineItem::new("Iced Tea", 1, 15.0),
                LineItem::new("Hot Choco", 1, 45.0),
            ],
        )];
        let analytics = AnalyticsEngine::new(&resolver).aggregate(&orders);

        assert_eq!(analytics.category_performance.len(), 1);
        let drinks = &analytics.category_performance[0];
        assert_eq!(drinks.name, "Drinks");
        assert_eq!(drinks.orders, 1);
        assert_eq!(drinks.quantity, 2);
        assert_eq!(drinks.revenue, 60.0);
        assert_eq!(drinks.avg_order_value, 60.0);
    }

    #[test]
    fn test_rankings_and_limits() {
        let (menu, overrides) = engine_fixture();
        let resolver = CategoryResolver::new(&menu, overrides);
        let items: Vec<LineItem> = (0..10)
            .map(|i| LineItem::new(format!("Dish {i}"), (i + 1) as u32, (i as f64 + 1.0) * 10.0))
            .collect();
        let orders = vec![order(OrderStatus::Completed, 550.0, None, items)];
        let analytics = AnalyticsEngine::new(&resolver).aggregate(&orders);

        assert_eq!(analytics.popular_items.len(), 8);
        assert_eq!(analytics.popular_items[0].name, "Dish 9");
        assert_eq!(analytics.top_revenue_items.len(), 6);
        assert_eq!(analytics.top_revenue_items[0].revenue, 100.0);
        assert_eq!(analytics.low_performing_items.len(), 5);
        assert_eq!(analytics.low_performing_items[0].name, "Dish 0");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let (menu, overrides) = engine_fixture();
        let resolver = CategoryResolver::new(&menu, overrides);
        let orders = vec![order(
            OrderStatus::Completed,
            30.0,
            None,
            vec![
                LineItem::new("Alpha", 1, 10.0),
                LineItem::new("Beta", 1, 10.0),
                LineItem::new("Gamma", 1, 10.0),
            ],
        )];
        let analytics = AnalyticsEngine::new(&resolver).aggregate(&orders);

        let names: Vec<&str> = analytics
            .popular_items
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_sales_by_category_filters_zero_revenue() {
        let (menu, overrides) = engine_fixture();
        let resolver = CategoryResolver::new(&menu, overrides);
        let orders = vec![order(
            OrderStatus::Completed,
            15.0,
            None,
            vec![
                LineItem::new("Iced Tea", 1, 15.0),
                LineItem::new("Free Sample", 1, 0.0),
            ],
        )];
        let analytics = AnalyticsEngine::new(&resolver).aggregate(&orders);

        assert_eq!(analytics.category_performance.len(), 2);
        assert_eq!(analytics.sales_by_category.len(), 1);
        assert_eq!(analytics.sales_by_category[0].name, "Drinks");
    }
}
