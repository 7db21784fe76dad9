// ==========================================
// Snackhouse POS - Category resolution
// ==========================================
// Menu items get renamed or deleted after orders
// referencing them were placed. Without a fallback chain,
// historical analytics would silently lose category
// attribution and misreport category revenue. Resolution
// precedence: live menu, override table, category embedded
// on the line item, then "Uncategorized".
// ==========================================

use crate::domain::MenuCategory;
use serde::Deserialize;
use std::collections::HashMap;

/// Terminal fallback category.
pub const UNCATEGORIZED: &str = "Uncategorized";

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

// ==========================================
// Override table
// ==========================================

/// Injected mapping of lowercase item name -> category
/// name, used to reattribute items whose category no
/// longer exists in the live menu. Deployment
/// configuration, never computed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CategoryOverrideTable(HashMap<String, String>);

impl CategoryOverrideTable {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (normalize(k.as_ref()), v.into()))
                .collect(),
        )
    }

    fn get_normalized(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// ==========================================
// Resolver
// ==========================================

pub struct CategoryResolver {
    /// normalized item name -> live category name.
    live_index: HashMap<String, String>,
    overrides: CategoryOverrideTable,
}

impl CategoryResolver {
    /// Indexes every item of every currently defined
    /// category. Later categories win duplicate item names,
    /// mirroring last-write-wins indexing of the menu list.
    pub fn new(menu: &[MenuCategory], overrides: CategoryOverrideTable) -> Self {
        let mut live_index = HashMap::new();
        for category in menu {
            for item in &category.items {
                if !item.name.trim().is_empty() {
                    live_index.insert(normalize(&item.name), category.name.clone());
                }
            }
        }
        Self {
            live_index,
            overrides,
        }
    }

    /// Resolves an item name to exactly one category name,
    /// first match wins.
    pub fn resolve<'a>(&'a self, item_name: &str, embedded: Option<&'a str>) -> &'a str {
        let key = normalize(item_name);
        if let Some(category) = self.live_index.get(&key) {
            return category;
        }
        if let Some(category) = self.overrides.get_normalized(&key) {
            return category;
        }
        if let Some(embedded) = embedded.filter(|c| !c.trim().is_empty()) {
            return embedded;
        }
        UNCATEGORIZED
    }
}
