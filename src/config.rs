// ==========================================
// Snackhouse POS - Configuration
// ==========================================
// Deployment configuration supplied by the embedding
// application. The category override table lives here so
// each deployment can list its own deleted-menu repairs
// instead of hardcoding them.
// ==========================================

use crate::analytics::CategoryOverrideTable;
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_STORE_NAME: &str = "Metanoia Snack House";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL; trailing slashes are tolerated.
    pub base_url: String,
    /// Store name printed on report headers.
    pub store_name: String,
    pub timeout_secs: u64,
    /// Lowercase item name -> category name, for items
    /// whose menu category has since been deleted.
    pub category_overrides: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            store_name: DEFAULT_STORE_NAME.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            category_overrides: HashMap::new(),
        }
    }
}

impl ClientConfig {
    pub fn override_table(&self) -> CategoryOverrideTable {
        CategoryOverrideTable::from_pairs(
            self.category_overrides
                .iter()
                .map(|(k, v)| (k.as_str(), v.clone())),
        )
    }
}
