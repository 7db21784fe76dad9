// ==========================================
// Snackhouse POS - Menu entities
// ==========================================
// Wire shapes of the list-menu API. Older backend
// versions named the item list "products"; the alias
// keeps both generations deserializable.
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, alias = "products")]
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            id: None,
            name: name.into(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_alias() {
        let category: MenuCategory = serde_json::from_str(
            r#"{"name":"Drinks","products":[{"name":"Iced Tea","price":15}]}"#,
        )
        .unwrap();
        assert_eq!(category.items.len(), 1);
        assert_eq!(category.items[0].name, "Iced Tea");
    }
}
