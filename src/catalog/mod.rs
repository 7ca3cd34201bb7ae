//! # Catalog
//!
//! The read-only menu, loaded once at startup from the built-in seed or a JSON file,
//! plus lookups for the item page and the category pages.

mod menu_data;
pub mod pricing;

pub use pricing::{
    build_line_item, line_item_id, resolve_total, resolve_unit_price, round_cents,
    ItemConfiguration,
};

use crate::model::MenuItem;
use indexmap::IndexSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("No items in category: {0}")]
    EmptyCategory(String),

    #[error("Menu item {item} has a negative price")]
    NegativePrice { item: String },

    #[error("Menu item id {item} appears more than once")]
    DuplicateItem { item: String },

    #[error("Failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse menu: {0}")]
    Parse(#[from] serde_json::Error),
}

/// URL slug, page title and the catalog categories it lists.
const CATEGORY_PAGES: &[(&str, &str, &[&str])] = &[
    ("rice", "Rice Dishes", &["Main Dishes"]),
    ("snacks", "Snacks & Quick Bites", &["Quick Bites", "Appetizers"]),
    ("pizza", "Pizza", &["Main Dishes"]),
    ("meat", "Meat & Grills", &["Grills"]),
    ("soups", "Soups", &["Soups"]),
    ("drinks", "Beverages", &["Beverages"]),
    ("main-dishes", "Main Dishes", &["Main Dishes"]),
    ("quick-bites", "Quick Bites", &["Quick Bites"]),
    ("appetizers", "Appetizers", &["Appetizers"]),
    ("grills", "Grills", &["Grills"]),
    ("sides", "Sides", &["Sides"]),
];

/// Items listed on a category page.
#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub slug: String,
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// Immutable menu. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<[MenuItem]>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        if let Some(bad) = items.iter().find(|i| i.prices().any(|p| p < 0.0)) {
            return Err(CatalogError::NegativePrice {
                item: bad.id.clone(),
            });
        }
        let mut ids = IndexSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|i| !ids.insert(i.id.as_str())) {
            return Err(CatalogError::DuplicateItem {
                item: dup.id.clone(),
            });
        }
        Ok(Self {
            items: items.into(),
        })
    }

    /// The built-in menu.
    pub fn builtin() -> Self {
        Self {
            items: menu_data::builtin_menu().into(),
        }
    }

    /// Parses a JSON array of menu items in the storefront's camelCase format.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(path = %path.display(), items = catalog.len(), "Loaded menu");
        Ok(catalog)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Result<&MenuItem, CatalogError> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| CatalogError::ItemNotFound(id.to_string()))
    }

    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items
            .iter()
            .filter(move |i| i.category.eq_ignore_ascii_case(category))
    }

    /// Distinct categories in menu order.
    pub fn categories(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|i| i.category.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Resolves a category page by URL slug (case-insensitive).
    pub fn category_page(&self, slug: &str) -> Result<CategoryPage, CatalogError> {
        let slug = slug.to_lowercase();
        let (_, title, categories) = CATEGORY_PAGES
            .iter()
            .find(|(s, _, _)| *s == slug)
            .ok_or_else(|| CatalogError::UnknownCategory(slug.clone()))?;
        let items: Vec<MenuItem> = self
            .items
            .iter()
            .filter(|i| categories.iter().any(|c| i.category.eq_ignore_ascii_case(c)))
            .cloned()
            .collect();
        if items.is_empty() {
            return Err(CatalogError::EmptyCategory(slug));
        }
        Ok(CategoryPage {
            slug,
            title: title.to_string(),
            items,
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_menu_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert!(Catalog::new(catalog.items().to_vec()).is_ok());
        assert_eq!(
            catalog.categories(),
            vec!["Main Dishes", "Quick Bites", "Soups", "Grills", "Sides", "Appetizers"]
        );
    }

    #[test]
    fn find_miss_is_item_not_found() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("suya").unwrap().name, "Spicy Beef Suya");
        assert!(matches!(
            catalog.find("sushi"),
            Err(CatalogError::ItemNotFound(id)) if id == "sushi"
        ));
    }

    #[test]
    fn category_pages() {
        let catalog = Catalog::builtin();

        let snacks = catalog.category_page("Snacks").unwrap();
        assert_eq!(snacks.title, "Snacks & Quick Bites");
        let ids: Vec<&str> = snacks.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["chicken-shawarma", "spring-rolls"]);

        assert_eq!(catalog.category_page("rice").unwrap().items.len(), 3);
        assert!(matches!(
            catalog.category_page("desserts"),
            Err(CatalogError::UnknownCategory(_))
        ));
        assert!(matches!(
            catalog.category_page("drinks"),
            Err(CatalogError::EmptyCategory(_))
        ));
    }

    #[test]
    fn json_menu_rejects_negative_prices() {
        let json = r#"[{
            "id": "x", "name": "X", "price": 4.5, "image": "", "restaurant": "R",
            "category": "Sides", "calories": 1, "time": 1,
            "dietary": {"vegetarian": true, "vegan": true, "glutenFree": true, "halal": true, "spicy": false},
            "addons": [{"id": "a", "name": "A", "weight": "1g", "price": -1.0}]
        }]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::NegativePrice { item }) if item == "x"
        ));
        let ok = json.replace("-1.0", "1.0");
        let catalog = Catalog::from_json_str(&ok).unwrap();
        assert_eq!(catalog.find("x").unwrap().rating, None);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let catalog = Catalog::builtin();
        let mut items = catalog.items().to_vec();
        let mut copy = catalog.find("suya").unwrap().clone();
        copy.name = "Another Suya".to_string();
        items.push(copy);
        assert!(matches!(
            Catalog::new(items),
            Err(CatalogError::DuplicateItem { item }) if item == "suya"
        ));
    }
}
