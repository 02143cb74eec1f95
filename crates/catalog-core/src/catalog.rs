//! Catalog Store
//!
//! Read-only, ordered collection of items supplied wholesale at startup.

use std::collections::{BTreeSet, HashSet};

use tracing::info;

use crate::error::CatalogError;
use crate::item::{Category, Item};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        info!("[CATALOG] Loaded {} items", items.len());
        Ok(Self { items })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lookup by id; `None` is the "not found" state shown by the detail view
    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items whose id is in `ids`, in catalog order. Unknown ids are skipped.
    pub fn select(&self, ids: &BTreeSet<u32>) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| ids.contains(&item.id))
            .cloned()
            .collect()
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.items.iter().filter(|item| item.category == category).count()
    }

    /// Distinct brands in first-seen order
    pub fn brands(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(Item::brand)
            .filter(|brand| !brand.is_empty() && seen.insert(brand.to_ascii_lowercase()))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str, category: Category) -> Item {
        Item::new(id, name, 50_000, category)
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let items = vec![
            make_item(1, "Google Pixel 9", Category::Latest),
            make_item(1, "Google Pixel 8a", Category::Budget),
        ];
        assert!(matches!(Catalog::new(items), Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let catalog = Catalog::new(vec![make_item(1, "Nokia G60", Category::Budget)]).unwrap();
        assert_eq!(catalog.get(1).map(|i| i.name.as_str()), Some("Nokia G60"));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_select_keeps_catalog_order() {
        let catalog = Catalog::new(vec![
            make_item(3, "Sony Xperia 1 VI", Category::Premium),
            make_item(1, "Nokia G60", Category::Budget),
            make_item(2, "Asus ROG Phone 8", Category::Gaming),
        ])
        .unwrap();
        let ids: BTreeSet<u32> = [1, 3, 42].into_iter().collect();
        let picked: Vec<u32> = catalog.select(&ids).iter().map(|i| i.id).collect();
        assert_eq!(picked, vec![3, 1]);
    }

    #[test]
    fn test_brands_are_distinct() {
        let catalog = Catalog::new(vec![
            make_item(1, "Samsung Galaxy S25 Ultra", Category::Latest),
            make_item(2, "Samsung Galaxy A75", Category::Budget),
            make_item(3, "Google Pixel 9 Pro", Category::Latest),
        ])
        .unwrap();
        assert_eq!(catalog.brands(), vec!["Samsung", "Google"]);
        assert_eq!(catalog.count_in(Category::Latest), 2);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{
            "id": 7, "name": "Poco F6 Pro", "price": 208000, "category": "Gaming Phones",
            "specs": {
                "screen": "6.67-inch AMOLED",
                "processor": "Snapdragon 7 Gen 2",
                "camera": "50MP Triple Camera"
            }
        }]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(7).unwrap().category, Category::Gaming);
    }
}
