//! Read-only item catalog.
//!
//! The catalog is built once per process, either from the built-in item list
//! or from a JSON file named in the config, and is never mutated afterwards.
//! Queues are derived from it by category (and optionally gender).

use crate::core::category::{Category, Gender};
use crate::core::error::{OutfitError, Result, ValidationError};
use crate::core::item::Item;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/200";

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and invalid prices
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id.as_str()) {
                return Err(ValidationError::DuplicateItemId {
                    id: item.id.clone(),
                }
                .into());
            }
        }
        log::debug!("Catalog initialized with {} items", items.len());
        Ok(Self { items })
    }

    /// Load a catalog from a JSON array of items
    pub fn load_from_file(path: &Path) -> Result<Self> {
        log::debug!("Loading catalog from {}", path.display());
        let content =
            fs::read_to_string(path).map_err(|e| OutfitError::catalog_read_failed(path, e))?;
        let items: Vec<Item> = serde_json::from_str(&content)
            .map_err(|e| OutfitError::catalog_parse_failed(path, e))?;
        Self::from_items(items)
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Self {
        let items = builtin_items();
        Self { items }
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

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items of one category, in catalog order, optionally scoped to a gender
    pub fn filter<'a>(
        &'a self,
        category: Category,
        gender: Option<Gender>,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| {
            item.category == category && gender.map_or(true, |g| item.is_eligible_for(g))
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_items() -> Vec<Item> {
    use Category::*;
    use Gender::*;

    let item = |id: &str, name: &str, category, price, description: &str| {
        Item::new(id, name, category, price, description).with_image(PLACEHOLDER_IMAGE)
    };

    vec![
        item("1", "White T-Shirt", Tops, 19.99, "Classic white tee."),
        item("2", "Black T-Shirt", Tops, 19.99, "Versatile black tee."),
        item("3", "Blue Jeans", Bottoms, 49.99, "Comfortable jeans."),
        item("4", "Black Jeans", Bottoms, 49.99, "Sleek black jeans."),
        item("5", "Sneakers", Shoes, 79.99, "Stylish sneakers."),
        item("6", "Boots", Shoes, 99.99, "Durable boots."),
        item("7", "Hat", Accessories, 24.99, "Trendy hat."),
        item("8", "Scarf", Accessories, 29.99, "Soft scarf."),
        item("9", "Silk Blouse", Tops, 39.99, "Light silk blouse.").with_genders([Women]),
        item("10", "Oxford Shirt", Tops, 44.99, "Button-down oxford.").with_genders([Men]),
        item("11", "Pleated Skirt", Bottoms, 34.99, "Midi pleated skirt.").with_genders([Women]),
        item("12", "Chinos", Bottoms, 54.99, "Slim fit chinos.").with_genders([Men]),
        item("13", "Ballet Flats", Shoes, 59.99, "Everyday flats.").with_genders([Women]),
        item("14", "Loafers", Shoes, 89.99, "Leather loafers.").with_genders([Men]),
        item("15", "Tote Bag", Accessories, 34.99, "Canvas tote.").with_genders([Women]),
        item("16", "Leather Belt", Accessories, 27.99, "Brown leather belt.")
            .with_genders([Men]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_is_valid() -> Result<()> {
        let catalog = Catalog::builtin();
        let rebuilt = Catalog::from_items(catalog.items().to_vec())?;
        assert_eq!(rebuilt.len(), catalog.len());
        for category in Category::ALL {
            assert!(catalog.filter(category, None).count() >= 2);
        }
        Ok(())
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = Catalog::builtin();
        let tops: Vec<&str> = catalog
            .filter(Category::Tops, None)
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(tops, vec!["1", "2", "9", "10"]);
    }

    #[test]
    fn test_filter_by_gender_keeps_unrestricted_items() {
        let catalog = Catalog::builtin();
        let tops: Vec<&str> = catalog
            .filter(Category::Tops, Some(Gender::Women))
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(tops, vec!["1", "2", "9"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = Item::new("1", "A", Category::Tops, 1.0, "");
        let b = Item::new("1", "B", Category::Shoes, 2.0, "");
        let err = Catalog::from_items(vec![a, b]).unwrap_err();
        assert!(matches!(
            err,
            OutfitError::Validation(ValidationError::DuplicateItemId { .. })
        ));
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"id":"a","name":"Cap","category":"accessories","image":"","price":5,"description":"Cap"}]"#,
        )?;
        let catalog = Catalog::load_from_file(&path)?;
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").map(|item| item.price), Some(5.0));
        Ok(())
    }

    #[test]
    fn test_load_from_file_rejects_unknown_category() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"id":"a","name":"Cap","category":"hats","image":"","price":5,"description":""}]"#,
        )?;
        let err = Catalog::load_from_file(&path).unwrap_err();
        assert!(matches!(err, OutfitError::CatalogParseFailed { .. }));
        Ok(())
    }
}
