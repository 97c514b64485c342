//! The outfit being assembled.
//!
//! [`Outfit`] has one optional slot per [`Category`], so an invalid slot key
//! cannot exist. It serializes as `{"accessories": Item|null, "tops": ...}`,
//! the same shape saved outfits use on disk.
//!
//! Placing an item here does not advance progression by itself; the session
//! pairs [`Outfit::place`] with [`Progression::advance`](crate::core::progression::Progression::advance)
//! on every accept.

use crate::core::category::Category;
use crate::core::error::ValidationError;
use crate::core::item::Item;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    #[serde(default)]
    pub accessories: Option<Item>,
    #[serde(default)]
    pub tops: Option<Item>,
    #[serde(default)]
    pub bottoms: Option<Item>,
    #[serde(default)]
    pub shoes: Option<Item>,
}

impl Outfit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, category: Category) -> Option<&Item> {
        match category {
            Category::Accessories => self.accessories.as_ref(),
            Category::Tops => self.tops.as_ref(),
            Category::Bottoms => self.bottoms.as_ref(),
            Category::Shoes => self.shoes.as_ref(),
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<Item> {
        match category {
            Category::Accessories => &mut self.accessories,
            Category::Tops => &mut self.tops,
            Category::Bottoms => &mut self.bottoms,
            Category::Shoes => &mut self.shoes,
        }
    }

    /// Put an item in its category's slot, returning whatever it replaced
    pub fn place(&mut self, item: Item) -> Option<Item> {
        let category = item.category;
        self.slot_mut(category).replace(item)
    }

    /// Empty a slot, returning its previous occupant
    pub fn clear(&mut self, category: Category) -> Option<Item> {
        self.slot_mut(category).take()
    }

    /// Slots in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Option<&Item>)> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.slot(category)))
    }

    /// Filled slots only, in category order
    pub fn filled(&self) -> impl Iterator<Item = &Item> {
        self.iter().filter_map(|(_, item)| item)
    }

    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled().next().is_none()
    }

    /// Sum of slot prices in cents, saturating instead of overflowing
    pub fn total_cents(&self) -> u64 {
        self.filled()
            .map(Item::price_cents)
            .fold(0, u64::saturating_add)
    }

    /// Sum of slot prices rounded to two decimals.
    ///
    /// Each price is rounded to whole cents (half away from zero) before
    /// summing, so the result never carries float drift.
    pub fn total(&self) -> f64 {
        self.total_cents() as f64 / 100.0
    }

    /// Check that every item sits in the slot of its own category
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        for (slot, item) in self.iter() {
            if let Some(item) = item {
                if item.category != slot {
                    return Err(ValidationError::CategoryMismatch {
                        id: item.id.clone(),
                        slot: slot.to_string(),
                        category: item.category.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
