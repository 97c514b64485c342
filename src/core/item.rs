//! Catalog item records.
//!
//! An [`Item`] is immutable once it enters the catalog. The serialized field
//! names (`image`, `eligibleGenders`, `purchaseRef`) match the saved-outfit
//! storage format, so items written into the archive read back verbatim.

use crate::core::category::{Category, Gender};
use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Highest accepted price, so outfit totals stay exact in integer cents
pub const MAX_PRICE: f64 = 1_000_000_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(rename = "image")]
    pub image_ref: String,
    pub price: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligible_genders: Option<BTreeSet<Gender>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_ref: Option<String>,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            image_ref: String::new(),
            price,
            description: description.into(),
            eligible_genders: None,
            purchase_ref: None,
        }
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    pub fn with_genders(mut self, genders: impl IntoIterator<Item = Gender>) -> Self {
        self.eligible_genders = Some(genders.into_iter().collect());
        self
    }

    pub fn with_purchase_ref(mut self, purchase_ref: impl Into<String>) -> Self {
        self.purchase_ref = Some(purchase_ref.into());
        self
    }

    /// Whether the item may be shown for the given gender scope.
    ///
    /// Items without an `eligibleGenders` set are unrestricted.
    pub fn is_eligible_for(&self, gender: Gender) -> bool {
        self.eligible_genders
            .as_ref()
            .map_or(true, |genders| genders.contains(&gender))
    }

    /// Price in whole cents, rounded half away from zero
    pub fn price_cents(&self) -> u64 {
        (self.price * 100.0).round().max(0.0) as u64
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::NegativePrice {
                id: self.id.clone(),
            });
        }
        if self.price > MAX_PRICE {
            return Err(ValidationError::PriceTooLarge {
                id: self.id.clone(),
                max: MAX_PRICE,
            });
        }
        Ok(())
    }
}
