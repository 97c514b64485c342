//! Fixed clothing categories and gender tags.
//!
//! [`Category`] replaces loosely typed category strings with a closed
//! enumeration. Its declaration order is the swipe order and never changes
//! during a session, so progression can work purely with indices.
//!
//! # Public API
//! - [`Category`]: The four outfit slots, in progression order
//! - [`Gender`]: Tag used by optional gender scoping

use crate::core::error::{OutfitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outfit slot, ordered by progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Accessories,
    Tops,
    Bottoms,
    Shoes,
}

impl Category {
    /// All categories in progression order
    pub const ALL: [Category; 4] = [
        Category::Accessories,
        Category::Tops,
        Category::Bottoms,
        Category::Shoes,
    ];

    /// Number of categories
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this category in the progression
    pub fn index(self) -> usize {
        match self {
            Category::Accessories => 0,
            Category::Tops => 1,
            Category::Bottoms => 2,
            Category::Shoes => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Accessories => "accessories",
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Shoes => "shoes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = OutfitError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| OutfitError::unknown_category(s))
    }
}

/// Gender tag attached to catalog items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Women,
    Men,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Women, Gender::Men];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Women => "women",
            Gender::Men => "men",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = OutfitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "women" | "woman" | "female" | "f" => Ok(Gender::Women),
            "men" | "man" | "male" | "m" => Ok(Gender::Men),
            _ => Err(OutfitError::unknown_gender(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progression_order() {
        assert_eq!(Category::ALL[0], Category::Accessories);
        assert_eq!(Category::ALL[3], Category::Shoes);
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(Category::from_index(i), Some(*category));
        }
        assert_eq!(Category::from_index(Category::COUNT), None);
    }

    #[test]
    fn test_parse_category() -> Result<()> {
        assert_eq!("tops".parse::<Category>()?, Category::Tops);
        assert_eq!(" Shoes ".parse::<Category>()?, Category::Shoes);
        assert!(matches!(
            "hats".parse::<Category>(),
            Err(OutfitError::UnknownCategory { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_category_serializes_lowercase() -> Result<()> {
        assert_eq!(serde_json::to_string(&Category::Bottoms)?, "\"bottoms\"");
        let parsed: Category = serde_json::from_str("\"accessories\"")?;
        assert_eq!(parsed, Category::Accessories);
        assert!(serde_json::from_str::<Category>("\"socks\"").is_err());
        Ok(())
    }

    #[test]
    fn test_parse_gender_aliases() -> Result<()> {
        assert_eq!("women".parse::<Gender>()?, Gender::Women);
        assert_eq!("Male".parse::<Gender>()?, Gender::Men);
        assert!("other".parse::<Gender>().is_err());
        Ok(())
    }
}
