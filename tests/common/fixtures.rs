//! Predefined scenarios for command tests
//!
//! Each fixture returns a home directory already driven into a known state.

#![allow(dead_code)]

use super::home::*;
use outfit_builder::core::error::Result;

/// Two tops with equal prices, one item in every other category
pub const SMALL_CATALOG: &str = r#"[
  {"id":"A","name":"White T-Shirt","category":"tops","image":"","price":19.99,"description":"Classic white tee."},
  {"id":"B","name":"Black T-Shirt","category":"tops","image":"","price":19.99,"description":"Versatile black tee."},
  {"id":"H","name":"Hat","category":"accessories","image":"","price":24.99,"description":"Trendy hat."},
  {"id":"J","name":"Blue Jeans","category":"bottoms","image":"","price":49.99,"description":"Comfortable jeans."},
  {"id":"S","name":"Sneakers","category":"shoes","image":"","price":79.99,"description":"Stylish sneakers."}
]"#;

/// Scenario: home configured with the small catalog
pub fn home_with_small_catalog() -> Result<TestHome> {
    let home = setup_test_home()?;
    let catalog = write_file(&home, "catalog.json", SMALL_CATALOG)?;
    let catalog = catalog.to_string_lossy().to_string();
    home.run(&["config", "--catalog", catalog.as_str()]);
    Ok(home)
}

/// Scenario: built-in catalog with one saved outfit named "Look1"
/// (Hat + White T-Shirt)
pub fn home_with_saved_outfit() -> Result<TestHome> {
    let home = setup_test_home()?;
    home.run(&["like"]);
    home.run(&["like"]);
    home.run(&["save", "Look1"]);
    Ok(home)
}
