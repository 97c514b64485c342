//! Color mapping for categories and prices.
//!
//! Every category gets one color used wherever it is named (headers, slot
//! lines, progress indicator) so the output reads consistently.

use crate::core::category::Category;
use colored::*;

/// Apply the category's color to any text
pub fn category_style(category: Category, text: &str) -> ColoredString {
    match category {
        Category::Accessories => text.magenta(),
        Category::Tops => text.cyan(),
        Category::Bottoms => text.blue(),
        Category::Shoes => text.yellow(),
    }
}

pub fn colored_category(category: Category) -> ColoredString {
    category_style(category, category.as_str())
}

/// Price formatted with two decimals and a dollar sign
pub fn colored_price(price: f64) -> ColoredString {
    format!("${price:.2}").green()
}

/// Muted text for placeholders like empty slots
pub fn muted(text: &str) -> ColoredString {
    text.bright_black()
}
