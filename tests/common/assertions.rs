//! Common assertion helpers for command output

#![allow(dead_code)]

use predicates::prelude::*;

/// Header shown when browsing a category
pub fn choosing(category: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Choose your {category}"))
}

/// The visualizer section with its total line
pub fn shows_total(total: &str) -> impl Predicate<str> {
    predicates::str::contains("Outfit Visualizer")
        .and(predicates::str::contains(format!("Total: ${total}")))
}

/// A numbered saved outfit entry
pub fn has_saved_entry(position: u32, name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{position}] {name}"))
}

pub fn validation_error(reason: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Validation error: {reason}"))
}

pub fn out_of_range() -> impl Predicate<str> {
    predicates::str::contains("out of range")
}
