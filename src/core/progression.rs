//! Category progression state machine.
//!
//! Progression walks the fixed category order one accept at a time. Reaching
//! the end does not add a state: the index stays on the last category and
//! [`Advance::AllCategoriesComplete`] is reported so the caller can move on
//! to reviewing the outfit. [`Progression::jump_to`] lets the user skip
//! around freely.

use crate::core::category::Category;
use crate::core::error::{OutfitError, Result};

/// Result of advancing the progression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to this category
    Moved(Category),
    /// Already on the last category
    AllCategoriesComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progression {
    index: usize,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a given index, clamped to the last category
    pub fn at(index: usize) -> Self {
        Self {
            index: index.min(Category::COUNT - 1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Category {
        Category::ALL[self.index]
    }

    pub fn is_last(&self) -> bool {
        self.index == Category::COUNT - 1
    }

    pub fn advance(&mut self) -> Advance {
        if self.is_last() {
            log::debug!("All categories complete");
            return Advance::AllCategoriesComplete;
        }
        self.index += 1;
        log::debug!("Advanced to {}", self.current());
        Advance::Moved(self.current())
    }

    /// Jump to any category, filled or not
    pub fn jump_to(&mut self, index: usize) -> Result<Category> {
        let category = Category::from_index(index)
            .ok_or_else(|| OutfitError::index_out_of_range(index, Category::COUNT))?;
        self.index = index;
        log::debug!("Jumped to {category}");
        Ok(category)
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
