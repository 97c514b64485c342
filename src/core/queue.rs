//! Per-category swipe queue.
//!
//! A [`Queue`] holds the items of the active category awaiting a decision.
//! Accepting removes the head for good. Rejecting only rotates the head to the
//! tail, so a rejected item comes back around: the queue is cyclic until every
//! item has been accepted away.
//!
//! # Invariants
//! - Every item shares the queue's category (and gender scope, when set)
//! - No id appears twice
//! - Order is catalog order until swipes rotate it

use crate::core::catalog::Catalog;
use crate::core::category::{Category, Gender};
use crate::core::error::{OutfitError, Result};
use crate::core::item::Item;
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Clone, PartialEq)]
pub struct Queue {
    category: Category,
    gender: Option<Gender>,
    items: VecDeque<Item>,
}

impl Queue {
    /// Build the queue for a category from the catalog.
    ///
    /// An empty queue is a valid result; callers show "nothing to swipe".
    pub fn build(catalog: &Catalog, category: Category, gender: Option<Gender>) -> Self {
        let items: VecDeque<Item> = catalog.filter(category, gender).cloned().collect();
        log::debug!(
            "Built {category} queue with {} items (gender scope: {gender:?})",
            items.len()
        );
        Self {
            category,
            gender,
            items,
        }
    }

    /// Rebuild a queue from a previously saved id order.
    ///
    /// Ids missing from the catalog, outside the category or scope, or
    /// repeated are dropped.
    pub fn from_ids(
        catalog: &Catalog,
        category: Category,
        gender: Option<Gender>,
        ids: &[String],
    ) -> Self {
        let mut seen = HashSet::new();
        let items: VecDeque<Item> = ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| catalog.get(id))
            .filter(|item| {
                item.category == category && gender.map_or(true, |g| item.is_eligible_for(g))
            })
            .cloned()
            .collect();

        if items.len() != ids.len() {
            log::debug!(
                "Dropped {} stale ids while restoring {category} queue",
                ids.len() - items.len()
            );
        }

        Self {
            category,
            gender,
            items,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// The item currently up for a decision
    pub fn head(&self) -> Option<&Item> {
        self.items.front()
    }

    /// Remove and return the head
    pub fn accept(&mut self) -> Result<Item> {
        let item = self.items.pop_front().ok_or(OutfitError::EmptyQueue)?;
        log::debug!("Accepted '{}' ({} left)", item.id, self.items.len());
        Ok(item)
    }

    /// Move the head to the tail and return a reference to the rotated item
    pub fn reject(&mut self) -> Result<&Item> {
        let item = self.items.pop_front().ok_or(OutfitError::EmptyQueue)?;
        log::debug!("Recycled '{}' to the back of the queue", item.id);
        self.items.push_back(item);
        self.items.back().ok_or(OutfitError::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tops() -> Catalog {
        Catalog::from_items(vec![
            Item::new("A", "White T-Shirt", Category::Tops, 19.99, "Classic white tee."),
            Item::new("B", "Black T-Shirt", Category::Tops, 19.99, "Versatile black tee."),
            Item::new("C", "Boots", Category::Shoes, 99.99, "Durable boots."),
        ])
        .unwrap()
    }

    fn ids(queue: &Queue) -> Vec<String> {
        queue.ids()
    }

    #[test]
    fn test_build_filters_by_category() {
        let queue = Queue::build(&two_tops(), Category::Tops, None);
        assert_eq!(ids(&queue), vec!["A", "B"]);
        assert_eq!(queue.category(), Category::Tops);
    }

    #[test]
    fn test_build_empty_category_is_valid() {
        let queue = Queue::build(&two_tops(), Category::Accessories, None);
        assert!(queue.is_empty());
        assert!(queue.head().is_none());
    }

    #[test]
    fn test_reject_rotates_head_to_tail() -> Result<()> {
        let mut queue = Queue::build(&two_tops(), Category::Tops, None);
        let rotated = queue.reject()?.id.clone();
        assert_eq!(rotated, "A");
        assert_eq!(ids(&queue), vec!["B", "A"]);
        Ok(())
    }

    #[test]
    fn test_reject_len_times_restores_order() -> Result<()> {
        let catalog = Catalog::builtin();
        let mut queue = Queue::build(&catalog, Category::Tops, None);
        let original = ids(&queue);
        for _ in 0..queue.len() {
            queue.reject()?;
        }
        assert_eq!(ids(&queue), original);
        Ok(())
    }

    #[test]
    fn test_accept_pops_head() -> Result<()> {
        let mut queue = Queue::build(&two_tops(), Category::Tops, None);
        let before = queue.len();
        let head = queue.head().cloned();
        let popped = queue.accept()?;
        assert_eq!(Some(popped), head);
        assert_eq!(queue.len(), before - 1);
        Ok(())
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue = Queue::build(&two_tops(), Category::Bottoms, None);
        assert!(matches!(queue.accept(), Err(OutfitError::EmptyQueue)));
        assert!(matches!(queue.reject(), Err(OutfitError::EmptyQueue)));
    }

    #[test]
    fn test_from_ids_drops_stale_and_duplicate_ids() {
        let saved = vec![
            "B".to_string(),
            "gone".to_string(),
            "C".to_string(),
            "B".to_string(),
            "A".to_string(),
        ];
        let queue = Queue::from_ids(&two_tops(), Category::Tops, None, &saved);
        assert_eq!(ids(&queue), vec!["B", "A"]);
    }
}
