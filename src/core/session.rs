//! The swipe session: the boundary a presentation layer talks to.
//!
//! A [`Session`] owns everything that changes while the user swipes: the
//! active queue, the category progression, the live outfit and the archive.
//! The catalog is shared read-only. There is no global state; callers create
//! a session with [`Session::init`] (or [`Session::restore`]) and end it with
//! [`Session::teardown`], which hands back a snapshot they may persist.
//!
//! # Input events
//! - [`Session::swipe`]: accept or reject the current item
//! - [`Session::select_gender`]: change the gender scope (when enabled)
//! - [`Session::save_outfit`], [`Session::load_outfit`], [`Session::delete_outfit`]
//! - [`Session::navigate_to_category`]: jump anywhere in the progression
//!
//! # Output queries
//! - [`Session::current_category`], [`Session::current_item`]
//! - [`Session::outfit`], [`Session::archive`], [`Session::total`]

use crate::core::archive::{Archive, ArchiveStore, SavedOutfit};
use crate::core::catalog::Catalog;
use crate::core::category::{Category, Gender};
use crate::core::error::{OutfitError, Result};
use crate::core::item::Item;
use crate::core::outfit::Outfit;
use crate::core::progression::{Advance, Progression};
use crate::core::queue::Queue;
use crate::core::state::SessionState;

/// Swipe decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Accept,
    Reject,
}

/// What a swipe did
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeOutcome {
    Accepted {
        item: Item,
        /// Previous occupant of the slot, if any
        replaced: Option<Item>,
        progress: Advance,
    },
    Rejected {
        item: Item,
    },
}

/// Session options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub gender_scoping_enabled: bool,
}

pub struct Session<'c, S: ArchiveStore> {
    catalog: &'c Catalog,
    options: SessionOptions,
    gender: Option<Gender>,
    progression: Progression,
    queue: Queue,
    outfit: Outfit,
    archive: Archive<S>,
}

impl<'c, S: ArchiveStore> Session<'c, S> {
    /// Start a fresh session on the first category
    pub fn init(catalog: &'c Catalog, archive: Archive<S>, options: SessionOptions) -> Self {
        let progression = Progression::new();
        let queue = Queue::build(catalog, progression.current(), None);
        log::debug!(
            "Session started with {} saved outfits (gender scoping: {})",
            archive.len(),
            options.gender_scoping_enabled
        );
        Self {
            catalog,
            options,
            gender: None,
            progression,
            queue,
            outfit: Outfit::new(),
            archive,
        }
    }

    /// Resume a session from a snapshot taken by [`Session::teardown`].
    ///
    /// Stale queue ids are dropped; an outfit with misplaced items is
    /// discarded. A gender in the snapshot is ignored when scoping is off.
    pub fn restore(
        catalog: &'c Catalog,
        archive: Archive<S>,
        options: SessionOptions,
        state: SessionState,
    ) -> Self {
        let gender = state.gender.filter(|_| options.gender_scoping_enabled);
        let progression = Progression::at(state.category_index);
        let queue = Queue::from_ids(catalog, progression.current(), gender, &state.queue);

        let outfit = match state.outfit.validate() {
            Ok(()) => state.outfit,
            Err(e) => {
                log::warn!("Discarding restored outfit: {e}");
                Outfit::new()
            }
        };

        Self {
            catalog,
            options,
            gender,
            progression,
            queue,
            outfit,
            archive,
        }
    }

    /// End the session, returning a snapshot and the archive
    pub fn teardown(self) -> (SessionState, Archive<S>) {
        let state = self.snapshot();
        (state, self.archive)
    }

    /// Current state without ending the session
    pub fn snapshot(&self) -> SessionState {
        SessionState::new(
            self.progression.index(),
            self.gender,
            self.queue.ids(),
            self.outfit.clone(),
        )
    }

    fn rebuild_queue(&mut self) {
        self.queue = Queue::build(self.catalog, self.progression.current(), self.gender);
    }

    pub fn swipe(&mut self, direction: Direction) -> Result<SwipeOutcome> {
        match direction {
            Direction::Accept => self.accept(),
            Direction::Reject => self.reject(),
        }
    }

    fn accept(&mut self) -> Result<SwipeOutcome> {
        let item = self.queue.accept()?;
        let replaced = self.outfit.place(item.clone());
        let progress = self.progression.advance();
        if let Advance::Moved(_) = progress {
            self.rebuild_queue();
        }
        Ok(SwipeOutcome::Accepted {
            item,
            replaced,
            progress,
        })
    }

    fn reject(&mut self) -> Result<SwipeOutcome> {
        let item = self.queue.reject()?.clone();
        Ok(SwipeOutcome::Rejected { item })
    }

    /// Change gender scope and start over from the first category.
    ///
    /// The live outfit is kept.
    pub fn select_gender(&mut self, gender: Option<Gender>) -> Result<()> {
        if !self.options.gender_scoping_enabled {
            return Err(OutfitError::GenderScopingDisabled);
        }
        self.gender = gender;
        self.progression.reset();
        self.rebuild_queue();
        log::debug!("Gender scope set to {gender:?}");
        Ok(())
    }

    /// Jump to a category by index, rebuilding its queue
    pub fn navigate_to_category(&mut self, index: usize) -> Result<Category> {
        let category = self.progression.jump_to(index)?;
        self.rebuild_queue();
        Ok(category)
    }

    /// Empty one outfit slot
    pub fn remove_from_outfit(&mut self, category: Category) -> Option<Item> {
        let removed = self.outfit.clear(category);
        if let Some(item) = &removed {
            log::debug!("Removed '{}' from {category}", item.id);
        }
        removed
    }

    /// Back to the first category with a full queue and an empty outfit
    pub fn reset(&mut self) {
        self.progression.reset();
        self.outfit = Outfit::new();
        self.rebuild_queue();
        log::debug!("Session reset");
    }

    pub fn save_outfit(&mut self, name: &str) -> Result<()> {
        self.archive.save(name, &self.outfit)
    }

    /// Replace the live outfit with a saved one
    pub fn load_outfit(&mut self, index: usize) -> Result<&Outfit> {
        self.outfit = self.archive.load(index)?;
        Ok(&self.outfit)
    }

    pub fn delete_outfit(&mut self, index: usize) -> Result<SavedOutfit> {
        self.archive.delete(index)
    }

    pub fn delete_outfits(&mut self, indices: &[usize]) -> Result<Vec<SavedOutfit>> {
        self.archive.delete_many(indices)
    }

    pub fn current_category(&self) -> Category {
        self.progression.current()
    }

    pub fn category_index(&self) -> usize {
        self.progression.index()
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.queue.head()
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn outfit(&self) -> &Outfit {
        &self.outfit
    }

    pub fn archive(&self) -> &[SavedOutfit] {
        self.archive.list()
    }

    pub fn total(&self) -> f64 {
        self.outfit.total()
    }
}
