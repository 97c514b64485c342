//! Outfit Builder - assemble outfits by swiping through clothing items.
//!
//! Items are offered one category at a time (accessories, tops, bottoms,
//! shoes). Accepting an item puts it in the outfit and moves on to the next
//! category; rejecting it sends it to the back of the queue so it can come
//! around again. Finished outfits can be saved under a name, listed, loaded
//! back and deleted.
//!
//! # Public API
//! The engine is re-exported from the [`core`] module:
//! - [`Session`]: the object a front end drives with swipe, save, load,
//!   delete and navigation events
//! - [`Catalog`], [`Item`], [`Category`], [`Gender`]: the read-only item data
//! - [`Queue`], [`Progression`], [`Outfit`]: the pieces a session is made of
//! - [`Archive`] and [`ArchiveStore`]: saved outfits over injected storage
//! - [`OutfitError`] and [`Result`]: error handling
//!
//! # Example
//! ```
//! use outfit_builder::{Archive, Catalog, Direction, MemoryStore, Session, SessionOptions};
//!
//! let catalog = Catalog::builtin();
//! let archive = Archive::open(MemoryStore::new());
//! let mut session = Session::init(&catalog, archive, SessionOptions::default());
//!
//! session.swipe(Direction::Reject)?;
//! session.swipe(Direction::Accept)?;
//! session.save_outfit("Weekend")?;
//! assert_eq!(session.archive().len(), 1);
//! # Ok::<(), outfit_builder::OutfitError>(())
//! ```

pub mod commands;
pub mod core;

pub use core::{
    Advance,
    AppConfig,
    Archive,
    ArchiveStore,
    Catalog,
    Category,
    Direction,
    Gender,
    Item,
    JsonFileStore,
    MemoryStore,
    Outfit,
    OutfitError,
    Progression,
    Queue,
    Result,
    SavedOutfit,
    Session,
    SessionOptions,
    SessionState,
    SwipeOutcome,
    ValidationError,
};
