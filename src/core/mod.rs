//! Core functionality for outfit-builder.
//!
//! This module holds the swipe engine (catalog, queue, progression, outfit,
//! archive, session) and the plumbing the command line needs around it.

pub mod archive;
pub mod catalog;
pub mod category;
pub mod colors;
pub mod command_init;
pub mod config;
pub mod dirs;
pub mod error;
pub mod item;
pub mod outfit;
pub mod output;
pub mod progression;
pub mod queue;
pub mod selection;
pub mod session;
pub mod state;
pub mod templates;

// === Error handling ===
pub use error::{OutfitError, Result, ValidationError};

// === Catalog ===
// Read-only items and the fixed category order
pub use catalog::Catalog;
pub use category::{Category, Gender};
pub use item::Item;

// === Swipe engine ===
pub use outfit::Outfit;
pub use progression::{Advance, Progression};
pub use queue::Queue;
pub use session::{Direction, Session, SessionOptions, SwipeOutcome};

// === Persistence ===
// Saved outfits and the session snapshot cached between commands
pub use archive::{Archive, ArchiveStore, JsonFileStore, MemoryStore, SavedOutfit, ARCHIVE_KEY};
pub use state::SessionState;

// === Command initialization ===
pub use command_init::{CommandContext, CommandInit, SettingsContext};
pub use config::AppConfig;
pub use dirs::AppDirs;

// === UI templates ===
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};

// === Output formatting ===
pub use output::{print_error, print_hint, print_info, print_section_header, print_success};
