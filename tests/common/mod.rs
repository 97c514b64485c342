//! Shared test utilities for outfit-builder integration tests
//!
//! Every test gets its own temporary home directory passed through `--home`,
//! so config, saved outfits and the session never leak between tests.

pub mod assertions;
pub mod fixtures;
pub mod home;
