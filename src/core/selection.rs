//! Parsing of 1-based positions typed on the command line.
//!
//! Lists shown to the user are numbered from 1. [`parse_position`] turns a
//! single number into a 0-based engine index; [`parse_positions`] accepts
//! the same mixed formats for bulk deletes.
//!
//! # Supported Formats
//! - **Single**: `2`
//! - **Lists**: `1 3` or `1,3`
//! - **Ranges**: `2-4`
//!
//! Duplicates collapse and results come back sorted. Bounds are checked
//! against the list length, so a stale number fails before anything changes.

use crate::core::error::{OutfitError, Result};
use std::collections::BTreeSet;

fn parse_number(token: &str) -> Result<usize> {
    let value: usize = token
        .trim()
        .parse()
        .map_err(|_| OutfitError::invalid_position(token))?;
    if value == 0 {
        return Err(OutfitError::invalid_position(token));
    }
    Ok(value)
}

fn check_bounds(position: usize, len: usize) -> Result<usize> {
    if position > len {
        return Err(OutfitError::index_out_of_range(position - 1, len));
    }
    Ok(position - 1)
}

/// Convert one 1-based position into a 0-based index
pub fn parse_position(input: &str, len: usize) -> Result<usize> {
    check_bounds(parse_number(input)?, len)
}

/// Convert position arguments such as `["1", "3-4,6"]` into sorted 0-based indices
pub fn parse_positions(args: &[String], len: usize) -> Result<Vec<usize>> {
    let joined = args.join(" ");
    let mut positions = BTreeSet::new();

    for token in joined.split([' ', ',']).filter(|t| !t.trim().is_empty()) {
        match token.split_once('-') {
            Some((start, end)) => {
                let start = parse_number(start)?;
                let end = parse_number(end)?;
                if start > end {
                    return Err(OutfitError::invalid_position(token));
                }
                positions.extend(start..=end);
            }
            None => {
                positions.insert(parse_number(token)?);
            }
        }
    }

    if positions.is_empty() {
        return Err(OutfitError::invalid_position(joined));
    }

    positions
        .into_iter()
        .map(|position| check_bounds(position, len))
        .collect()
}
