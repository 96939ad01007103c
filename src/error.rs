//! Error types for the crate's input boundaries.
//!
//! Dealing and resetting never fail; these only show up when raw values are
//! turned into engine types.

use thiserror::Error;

/// Errors that can occur when building a card from a raw rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside `2..=14`.
    #[error("card rank {0} is out of range (expected 2..=14)")]
    OutOfRange(u8),
}

/// Errors that can occur when building a card source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SourceError {
    /// A scripted source was given no cards.
    #[error("scripted source needs at least one card")]
    Empty,
}
