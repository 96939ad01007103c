//! A War card game round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals two cards per turn, compares
//! them, and keeps a running score for the player and the opponent. The
//! presentation side lives in [`view`]: [`TableView::render`] turns a
//! [`RoundState`] into a view tree without touching the engine.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, RoundState};
//!
//! let mut game = Game::new(42);
//! let result = game.deal();
//! assert!((2..=14).contains(&result.player_card.rank()));
//!
//! game.reset();
//! assert_eq!(game.state(), RoundState::INITIAL);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod asset;
pub mod card;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod source;
pub mod state;
pub mod view;

// Re-export main types
pub use asset::{AssetCatalog, CardAsset, NoAssets};
pub use card::{Card, RANK_COUNT};
pub use error::{CardError, SourceError};
pub use game::Game;
pub use options::TableOptions;
pub use result::{DealOutcome, DealResult};
pub use source::{CardSource, ScriptedSource, UniformSource};
pub use state::RoundState;
pub use view::{Backdrop, Header, ScoreView, TableView};
