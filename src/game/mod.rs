//! Game engine and state management.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::source::{CardSource, UniformSource};
use crate::state::RoundState;

mod round;

/// A War game engine that deals cards and keeps score.
///
/// The game owns the [`RoundState`] and the [`CardSource`] it draws from.
/// By default the source is a [`UniformSource`] over a seeded `ChaCha8Rng`;
/// use [`Game::with_source`] to plug in anything else.
#[derive(Debug, Clone)]
pub struct Game<S = UniformSource<ChaCha8Rng>> {
    /// Current cards and scores.
    state: RoundState,
    /// Deals since the last reset.
    rounds_played: u32,
    /// Where cards come from.
    source: S,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, RoundState};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.state(), RoundState::INITIAL);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_source(UniformSource::new(ChaCha8Rng::seed_from_u64(seed)))
    }
}

impl<S: CardSource> Game<S> {
    /// Creates a new game in the initial state that draws from `source`.
    #[must_use]
    pub const fn with_source(source: S) -> Self {
        Self {
            state: RoundState::INITIAL,
            rounds_played: 0,
            source,
        }
    }

    /// Resumes a game from a known state.
    ///
    /// The round counter starts at zero; it only counts deals made by this
    /// engine.
    #[must_use]
    pub fn from_state(state: RoundState, source: S) -> Self {
        debug!(
            "resuming at {}-{} (score {}-{})",
            state.player_card, state.opponent_card, state.player_score, state.opponent_score
        );
        Self {
            state,
            rounds_played: 0,
            source,
        }
    }

    /// Returns a copy of the current state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's current card.
    pub const fn player_card(&self) -> Card {
        self.state.player_card
    }

    /// Returns the opponent's current card.
    pub const fn opponent_card(&self) -> Card {
        self.state.opponent_card
    }

    /// Returns the player's score.
    pub const fn player_score(&self) -> u32 {
        self.state.player_score
    }

    /// Returns the opponent's score.
    pub const fn opponent_score(&self) -> u32 {
        self.state.opponent_score
    }

    /// Returns the number of deals since the game started or was last reset.
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the card source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the game and returns its card source.
    pub fn into_source(self) -> S {
        self.source
    }
}
