//! Round state.

use crate::card::Card;
use crate::result::{DealOutcome, DealResult};

/// The cards on the table and the running scores.
///
/// This is a plain value: [`Game`](crate::Game) owns one and mutates it, but
/// the transition itself lives here so it can be driven without a card
/// source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundState {
    /// The player's current card.
    pub player_card: Card,
    /// The opponent's current card.
    pub opponent_card: Card,
    /// Points won by the player.
    pub player_score: u32,
    /// Points won by the opponent.
    pub opponent_score: u32,
}

impl RoundState {
    /// State at the start of a session and after a reset: two twos, no points.
    pub const INITIAL: Self = Self {
        player_card: Card::LOWEST,
        opponent_card: Card::LOWEST,
        player_score: 0,
        opponent_score: 0,
    };

    /// Puts two freshly drawn cards on the table and scores them.
    ///
    /// The higher card earns its side one point. Ties score nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, DealOutcome, RoundState};
    ///
    /// let mut state = RoundState::INITIAL;
    /// let result = state.apply(Card::HIGHEST, Card::LOWEST);
    /// assert_eq!(result.outcome, DealOutcome::PlayerWins);
    /// assert_eq!((state.player_score, state.opponent_score), (1, 0));
    /// ```
    pub fn apply(&mut self, player_card: Card, opponent_card: Card) -> DealResult {
        self.player_card = player_card;
        self.opponent_card = opponent_card;

        let outcome = DealOutcome::compare(player_card, opponent_card);
        match outcome {
            DealOutcome::PlayerWins => {
                self.player_score = self.player_score.saturating_add(1);
            }
            DealOutcome::OpponentWins => {
                self.opponent_score = self.opponent_score.saturating_add(1);
            }
            DealOutcome::Tie => {}
        }

        DealResult {
            player_card,
            opponent_card,
            outcome,
        }
    }

    /// Returns to [`RoundState::INITIAL`].
    pub const fn reset(&mut self) {
        *self = Self::INITIAL;
    }

    /// Whether this is the initial state.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::INITIAL
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::INITIAL
    }
}
