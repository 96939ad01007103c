//! Deal result types.

use crate::card::Card;

/// Who took the point on a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealOutcome {
    /// Player's card was higher.
    PlayerWins,
    /// Opponent's card was higher.
    OpponentWins,
    /// Both cards had the same rank; nobody scores.
    Tie,
}

impl DealOutcome {
    /// Compares two cards.
    #[must_use]
    pub fn compare(player: Card, opponent: Card) -> Self {
        match player.cmp(&opponent) {
            core::cmp::Ordering::Greater => Self::PlayerWins,
            core::cmp::Ordering::Less => Self::OpponentWins,
            core::cmp::Ordering::Equal => Self::Tie,
        }
    }
}

/// Result of a single deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealResult {
    /// The card drawn for the player.
    pub player_card: Card,
    /// The card drawn for the opponent.
    pub opponent_card: Card,
    /// Who scored.
    pub outcome: DealOutcome,
}
