//! Card ranks.

use core::fmt;

use crate::error::CardError;

/// Number of distinct ranks a card can take.
pub const RANK_COUNT: usize = 13;

/// A card value. There are no suits in War, only ranks.
///
/// Ranks run from 2 to 14, where 11 = Jack, 12 = Queen, 13 = King and
/// 14 = Ace. A `Card` always holds a rank in that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    /// Lowest card (a two).
    pub const LOWEST: Self = Self(2);
    /// Highest card (an ace).
    pub const HIGHEST: Self = Self(14);

    /// Every rank, lowest first.
    pub const ALL: [Self; RANK_COUNT] = [
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
        Self(11),
        Self(12),
        Self(13),
        Self(14),
    ];

    /// Creates a card from its rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::OutOfRange`] if `rank` is not in `2..=14`.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, CardError};
    ///
    /// assert_eq!(Card::new(14).map(|c| c.rank()), Ok(14));
    /// assert_eq!(Card::new(1), Err(CardError::OutOfRange(1)));
    /// ```
    pub const fn new(rank: u8) -> Result<Self, CardError> {
        if rank < Self::LOWEST.0 || rank > Self::HIGHEST.0 {
            return Err(CardError::OutOfRange(rank));
        }
        Ok(Self(rank))
    }

    /// Returns the rank (2..=14).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Whether this card is a Jack, Queen, King or Ace.
    #[must_use]
    pub const fn is_face(self) -> bool {
        self.0 > 10
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Self::new(rank)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            11 => f.write_str("J"),
            12 => f.write_str("Q"),
            13 => f.write_str("K"),
            14 => f.write_str("A"),
            rank => write!(f, "{rank}"),
        }
    }
}
