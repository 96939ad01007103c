//! Card sources the engine draws from.
//!
//! War as played here has no deck: every draw is an independent sample over
//! the thirteen ranks. [`UniformSource`] does that with any [`RngCore`];
//! [`ScriptedSource`] replays a fixed sequence for tests and demos.

use alloc::vec::Vec;

use log::trace;
use rand::{Rng, RngCore};

use crate::card::{Card, RANK_COUNT};
use crate::error::SourceError;

/// Something the engine can draw cards from.
pub trait CardSource {
    /// Draws the next card.
    fn draw(&mut self) -> Card;
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    fn draw(&mut self) -> Card {
        (**self).draw()
    }
}

/// Draws each rank with probability 1/13, with replacement.
#[derive(Debug, Clone)]
pub struct UniformSource<R> {
    rng: R,
}

impl<R: RngCore> UniformSource<R> {
    /// Wraps a random number generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> CardSource for UniformSource<R> {
    fn draw(&mut self) -> Card {
        Card::ALL[self.rng.random_range(0..RANK_COUNT)]
    }
}

/// Replays a fixed list of cards, starting over once it runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSource {
    cards: Vec<Card>,
    next: usize,
}

impl ScriptedSource {
    /// Creates a source that yields `cards` in order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Empty`] if `cards` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, CardSource, ScriptedSource};
    ///
    /// let mut source = ScriptedSource::new([Card::HIGHEST, Card::LOWEST]).unwrap();
    /// assert_eq!(source.draw(), Card::HIGHEST);
    /// assert_eq!(source.draw(), Card::LOWEST);
    /// assert_eq!(source.draw(), Card::HIGHEST);
    /// ```
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self, SourceError> {
        let cards: Vec<Card> = cards.into_iter().collect();
        if cards.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(Self { cards, next: 0 })
    }

    /// Number of cards drawn before the sequence repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`; an empty script is rejected at construction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl CardSource for ScriptedSource {
    fn draw(&mut self) -> Card {
        let card = self.cards[self.next];
        self.next += 1;
        if self.next == self.cards.len() {
            trace!("scripted source wrapped after {} cards", self.cards.len());
            self.next = 0;
        }
        card
    }
}
