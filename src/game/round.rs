use log::debug;

use crate::result::DealResult;
use crate::source::CardSource;

use super::Game;

impl<S: CardSource> Game<S> {
    /// Deals one card to each side and scores the pair.
    ///
    /// The player's card is drawn first, then the opponent's. The higher card
    /// earns its side a point; a tie scores nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, DealOutcome, Game, ScriptedSource};
    ///
    /// let cards = [Card::new(14).unwrap(), Card::new(2).unwrap()];
    /// let mut game = Game::with_source(ScriptedSource::new(cards).unwrap());
    ///
    /// let result = game.deal();
    /// assert_eq!(result.outcome, DealOutcome::PlayerWins);
    /// assert_eq!(game.player_score(), 1);
    /// ```
    pub fn deal(&mut self) -> DealResult {
        let player_card = self.source.draw();
        let opponent_card = self.source.draw();

        let result = self.state.apply(player_card, opponent_card);
        self.rounds_played = self.rounds_played.saturating_add(1);

        debug!(
            "deal {}: {} vs {} -> {:?} (score {}-{})",
            self.rounds_played,
            player_card,
            opponent_card,
            result.outcome,
            self.state.player_score,
            self.state.opponent_score
        );

        result
    }

    /// Puts both twos back on the table and clears the scores.
    ///
    /// The card source is left alone, so a seeded game does not replay its
    /// earlier deals after a reset.
    pub fn reset(&mut self) {
        self.state.reset();
        self.rounds_played = 0;
        debug!("reset");
    }
}
