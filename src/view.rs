//! The table as a front-end should draw it.
//!
//! [`TableView::render`] is a pure function of the round state. Front-ends
//! call it after every deal or reset and draw what comes back; none of the
//! game rules live here.

use alloc::string::String;

use crate::asset::{AssetCatalog, CardAsset};
use crate::options::TableOptions;
use crate::state::RoundState;

/// Label on the deal action.
pub const DEAL_LABEL: &str = "DEAL";
/// Label on the reset action.
pub const RESET_LABEL: &str = "Reset";

/// What goes behind the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backdrop {
    /// A background image.
    Image(String),
    /// No image available; use a plain color.
    Color,
}

/// What goes at the top of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// A logo image.
    Logo(String),
    /// No logo available; show this title text.
    Title(String),
}

/// One side's score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreView {
    /// Who the score belongs to.
    pub label: String,
    /// Points won.
    pub score: u32,
}

/// Everything on screen for one round state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Background.
    pub backdrop: Backdrop,
    /// Logo or title.
    pub header: Header,
    /// The player's card.
    pub player_card: CardAsset,
    /// The opponent's card.
    pub opponent_card: CardAsset,
    /// Player score.
    pub player_score: ScoreView,
    /// Opponent score.
    pub opponent_score: ScoreView,
    /// Label of the deal action.
    pub deal_label: &'static str,
    /// Label of the reset action.
    pub reset_label: &'static str,
}

impl TableView {
    /// Builds the view for `state`.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Backdrop, CardAsset, Header, NoAssets, RoundState, TableOptions, TableView};
    ///
    /// let view = TableView::render(&RoundState::INITIAL, &TableOptions::default(), &NoAssets);
    /// assert_eq!(view.backdrop, Backdrop::Color);
    /// assert_eq!(view.header, Header::Title("WAR".into()));
    /// assert_eq!(view.player_card, CardAsset::Placeholder { label: "card2".into() });
    /// ```
    #[must_use]
    pub fn render<C: AssetCatalog + ?Sized>(
        state: &RoundState,
        options: &TableOptions,
        catalog: &C,
    ) -> Self {
        let backdrop = if catalog.contains(&options.background) {
            Backdrop::Image(options.background.clone())
        } else {
            Backdrop::Color
        };

        let header = if catalog.contains(&options.logo) {
            Header::Logo(options.logo.clone())
        } else {
            Header::Title(options.title.clone())
        };

        Self {
            backdrop,
            header,
            player_card: CardAsset::resolve(state.player_card, options, catalog),
            opponent_card: CardAsset::resolve(state.opponent_card, options, catalog),
            player_score: ScoreView {
                label: options.player_label.clone(),
                score: state.player_score,
            },
            opponent_score: ScoreView {
                label: options.opponent_label.clone(),
                score: state.opponent_score,
            },
            deal_label: DEAL_LABEL,
            reset_label: RESET_LABEL,
        }
    }
}
