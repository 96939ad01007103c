use warrs::{
    Backdrop, Card, CardAsset, DealOutcome, DealResult, Game, Header, RoundState, ScoreView,
    TableOptions, TableView,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    options: TableOptions,
    assets: Vec<String>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(seed as u64),
            options: TableOptions::default(),
            assets: Vec::new(),
        }
    }

    /// Declares which image assets the page can show.
    pub fn set_assets(&mut self, names: Vec<String>) {
        self.assets = names;
    }

    pub fn deal(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.deal();
        to_js_value(&JsDealResult::from(result))
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Resumes from a previously shown state, e.g. after a page reload.
    pub fn restore(
        &mut self,
        player_card: u8,
        opponent_card: u8,
        player_score: u32,
        opponent_score: u32,
    ) -> Result<(), JsValue> {
        let state = RoundState {
            player_card: Card::new(player_card).map_err(js_err)?,
            opponent_card: Card::new(opponent_card).map_err(js_err)?,
            player_score,
            opponent_score,
        };
        let source = self.game.source().clone();
        self.game = Game::from_state(state, source);
        Ok(())
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.state();
        let view = TableView::render(&state, &self.options, &self.assets);

        let snapshot = Snapshot {
            player_card: state.player_card.rank(),
            opponent_card: state.opponent_card.rank(),
            rounds_played: self.game.rounds_played(),
            view: JsTableView::from(view),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    player_card: u8,
    opponent_card: u8,
    rounds_played: u32,
    view: JsTableView,
}

#[derive(Serialize)]
struct JsDealResult {
    player_card: JsCard,
    opponent_card: JsCard,
    outcome: &'static str,
}

impl From<DealResult> for JsDealResult {
    fn from(result: DealResult) -> Self {
        Self {
            player_card: card_to_js(result.player_card),
            opponent_card: card_to_js(result.opponent_card),
            outcome: outcome_to_str(result.outcome),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    rank: u8,
    label: String,
}

#[derive(Serialize)]
struct JsCardAsset {
    kind: &'static str,
    name: String,
}

impl From<CardAsset> for JsCardAsset {
    fn from(asset: CardAsset) -> Self {
        let kind = match &asset {
            CardAsset::Face(_) => "face",
            CardAsset::Back(_) => "back",
            CardAsset::Placeholder { .. } => "placeholder",
        };
        Self {
            kind,
            name: asset.name().to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsScore {
    label: String,
    score: u32,
}

impl From<ScoreView> for JsScore {
    fn from(score: ScoreView) -> Self {
        Self {
            label: score.label,
            score: score.score,
        }
    }
}

#[derive(Serialize)]
struct JsTableView {
    background: Option<String>,
    logo: Option<String>,
    title: Option<String>,
    player_card: JsCardAsset,
    opponent_card: JsCardAsset,
    player_score: JsScore,
    opponent_score: JsScore,
    deal_label: &'static str,
    reset_label: &'static str,
}

impl From<TableView> for JsTableView {
    fn from(view: TableView) -> Self {
        let background = match view.backdrop {
            Backdrop::Image(name) => Some(name),
            Backdrop::Color => None,
        };
        let (logo, title) = match view.header {
            Header::Logo(name) => (Some(name), None),
            Header::Title(title) => (None, Some(title)),
        };

        Self {
            background,
            logo,
            title,
            player_card: JsCardAsset::from(view.player_card),
            opponent_card: JsCardAsset::from(view.opponent_card),
            player_score: JsScore::from(view.player_score),
            opponent_score: JsScore::from(view.opponent_score),
            deal_label: view.deal_label,
            reset_label: view.reset_label,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        rank: card.rank(),
        label: card.to_string(),
    }
}

fn outcome_to_str(outcome: DealOutcome) -> &'static str {
    match outcome {
        DealOutcome::PlayerWins => "PlayerWins",
        DealOutcome::OpponentWins => "OpponentWins",
        DealOutcome::Tie => "Tie",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
