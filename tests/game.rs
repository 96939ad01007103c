//! Game integration tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warrs::{
    Card, CardError, CardSource, DealOutcome, Game, RANK_COUNT, RoundState, ScriptedSource,
    SourceError, UniformSource,
};

fn card(rank: u8) -> Card {
    Card::new(rank).unwrap()
}

fn scripted(ranks: &[u8]) -> ScriptedSource {
    ScriptedSource::new(ranks.iter().map(|&rank| card(rank))).unwrap()
}

fn tuple(state: RoundState) -> (u8, u8, u32, u32) {
    (
        state.player_card.rank(),
        state.opponent_card.rank(),
        state.player_score,
        state.opponent_score,
    )
}

#[test]
fn card_rejects_out_of_range_ranks() {
    for rank in [0, 1, 15, u8::MAX] {
        assert_eq!(Card::new(rank).unwrap_err(), CardError::OutOfRange(rank));
        assert_eq!(Card::try_from(rank), Err(CardError::OutOfRange(rank)));
    }

    for rank in 2..=14 {
        assert_eq!(Card::new(rank).unwrap().rank(), rank);
    }

    assert_eq!(Card::ALL.len(), RANK_COUNT);
    assert_eq!(Card::ALL[0], Card::LOWEST);
    assert_eq!(Card::ALL[RANK_COUNT - 1], Card::HIGHEST);
}

#[test]
fn card_display_uses_face_letters() {
    assert_eq!(card(2).to_string(), "2");
    assert_eq!(card(10).to_string(), "10");
    assert_eq!(card(11).to_string(), "J");
    assert_eq!(card(12).to_string(), "Q");
    assert_eq!(card(13).to_string(), "K");
    assert_eq!(card(14).to_string(), "A");
    assert!(!card(10).is_face());
    assert!(card(11).is_face());
}

#[test]
fn new_game_starts_at_initial_state() {
    let game = Game::new(1);
    assert_eq!(tuple(game.state()), (2, 2, 0, 0));
    assert!(game.state().is_initial());
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(RoundState::default(), RoundState::INITIAL);
}

#[test]
fn deal_win_tie_reset_scenario() {
    let mut game = Game::with_source(scripted(&[14, 2, 5, 5]));

    let result = game.deal();
    assert_eq!(result.player_card, card(14));
    assert_eq!(result.opponent_card, card(2));
    assert_eq!(result.outcome, DealOutcome::PlayerWins);
    assert_eq!(tuple(game.state()), (14, 2, 1, 0));

    let result = game.deal();
    assert_eq!(result.outcome, DealOutcome::Tie);
    assert_eq!(tuple(game.state()), (5, 5, 1, 0));

    game.reset();
    assert_eq!(tuple(game.state()), (2, 2, 0, 0));
}

#[test]
fn opponent_scores_on_higher_card() {
    let mut game = Game::with_source(scripted(&[3, 13]));

    let result = game.deal();
    assert_eq!(result.outcome, DealOutcome::OpponentWins);
    assert_eq!(game.player_card(), card(3));
    assert_eq!(game.opponent_card(), card(13));
    assert_eq!(game.player_score(), 0);
    assert_eq!(game.opponent_score(), 1);
}

#[test]
fn tie_never_awards_a_point() {
    for rank in 2..=14 {
        let mut game = Game::with_source(scripted(&[rank, rank]));
        let result = game.deal();
        assert_eq!(result.outcome, DealOutcome::Tie);
        assert_eq!(game.player_score(), 0);
        assert_eq!(game.opponent_score(), 0);
    }
}

#[test]
fn reset_is_idempotent() {
    let mut game = Game::new(7);
    for _ in 0..10 {
        game.deal();
    }
    assert_eq!(game.rounds_played(), 10);

    game.reset();
    let once = game.state();
    game.reset();
    assert_eq!(game.state(), once);
    assert_eq!(once, RoundState::INITIAL);
    assert_eq!(game.rounds_played(), 0);
}

#[test]
fn every_deal_changes_at_most_one_score() {
    let mut game = Game::new(2024);

    for _ in 0..5_000 {
        let before = game.state();
        let result = game.deal();
        let after = game.state();

        assert!((2..=14).contains(&after.player_card.rank()));
        assert!((2..=14).contains(&after.opponent_card.rank()));
        assert_eq!(after.player_card, result.player_card);
        assert_eq!(after.opponent_card, result.opponent_card);

        let player_delta = after.player_score - before.player_score;
        let opponent_delta = after.opponent_score - before.opponent_score;
        match result.outcome {
            DealOutcome::PlayerWins => {
                assert!(result.player_card > result.opponent_card);
                assert_eq!((player_delta, opponent_delta), (1, 0));
            }
            DealOutcome::OpponentWins => {
                assert!(result.opponent_card > result.player_card);
                assert_eq!((player_delta, opponent_delta), (0, 1));
            }
            DealOutcome::Tie => {
                assert_eq!(result.player_card, result.opponent_card);
                assert_eq!((player_delta, opponent_delta), (0, 0));
            }
        }
    }

    assert_eq!(game.rounds_played(), 5_000);
}

#[test]
fn ranks_are_uniform_for_both_sides() {
    const DEALS: usize = 26_000;
    // Expected 2000 per rank, standard deviation about 44.
    const TOLERANCE: usize = 250;

    let mut game = Game::new(0x5eed);
    let mut player = [0_usize; RANK_COUNT];
    let mut opponent = [0_usize; RANK_COUNT];
    let mut ties = 0_usize;

    for _ in 0..DEALS {
        let result = game.deal();
        player[usize::from(result.player_card.rank() - 2)] += 1;
        opponent[usize::from(result.opponent_card.rank() - 2)] += 1;
        if result.outcome == DealOutcome::Tie {
            ties += 1;
        }
    }

    let expected = DEALS / RANK_COUNT;
    for counts in [player, opponent] {
        for count in counts {
            assert!(
                count.abs_diff(expected) < TOLERANCE,
                "count {count} too far from {expected}"
            );
        }
    }

    // Independent draws tie with probability 1/13.
    assert!(ties.abs_diff(expected) < TOLERANCE, "ties {ties}");
}

#[test]
fn same_seed_deals_same_sequence() {
    let mut first = Game::new(99);
    let mut second = Game::new(99);
    let mut other = Game::new(100);

    let a: Vec<_> = (0..50).map(|_| first.deal()).collect();
    let b: Vec<_> = (0..50).map(|_| second.deal()).collect();
    let c: Vec<_> = (0..50).map(|_| other.deal()).collect();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(first.state(), second.state());
}

#[test]
fn reset_does_not_rewind_the_source() {
    let mut game = Game::with_source(scripted(&[4, 9, 12, 6]));
    game.deal();
    game.reset();

    let result = game.deal();
    assert_eq!((result.player_card, result.opponent_card), (card(12), card(6)));
    assert_eq!(tuple(game.state()), (12, 6, 1, 0));
}

#[test]
fn scripted_source_wraps_and_rejects_empty() {
    assert_eq!(
        ScriptedSource::new(Vec::new()).unwrap_err(),
        SourceError::Empty
    );

    let mut source = scripted(&[8, 9, 10]);
    assert_eq!(source.len(), 3);
    let drawn: Vec<u8> = (0..7).map(|_| source.draw().rank()).collect();
    assert_eq!(drawn, [8, 9, 10, 8, 9, 10, 8]);
}

#[test]
fn game_borrows_a_source() {
    let mut source = scripted(&[6, 7]);
    {
        let mut game = Game::with_source(&mut source);
        assert_eq!(game.deal().outcome, DealOutcome::OpponentWins);
    }
    // The borrowed source advanced and wrapped.
    assert_eq!(source.draw(), card(6));
}

struct Alternating {
    high: bool,
}

impl CardSource for Alternating {
    fn draw(&mut self) -> Card {
        self.high = !self.high;
        if self.high { Card::HIGHEST } else { Card::LOWEST }
    }
}

#[test]
fn custom_source_drives_the_engine() {
    let mut game = Game::with_source(Alternating { high: false });
    for _ in 0..4 {
        assert_eq!(game.deal().outcome, DealOutcome::PlayerWins);
    }
    assert_eq!(tuple(game.state()), (14, 2, 4, 0));
}

#[test]
fn uniform_source_accepts_any_rng() {
    let mut source = UniformSource::new(ChaCha8Rng::seed_from_u64(3));
    let mut seen = [false; RANK_COUNT];
    for _ in 0..1_000 {
        seen[usize::from(source.draw().rank() - 2)] = true;
    }
    assert!(seen.iter().all(|&hit| hit));
}

#[test]
fn from_state_resumes_scoring() {
    let state = RoundState {
        player_card: card(9),
        opponent_card: card(11),
        player_score: 4,
        opponent_score: 6,
    };
    let mut game = Game::from_state(state, scripted(&[13, 12]));
    assert_eq!(game.state(), state);
    assert_eq!(game.rounds_played(), 0);

    game.deal();
    assert_eq!(tuple(game.state()), (13, 12, 5, 6));
    assert_eq!(game.rounds_played(), 1);
}

#[test]
fn scores_saturate_instead_of_wrapping() {
    let mut state = RoundState {
        player_score: u32::MAX,
        ..RoundState::INITIAL
    };
    state.apply(card(14), card(2));
    assert_eq!(state.player_score, u32::MAX);
    assert_eq!(state.opponent_score, 0);
}
