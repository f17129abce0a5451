//! Integration tests for rookie-chess
//!
//! These play the engine against real chess positions through the public API:
//! the move selector at each difficulty, terminal positions, and the
//! guarantee that searching never disturbs the game it searched.

use fastrand::Rng;

use rookie_chess::difficulty::Difficulty;
use rookie_chess::eval::leaf_value;
use rookie_chess::position::Game;
use rookie_chess::rules::{GameStatus, Rules, RulesError, Side};
use rookie_chess::selector::{best_move, decide, Opponent};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Fool's mate: White is checkmated.
const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

/// White king boxed in by a queen, not in check: stalemate.
const STALEMATE: &str = "k7/8/8/8/8/8/5q2/7K w - - 0 1";

/// White's only legal move is a2-a3.
const ONE_MOVE: &str = "k7/8/8/8/p7/8/P4q2/7K w - - 0 1";

const LEVELS: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

/// Play a sequence of moves given in SAN or coordinate notation.
fn setup_game(moves: &[&str]) -> Game {
    let mut game = Game::new();
    for text in moves {
        let mv = game
            .parse_move(text)
            .unwrap_or_else(|err| panic!("bad setup move {text}: {err}"));
        game.apply_move(&mv).unwrap();
    }
    game
}

/// One-ply leaf value of every legal move, in rules-engine order.
fn one_ply_values(game: &mut Game) -> Vec<i32> {
    game.legal_moves(None)
        .iter()
        .map(|mv| {
            game.apply_move(mv).unwrap();
            let value = leaf_value(game);
            game.undo_move().unwrap();
            value
        })
        .collect()
}

// =============================================================================
// Terminal positions
// =============================================================================

#[test]
fn test_checkmate_returns_none() {
    let mut game = Game::from_fen(FOOLS_MATE).unwrap();
    for level in LEVELS {
        let mut rng = Rng::with_seed(11);
        assert_eq!(best_move(&mut game, level, &mut rng).unwrap(), None);
    }
    assert_eq!(game.status(), GameStatus::Checkmate);
}

#[test]
fn test_stalemate_returns_none() {
    let mut game = Game::from_fen(STALEMATE).unwrap();
    let mut rng = Rng::with_seed(11);
    assert_eq!(best_move(&mut game, Difficulty::Medium, &mut rng).unwrap(), None);
    assert_eq!(game.status(), GameStatus::Stalemate);
}

#[test]
fn test_fools_mate_reached_by_play() {
    let game = setup_game(&["f3", "e5", "g4", "Qh4"]);
    assert_eq!(game.fen(), FOOLS_MATE);
    assert!(game.legal_moves(None).is_empty());
}

// =============================================================================
// Move selection scenarios
// =============================================================================

#[test]
fn test_single_legal_move_at_every_level() {
    let mut game = Game::from_fen(ONE_MOVE).unwrap();
    let moves = game.legal_moves(None);
    assert_eq!(moves.len(), 1);
    assert_eq!(game.uci(&moves[0]), "a2a3");

    for level in LEVELS {
        for seed in 0..3 {
            let mut rng = Rng::with_seed(seed);
            let chosen = best_move(&mut game, level, &mut rng).unwrap().unwrap();
            assert_eq!(game.uci(&chosen), "a2a3", "level {level} seed {seed}");
        }
    }
}

#[test]
fn test_easy_start_picks_a_best_one_ply_move() {
    let mut game = Game::new();
    let best = *one_ply_values(&mut game).iter().max().unwrap();

    for seed in 0..10 {
        let mut rng = Rng::with_seed(seed);
        let chosen = best_move(&mut game, Difficulty::Easy, &mut rng)
            .unwrap()
            .unwrap();
        game.apply_move(&chosen).unwrap();
        assert_eq!(leaf_value(&game), best, "seed {seed} chose {}", game.fen());
        game.undo_move().unwrap();
    }
}

#[test]
fn test_shuffle_gives_variety_among_ties() {
    // Many first moves tie at one ply, so different seeds should not all agree.
    let mut game = Game::new();
    let mut seen = std::collections::HashSet::new();
    for seed in 0..40 {
        let mut rng = Rng::with_seed(seed);
        let chosen = best_move(&mut game, Difficulty::Easy, &mut rng)
            .unwrap()
            .unwrap();
        seen.insert(game.uci(&chosen));
    }
    assert!(seen.len() > 1, "expected variety, always got {seen:?}");
}

#[test]
fn test_black_takes_a_hanging_queen() {
    // White queen on d5 can be taken by the e6 pawn; nothing recaptures.
    let mut game = Game::from_fen("4k3/8/4p3/3Q4/8/8/8/4K3 b - - 0 1").unwrap();
    for level in LEVELS {
        let mut rng = Rng::with_seed(5);
        let chosen = best_move(&mut game, level, &mut rng).unwrap().unwrap();
        assert_eq!(game.san(&chosen), "exd5", "level {level}");
    }
}

#[test]
fn test_none_only_without_legal_moves() {
    let positions = [
        Game::new().fen(),
        FOOLS_MATE.to_string(),
        STALEMATE.to_string(),
        ONE_MOVE.to_string(),
        "4k3/8/8/8/8/8/8/3QK3 b - - 0 1".to_string(),
    ];
    for fen in positions {
        let mut game = Game::from_fen(&fen).unwrap();
        let has_moves = !game.legal_moves(None).is_empty();
        let mut rng = Rng::with_seed(1);
        let chosen = best_move(&mut game, Difficulty::Medium, &mut rng).unwrap();
        assert_eq!(chosen.is_some(), has_moves, "{fen}");
    }
}

#[test]
fn test_selection_leaves_game_untouched() {
    let mut game = setup_game(&["e4", "c5", "Nf3", "d6"]);
    let before = game.fen();
    let ply = game.ply();
    for level in LEVELS {
        let mut rng = Rng::with_seed(9);
        decide(&mut game, level, &mut rng).unwrap();
        assert_eq!(game.fen(), before);
        assert_eq!(game.ply(), ply);
    }
}

#[test]
fn test_chosen_move_is_legal() {
    let mut game = setup_game(&["d4", "Nf6", "c4"]);
    let legal = game.legal_moves(None);
    let mut opponent = Opponent::with_seed(Difficulty::Hard, 2024);
    let decision = opponent.choose(&mut game).unwrap().unwrap();
    assert!(legal.contains(&decision.mv));
    assert_eq!(decision.candidates, legal.len());
    assert!(decision.stats.nodes > 0);
}

// =============================================================================
// Playing a game
// =============================================================================

#[test]
fn test_self_play_keeps_history_consistent() {
    let mut game = Game::new();
    let mut white = Opponent::with_seed(Difficulty::Easy, 1);
    let mut black = Opponent::with_seed(Difficulty::Medium, 2);

    let mut played = 0;
    while played < 12 && !game.status().is_over() {
        let player = match game.side_to_move() {
            Side::White => &mut white,
            Side::Black => &mut black,
        };
        let decision = player.choose(&mut game).unwrap().unwrap();
        game.apply_move(&decision.mv).unwrap();
        played += 1;
    }
    assert_eq!(game.ply(), played);

    for _ in 0..played {
        game.undo_move().unwrap();
    }
    assert_eq!(game.fen(), Game::new().fen());
    assert_eq!(game.undo_move(), Err(RulesError::NothingToUndo));
}

#[test]
fn test_seeded_opponents_agree() {
    let mut game = setup_game(&["e4", "e5"]);
    for seed in [0, 1, 99] {
        let mut a = Opponent::with_seed(Difficulty::Medium, seed);
        let mut b = Opponent::with_seed(Difficulty::Medium, seed);
        let x = a.choose(&mut game).unwrap().unwrap();
        let y = b.choose(&mut game).unwrap().unwrap();
        assert_eq!(x.mv, y.mv);
    }
}
