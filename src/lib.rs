//! Rookie-Chess: a small chess opponent.
//!
//! The engine picks moves with a depth-bounded minimax search using
//! alpha-beta pruning, scored by a static material and placement evaluator.
//! Chess rules live behind the [`rules::Rules`] trait; [`position::Game`]
//! implements it on top of `shakmaty`.
//!
//! ## Modules
//!
//! - [`constants`] - Evaluation tables, search bounds, difficulty depths
//! - [`rules`] - The interface the engine needs from a rules implementation
//! - [`position`] - Chess game with a move history stack
//! - [`eval`] - Static position evaluation
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`difficulty`] - Difficulty levels and their search depths
//! - [`selector`] - Root move choice and the computer player
//! - [`protocol`] - Text command loop for playing a game
//!
//! ## Example
//!
//! ```
//! use rookie_chess::difficulty::Difficulty;
//! use rookie_chess::position::Game;
//! use rookie_chess::rules::Rules;
//! use rookie_chess::selector::Opponent;
//!
//! let mut game = Game::new();
//! let e4 = game.parse_move("e4").unwrap();
//! game.apply_move(&e4).unwrap();
//!
//! let mut opponent = Opponent::with_seed(Difficulty::Easy, 1);
//! let reply = opponent.choose(&mut game).unwrap().unwrap();
//! println!("Black plays {}", game.san(&reply.mv));
//! ```

pub mod constants;
pub mod difficulty;
pub mod eval;
pub mod position;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod selector;
