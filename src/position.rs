//! Chess position with a move history, backed by `shakmaty`.
//!
//! [`Game`] is the concrete rules engine the opponent plays against. Positions
//! are immutable `shakmaty::Chess` values; applying a move pushes the previous
//! value onto a history stack and undoing pops it back, so undo is O(1) and
//! always restores the exact earlier position.

use std::fmt;

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Position, Role};

use crate::constants::{FIFTY_MOVE_HALFMOVES, REPETITION_COUNT};
use crate::rules::{GameStatus, Grid, Piece, PieceKind, Rules, RulesError, Side, Square};

/// A game of chess: the current position plus every position before it.
#[derive(Clone, Debug)]
pub struct Game {
    /// Current position
    pos: Chess,
    /// Earlier positions, oldest first
    history: Vec<Chess>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game at the standard starting position.
    pub fn new() -> Self {
        Self {
            pos: Chess::default(),
            history: Vec::new(),
        }
    }

    /// A game starting from the given FEN, with an empty history.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let fen: Fen = fen
            .trim()
            .parse()
            .map_err(|err| RulesError::InvalidFen(format!("{err}")))?;
        let pos: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|err| RulesError::InvalidFen(format!("{err}")))?;
        Ok(Self {
            pos,
            history: Vec::new(),
        })
    }

    /// Side to move.
    pub fn side_to_move(&self) -> Side {
        side_of(self.pos.turn())
    }

    /// Number of moves on the history stack.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Standard algebraic notation of a legal move in the current position.
    pub fn san(&self, mv: &Move) -> String {
        San::from_move(&self.pos, mv).to_string()
    }

    /// Coordinate notation (`e2e4`, `e7e8q`, `e1g1`).
    pub fn uci(&self, mv: &Move) -> String {
        mv.to_uci(CastlingMode::Standard).to_string()
    }

    /// Match text against the legal moves, accepting SAN or coordinate notation.
    ///
    /// Check and annotation suffixes are ignored, and `0-0` is read as `O-O`.
    pub fn parse_move(&self, text: &str) -> Result<Move, RulesError> {
        let cleaned = text
            .trim()
            .trim_end_matches(['+', '#', '!', '?'])
            .replace('0', "O");
        let lower = text.trim().to_ascii_lowercase();

        self.pos
            .legal_moves()
            .into_iter()
            .find(|mv| self.san(mv) == cleaned || self.uci(mv) == lower)
            .ok_or_else(|| RulesError::UnknownMove(text.trim().to_string()))
    }

    /// Take back the computer's reply and the player's move together.
    ///
    /// Returns how many moves were undone (one when only a single move was
    /// on the stack).
    pub fn undo_pair(&mut self) -> Result<usize, RulesError> {
        self.undo_move()?;
        if self.history.is_empty() {
            return Ok(1);
        }
        self.undo_move()?;
        Ok(2)
    }

    /// Whether the current position has occurred [`REPETITION_COUNT`] times.
    fn is_repetition(&self) -> bool {
        if self.history.len() + 1 < REPETITION_COUNT {
            return false;
        }
        let current = repetition_key(&self.pos);
        let seen = self
            .history
            .iter()
            .filter(|earlier| repetition_key(earlier) == current)
            .count();
        seen + 1 >= REPETITION_COUNT
    }
}

impl Rules for Game {
    type Move = Move;

    fn legal_moves(&self, origin: Option<Square>) -> Vec<Move> {
        let origin = origin.map(to_shakmaty_square);
        self.pos
            .legal_moves()
            .into_iter()
            .filter(|mv| origin.is_none() || mv.from() == origin)
            .collect()
    }

    fn apply_move(&mut self, mv: &Move) -> Result<(), RulesError> {
        let next = self
            .pos
            .clone()
            .play(mv)
            .map_err(|_| RulesError::IllegalMove(self.uci(mv)))?;
        let prev = std::mem::replace(&mut self.pos, next);
        self.history.push(prev);
        Ok(())
    }

    fn undo_move(&mut self) -> Result<(), RulesError> {
        self.pos = self.history.pop().ok_or(RulesError::NothingToUndo)?;
        Ok(())
    }

    fn status(&self) -> GameStatus {
        if self.pos.is_checkmate() {
            GameStatus::Checkmate
        } else if self.pos.is_stalemate() {
            GameStatus::Stalemate
        } else if self.pos.is_insufficient_material()
            || self.pos.halfmoves() >= FIFTY_MOVE_HALFMOVES
            || self.is_repetition()
        {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    fn fen(&self) -> String {
        Fen::from_position(self.pos.clone(), EnPassantMode::Legal).to_string()
    }

    fn board(&self) -> Grid {
        let board = self.pos.board();
        let mut grid: Grid = [[None; 8]; 8];
        for rank in 0..8u32 {
            for file in 0..8u32 {
                let sq = shakmaty::Square::new(rank * 8 + file);
                if let Some(piece) = board.piece_at(sq) {
                    grid[7 - rank as usize][file as usize] =
                        Some(Piece::new(kind_of(piece.role), side_of(piece.color)));
                }
            }
        }
        grid
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.board().iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let ch = cell.map(Piece::symbol).unwrap_or('.');
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

/// Board, side to move, castling rights and en passant square: the FEN fields
/// that decide whether two positions repeat.
fn repetition_key(pos: &Chess) -> String {
    let fen = Fen::from_position(pos.clone(), EnPassantMode::Legal).to_string();
    fen.split_whitespace()
        .take(4)
        .collect::<Vec<_>>()
        .join(" ")
}

fn to_shakmaty_square(sq: Square) -> shakmaty::Square {
    shakmaty::Square::new(u32::from(sq.rank) * 8 + u32::from(sq.file))
}

fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn kind_of(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}
