//! The narrow interface the engine needs from a chess rules implementation.
//!
//! The search never looks inside a position or a move. It enumerates moves,
//! applies and undoes them, and reads piece placement through [`Rules::board`]
//! when it has to score a leaf. Everything else (legality, terminal detection,
//! notation) stays on the other side of this trait.

use std::fmt;
use std::str::FromStr;

/// The two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Kind of a chess piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece of a given kind belonging to a side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }
}

/// A board square. `rank` 0 is the first rank, `file` 0 is the a-file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub rank: u8,
    pub file: u8,
}

impl Square {
    /// Build a square, or `None` if either coordinate is off the board.
    pub fn new(rank: u8, file: u8) -> Option<Self> {
        (rank < 8 && file < 8).then_some(Self { rank, file })
    }

    /// Row of this square in a [`Grid`] (row 0 is the eighth rank).
    pub fn row(self) -> usize {
        7 - self.rank as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().to_ascii_lowercase().into_bytes();
        match bytes.as_slice() {
            [f @ b'a'..=b'h', r @ b'1'..=b'8'] => Ok(Square {
                rank: r - b'1',
                file: f - b'a',
            }),
            _ => Err(RulesError::InvalidSquare(s.to_string())),
        }
    }
}

/// Piece placement as drawn from White's side: `grid[0]` is the eighth rank,
/// `grid[row][0]` is the a-file.
pub type Grid = [[Option<Piece>; 8]; 8];

/// Classification of a position for the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Side to move is in check with no legal moves.
    Checkmate,
    /// Side to move is not in check and has no legal moves.
    Stalemate,
    /// Insufficient material, fifty-move rule, or threefold repetition.
    Draw,
    /// The game goes on.
    Ongoing,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw => "draw",
            GameStatus::Ongoing => "ongoing",
        };
        f.write_str(s)
    }
}

/// Failures reported by a rules implementation.
///
/// During a search any of these means the position can no longer be trusted,
/// so the engine stops and hands the error back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The move is not legal in the current position.
    IllegalMove(String),
    /// Undo requested with an empty history.
    NothingToUndo,
    /// A FEN string could not be turned into a legal position.
    InvalidFen(String),
    /// Text could not be matched to any legal move.
    UnknownMove(String),
    /// Text is not an algebraic square name.
    InvalidSquare(String),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::IllegalMove(m) => write!(f, "illegal move: {m}"),
            RulesError::NothingToUndo => write!(f, "nothing to undo"),
            RulesError::InvalidFen(reason) => write!(f, "invalid fen: {reason}"),
            RulesError::UnknownMove(m) => write!(f, "unknown move: {m}"),
            RulesError::InvalidSquare(s) => write!(f, "invalid square: {s}"),
        }
    }
}

impl std::error::Error for RulesError {}

/// Capabilities the engine needs from a chess rules implementation.
///
/// Implementations own the position and mutate it in place. `apply_move` and
/// `undo_move` must behave like a stack: an undo reverts exactly the most
/// recent apply that has not been undone yet.
pub trait Rules {
    /// Opaque move descriptor, produced by [`Rules::legal_moves`].
    type Move: Clone + fmt::Debug;

    /// All legal moves for the side to move, or only those starting on `origin`.
    fn legal_moves(&self, origin: Option<Square>) -> Vec<Self::Move>;

    /// Play `mv` on the position.
    fn apply_move(&mut self, mv: &Self::Move) -> Result<(), RulesError>;

    /// Take back the most recently applied move.
    fn undo_move(&mut self) -> Result<(), RulesError>;

    /// Classify the position.
    fn status(&self) -> GameStatus;

    /// Compact FEN notation of the position.
    fn fen(&self) -> String;

    /// Current piece placement.
    fn board(&self) -> Grid;
}
