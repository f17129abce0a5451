//! Evaluation tables, search bounds, and difficulty depths.
//!
//! Everything here is a compile-time constant. The positional tables are laid
//! out the way the board is drawn from White's side: row 0 is the eighth rank,
//! column 0 is the a-file.

// =============================================================================
// Material
// =============================================================================

/// Pawn material value.
pub const PAWN_VALUE: i32 = 10;

/// Knight material value.
pub const KNIGHT_VALUE: i32 = 30;

/// Bishop material value.
pub const BISHOP_VALUE: i32 = 30;

/// Rook material value.
pub const ROOK_VALUE: i32 = 50;

/// Queen material value.
pub const QUEEN_VALUE: i32 = 90;

/// King material value. Large enough that losing it outweighs everything else.
pub const KING_VALUE: i32 = 900;

// =============================================================================
// Positional Tables
// =============================================================================

/// Pawn placement bonus, read as-is for White and row-mirrored for Black.
pub const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// Knight placement bonus, read as-is for White and row-mirrored for Black.
pub const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-30, 0, 5, 10, 10, 5, 0, -30],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

// =============================================================================
// Search Bounds
// =============================================================================

/// Finite stand-in for infinity used to seed the best score at every node.
///
/// The evaluator cannot reach this: a full board sums to a few thousand at most.
pub const SENTINEL: i32 = 9_999;

/// Alpha/beta window used at the root, slightly wider than [`SENTINEL`] so the
/// first real score always replaces the seed.
pub const SEARCH_BOUND: i32 = 10_000;

// =============================================================================
// Difficulty Depths
// =============================================================================

/// Search depth (plies, counting the root move) for easy play.
pub const EASY_DEPTH: u32 = 1;

/// Search depth for medium play.
pub const MEDIUM_DEPTH: u32 = 2;

/// Search depth for hard play.
pub const HARD_DEPTH: u32 = 3;

// =============================================================================
// Draw Rules
// =============================================================================

/// Half-moves without a capture or pawn move after which the game is drawn.
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Occurrences of the same position that make a repetition draw.
pub const REPETITION_COUNT: usize = 3;
