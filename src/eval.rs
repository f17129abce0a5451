//! Static position evaluation.
//!
//! The score is absolute: positive favours White, negative favours Black,
//! whoever is to move. Only pawns and knights get a placement bonus; the
//! other pieces count their material value alone.

use crate::constants::{
    BISHOP_VALUE, KING_VALUE, KNIGHT_TABLE, KNIGHT_VALUE, PAWN_TABLE, PAWN_VALUE, QUEEN_VALUE,
    ROOK_VALUE,
};
use crate::rules::{Piece, PieceKind, Rules, Side};

/// Material value of a piece kind.
pub fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// Signed value of `piece` standing on grid cell (`row`, `col`).
///
/// Row 0 is the eighth rank. Black pawns and knights read their table upside
/// down; Black pieces count negative.
pub fn piece_value(piece: Piece, row: usize, col: usize) -> i32 {
    let is_white = piece.side == Side::White;
    let bonus = match piece.kind {
        PieceKind::Pawn if is_white => PAWN_TABLE[row][col],
        PieceKind::Pawn => PAWN_TABLE[7 - row][col],
        PieceKind::Knight if is_white => KNIGHT_TABLE[row][col],
        PieceKind::Knight => KNIGHT_TABLE[7 - row][col],
        _ => 0,
    };
    let value = material_value(piece.kind) + bonus;
    if is_white { value } else { -value }
}

/// Sum of [`piece_value`] over every occupied square.
pub fn static_value<R: Rules>(pos: &R) -> i32 {
    pos.board()
        .iter()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|piece| piece_value(piece, row, col)))
        })
        .sum()
}

/// Score handed back by the search at depth zero: the negated static value.
///
/// Negation happens here only, not once per ply.
#[inline]
pub fn leaf_value<R: Rules>(pos: &R) -> i32 {
    -static_value(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Game;

    fn white(kind: PieceKind) -> Piece {
        Piece::new(kind, Side::White)
    }

    fn black(kind: PieceKind) -> Piece {
        Piece::new(kind, Side::Black)
    }

    #[test]
    fn test_start_position_is_balanced() {
        let game = Game::new();
        assert_eq!(static_value(&game), 0);
        assert_eq!(leaf_value(&game), 0);
    }

    #[test]
    fn test_pawn_table_mirrors_by_color() {
        // White pawn on e2 (row 6) and Black pawn on e7 (row 1) read the same cell.
        assert_eq!(piece_value(white(PieceKind::Pawn), 6, 4), PAWN_VALUE + 50);
        assert_eq!(piece_value(black(PieceKind::Pawn), 1, 4), -(PAWN_VALUE + 50));

        // White pawn on d4 (row 4).
        assert_eq!(piece_value(white(PieceKind::Pawn), 4, 3), PAWN_VALUE + 25);
        // Black pawn on d5 (row 3) reads row 4.
        assert_eq!(piece_value(black(PieceKind::Pawn), 3, 3), -(PAWN_VALUE + 25));
    }

    #[test]
    fn test_knight_table_mirrors_by_color() {
        // White knight on d5 (row 3), Black knight on d4 (row 4) reading row 3.
        assert_eq!(piece_value(white(PieceKind::Knight), 3, 3), KNIGHT_VALUE + 20);
        assert_eq!(piece_value(black(PieceKind::Knight), 4, 3), -(KNIGHT_VALUE + 20));

        // White knight on c6 (row 2), Black knight on c3 (row 5).
        assert_eq!(piece_value(white(PieceKind::Knight), 2, 2), KNIGHT_VALUE + 10);
        assert_eq!(piece_value(black(PieceKind::Knight), 5, 2), -(KNIGHT_VALUE + 10));
        assert_eq!(piece_value(white(PieceKind::Knight), 0, 0), KNIGHT_VALUE - 50);
    }

    #[test]
    fn test_other_pieces_use_material_only() {
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(piece_value(white(PieceKind::Bishop), row, col), BISHOP_VALUE);
                assert_eq!(piece_value(white(PieceKind::Rook), row, col), ROOK_VALUE);
                assert_eq!(piece_value(black(PieceKind::Queen), row, col), -QUEEN_VALUE);
                assert_eq!(piece_value(black(PieceKind::King), row, col), -KING_VALUE);
            }
        }
    }

    #[test]
    fn test_material_advantage_sign() {
        // White is a queen up.
        let game = Game::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        assert_eq!(static_value(&game), QUEEN_VALUE);
        assert_eq!(leaf_value(&game), -QUEEN_VALUE);

        // Same material, Black to move: still absolute.
        let game = Game::from_fen("4k3/8/8/8/8/8/8/3QK3 b - - 0 1").unwrap();
        assert_eq!(static_value(&game), QUEEN_VALUE);
    }
}
