//! Legal move generation by clone-and-simulate.

use crate::board::{Board, Color, Move, Square};

/// Every legal move for `side` on `board`, in board scan order.
///
/// Each pseudo-legal destination is tried on a copy of the board with the
/// piece simply relocated; it is kept only if `side`'s king is then safe.
/// Promotion and history bookkeeping play no part in legality.
#[must_use]
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(40);
    for (from, _) in board.pieces_of(side) {
        for to in board.pseudo_legal_destinations(from) {
            if !leaves_king_in_check(board, side, from, to) {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

/// Whether playing `from -> to` would leave `side`'s own king attacked
#[must_use]
pub fn leaves_king_in_check(board: &Board, side: Color, from: Square, to: Square) -> bool {
    let mut scratch = board.clone();
    scratch.relocate(from, to);
    scratch.in_check(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, PieceKind};

    #[test]
    fn start_position_has_twenty_moves() {
        assert_eq!(legal_moves(&Board::new(), Color::White).len(), 20);
        assert_eq!(legal_moves(&Board::new(), Color::Black).len(), 20);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // e-file pin: king e1, rook e2, black rook e8
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, PieceKind::King)
            .piece(Square(6, 4), Color::White, PieceKind::Rook)
            .piece(Square(0, 4), Color::Black, PieceKind::Rook)
            .piece(Square(0, 0), Color::Black, PieceKind::King)
            .build();
        let moves = legal_moves(&board, Color::White);
        let rook_moves: Vec<_> = moves.iter().filter(|m| m.from == Square(6, 4)).collect();
        assert!(!rook_moves.is_empty());
        assert!(rook_moves.iter().all(|m| m.to.1 == 4));
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, PieceKind::King)
            .piece(Square(0, 3), Color::Black, PieceKind::Rook)
            .piece(Square(0, 7), Color::Black, PieceKind::King)
            .build();
        let moves = legal_moves(&board, Color::White);
        assert!(moves.iter().all(|m| m.to.1 != 3));
        assert!(moves.contains(&Move::new(Square(7, 4), Square(7, 5))));
    }

    #[test]
    fn simulation_does_not_touch_the_board() {
        let board = Board::new();
        let before = board.clone();
        let _ = legal_moves(&board, Color::White);
        assert_eq!(board, before);
    }
}
