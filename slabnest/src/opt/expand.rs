use crate::entities::{Piece, UnitPiece};

/// Expands every piece into `quantity` independent unit pieces, preserving the order of `pieces`.
/// Pieces with a quantity of zero vanish.
pub fn expand(pieces: &[Piece]) -> Vec<UnitPiece> {
    pieces
        .iter()
        .flat_map(|piece| (1..=piece.quantity).map(move |copy| UnitPiece::new(piece, copy)))
        .collect()
}
