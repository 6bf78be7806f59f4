use crate::entities::ZoneId;
use serde::{Deserialize, Serialize};

/// A rectangular piece ordered by a customer, to be cut `quantity` times from slabs of its material.
/// Dimensions are normalized to centimeters.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub id: String,
    /// The order line this piece originates from
    pub order_line_id: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub material_id: String,
    pub quantity: usize,
}

impl Piece {
    /// Pieces without a strictly positive, finite width and height can never be placed.
    pub fn is_packable(&self) -> bool {
        is_valid_length(self.width) && is_valid_length(self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// One physical copy of a [`Piece`], packed independently of the other copies.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitPiece {
    /// `{piece_id}-{copy_index}`
    pub id: String,
    pub piece_id: String,
    pub order_line_id: String,
    /// 1-based index of this copy among the copies of the piece
    pub copy_index: usize,
    pub width: f64,
    pub height: f64,
    pub material_id: String,
}

impl UnitPiece {
    pub fn new(piece: &Piece, copy_index: usize) -> Self {
        UnitPiece {
            id: format!("{}-{}", piece.id, copy_index),
            piece_id: piece.id.clone(),
            order_line_id: piece.order_line_id.clone(),
            copy_index,
            width: piece.width,
            height: piece.height,
            material_id: piece.material_id.clone(),
        }
    }

    pub fn is_packable(&self) -> bool {
        is_valid_length(self.width) && is_valid_length(self.height)
    }

    /// The longest side, used to order pieces before packing.
    pub fn max_side(&self) -> f64 {
        f64::max(self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Why a unit piece did not end up on any slab
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnplacedReason {
    /// Non-positive or non-finite dimensions, the piece can never be placed
    Degenerate,
    /// None of the candidate slabs had room left for the piece
    NoCapacity,
}

/// A unit piece that remains unplaced at the end of a packing run.
#[derive(Clone, Debug, PartialEq)]
pub struct UnplacedPiece {
    pub piece: UnitPiece,
    pub reason: UnplacedReason,
    /// Always [`ZoneId::None`], an unplaced piece belongs to no zone
    pub zone_id: ZoneId,
}

impl UnplacedPiece {
    pub fn new(piece: UnitPiece, reason: UnplacedReason) -> Self {
        UnplacedPiece {
            piece,
            reason,
            zone_id: ZoneId::None,
        }
    }
}

fn is_valid_length(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
