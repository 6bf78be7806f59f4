use crate::entities::{UnitPiece, ZoneId};
use crate::geometry::geo_enums::Orientation;
use crate::geometry::primitives::Rect;

/// Where and how a [`UnitPiece`] was laid on a slab.
/// Positions are absolute within the slab, dimensions are the rendered (post-rotation) ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub unit_piece_id: String,
    pub order_line_id: String,
    pub slab_id: String,
    pub zone_id: ZoneId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(
        piece: &UnitPiece,
        slab_id: &str,
        zone_id: ZoneId,
        (x, y): (f64, f64),
        orientation: Orientation,
    ) -> Self {
        let (width, height) = orientation.apply(piece.width, piece.height);
        Placement {
            unit_piece_id: piece.id.clone(),
            order_line_id: piece.order_line_id.clone(),
            slab_id: slab_id.to_string(),
            zone_id,
            x,
            y,
            width,
            height,
            orientation,
        }
    }

    /// The rendered rectangle in slab coordinates
    pub fn rect(&self) -> Option<Rect> {
        Rect::from_origin(self.x, self.y, self.width, self.height).ok()
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn is_rotated(&self) -> bool {
        self.orientation.is_rotated()
    }
}
