use crate::entities::{SlabStatus, UnplacedReason, ZoneId};
use crate::opt::{RunOutcome, Utilization};
use serde::{Deserialize, Serialize};

/// External representation of an order line, imported as a [`Piece`](crate::entities::Piece).
/// Lengths carry no unit: small values are read as meters, larger ones as centimeters.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtOrderLine {
    /// Unique identifier of the order line
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// Missing or invalid lengths make the piece unpackable
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Number of identical copies to cut
    #[serde(default = "default_quantity")]
    pub quantity: usize,
    pub material_id: String,
}

/// External representation of a point of a slab outline
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPoint {
    pub x: f64,
    pub y: f64,
}

/// External representation of a [`Slab`](crate::entities::Slab).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSlab {
    /// Unique identifier of the slab
    pub id: String,
    pub material_id: String,
    /// Width of the bounding rectangle, in the same ambiguous units as the order lines
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Outline of a remnant, in the units of the bounding rectangle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Vec<ExtPoint>>,
    #[serde(default)]
    pub status: SlabStatus,
}

/// An order to be cut from the slabs in stock
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtOrder {
    pub order_lines: Vec<ExtOrderLine>,
    pub slabs: Vec<ExtSlab>,
}

/// External representation of a [`Placement`](crate::entities::Placement).
/// Coordinates and dimensions in centimeters, dimensions after rotation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    pub unit_piece_id: String,
    pub order_line_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
    pub zone_id: ZoneId,
}

/// External representation of a [`Zone`](crate::entities::Zone)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtZone {
    pub id: ZoneId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`SlabLayout`](crate::entities::SlabLayout).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayout {
    pub slab_id: String,
    pub zones: Vec<ExtZone>,
    /// Fitted pieces, in placement order
    pub placements: Vec<ExtPlacement>,
    pub utilization: Utilization,
}

/// External representation of an [`UnplacedPiece`](crate::entities::UnplacedPiece)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtUnplaced {
    pub unit_piece_id: String,
    pub order_line_id: String,
    pub width: f64,
    pub height: f64,
    pub reason: UnplacedReason,
    /// Always `NONE`
    pub zone_id: ZoneId,
}

/// Report of the packing run of a single material
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtMaterialReport {
    pub material_id: String,
    pub outcome: RunOutcome,
    /// One layout per slab used, in packing order
    pub layouts: Vec<ExtLayout>,
    /// Empty if every piece of the material was placed
    pub unplaced: Vec<ExtUnplaced>,
    /// Combined utilization of all slabs of the material
    pub utilization: Utilization,
}

/// Report of a complete order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtReport {
    pub materials: Vec<ExtMaterialReport>,
    pub n_unit_pieces: usize,
    pub n_placed: usize,
    pub n_unplaced: usize,
    pub utilization: Utilization,
}

fn default_quantity() -> usize {
    1
}
