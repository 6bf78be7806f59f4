use crate::geometry::primitives::{Rect, SPolygon};
use serde::{Deserialize, Serialize};

/// Availability of a slab in the stock catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlabStatus {
    #[default]
    Available,
    Reserved,
    Consumed,
}

/// A raw piece of stone stock. Either rectangular, or an irregular remnant described by an outline.
/// Dimensions are normalized to centimeters, the outline lives in the slab's own coordinate system.
#[derive(Clone, Debug)]
pub struct Slab {
    pub id: String,
    pub material_id: String,
    /// Width of the bounding rectangle
    pub width: f64,
    /// Height of the bounding rectangle
    pub height: f64,
    /// Outline of the usable stone, if it differs from the bounding rectangle
    pub polygon: Option<SPolygon>,
    pub status: SlabStatus,
}

impl Slab {
    /// Rectangular slab with no outline
    pub fn new(id: &str, material_id: &str, width: f64, height: f64) -> Self {
        Slab {
            id: id.to_string(),
            material_id: material_id.to_string(),
            width,
            height,
            polygon: None,
            status: SlabStatus::Available,
        }
    }

    pub fn with_polygon(mut self, polygon: SPolygon) -> Self {
        self.polygon = Some(polygon);
        self
    }

    pub fn with_status(mut self, status: SlabStatus) -> Self {
        self.status = status;
        self
    }

    /// The bounding rectangle of the slab, `None` if the slab is degenerate (a side that is not finite and positive).
    pub fn bbox(&self) -> Option<Rect> {
        Rect::try_new(0.0, 0.0, self.width, self.height).ok()
    }

    /// Area of the bounding rectangle, 0 for degenerate slabs.
    pub fn area(&self) -> f64 {
        self.bbox().map_or(0.0, |bbox| bbox.area())
    }

    pub fn is_available(&self) -> bool {
        self.status == SlabStatus::Available
    }
}
