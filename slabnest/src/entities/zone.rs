use crate::geometry::primitives::Rect;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifies a packing zone within a slab
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    /// The whole bounding rectangle of the slab
    #[serde(rename = "FULL")]
    Full,
    /// First rectangle of an L-shaped slab, spanning its full width or height
    A,
    /// Second rectangle of an L-shaped slab
    B,
    /// Not assigned to any zone
    #[serde(rename = "NONE")]
    None,
}

impl Display for ZoneId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ZoneId::Full => "FULL",
            ZoneId::A => "A",
            ZoneId::B => "B",
            ZoneId::None => "NONE",
        };
        f.write_str(s)
    }
}

/// Axis-aligned rectangular region of a slab into which pieces are packed.
/// Its origin is expressed in the slab's coordinate system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Zone {
    pub fn new(id: ZoneId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Zone {
            id,
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_rect(id: ZoneId, rect: Rect) -> Self {
        Zone::new(id, rect.x_min, rect.y_min, rect.width(), rect.height())
    }

    /// `None` if the zone has no area.
    pub fn rect(&self) -> Option<Rect> {
        Rect::from_origin(self.x, self.y, self.width, self.height).ok()
    }

    pub fn area(&self) -> f64 {
        self.rect().map_or(0.0, |r| r.area())
    }
}
