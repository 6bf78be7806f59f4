use serde::{Deserialize, Serialize};

/// How a rectangular piece is laid on the slab
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Rendered as `(width, height)`
    Normal,
    /// Turned 90°, rendered as `(height, width)`
    Rotated,
}

impl Orientation {
    /// Rendered dimensions of a `width` x `height` rectangle in this orientation.
    pub fn apply(self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Orientation::Normal => (width, height),
            Orientation::Rotated => (height, width),
        }
    }

    pub fn is_rotated(self) -> bool {
        self == Orientation::Rotated
    }
}
