use serde::{Deserialize, Serialize};

/// Configuration of a packing run
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PackingConfig {
    /// Raw lengths with an absolute value up to (and including) this threshold are read as meters, larger ones as centimeters
    pub meter_threshold: f64,
    /// Pieces whose sides differ by no more than this are never tried rotated
    pub rotation_epsilon: f64,
    /// Tolerance (cm) for coordinate deduplication and for zones protruding from the slab's bounding box
    pub bounds_tolerance: f64,
    /// Absolute floor (cm²) of the accepted area error of a slab decomposition
    pub min_area_tolerance: f64,
    /// Accepted area error of a slab decomposition as a fraction of the polygon area
    pub rel_area_tolerance: f64,
    /// Whether pieces may be turned 90° to fit
    pub allow_rotation: bool,
    /// Pack independent materials of a batch concurrently (requires the `parallel` feature)
    pub parallel_materials: bool,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            meter_threshold: 10.0,
            rotation_epsilon: 0.01,
            bounds_tolerance: 0.01,
            min_area_tolerance: 1.0,
            rel_area_tolerance: 0.05,
            allow_rotation: true,
            parallel_materials: true,
        }
    }
}

impl PackingConfig {
    /// Maximum tolerated difference between the area covered by a decomposition and the polygon's area.
    pub fn area_tolerance(&self, polygon_area: f64) -> f64 {
        f64::max(
            self.min_area_tolerance,
            self.rel_area_tolerance * polygon_area.abs(),
        )
    }
}
