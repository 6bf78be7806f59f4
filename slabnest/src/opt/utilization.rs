use crate::entities::Placement;
use serde::{Deserialize, Serialize};

/// How much of a slab's (or a set of slabs') bounding area is covered by fitted pieces.
/// Informational only, packing decisions never depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Utilization {
    pub used_area: f64,
    pub total_area: f64,
    pub waste_percentage: f64,
}

impl Utilization {
    pub fn new(used_area: f64, total_area: f64) -> Self {
        let waste_percentage = match total_area > 0.0 {
            true => 100.0 - 100.0 * used_area / total_area,
            false => 100.0,
        };
        Utilization {
            used_area,
            total_area,
            waste_percentage,
        }
    }

    /// Utilization of a `slab_width` x `slab_height` slab holding `placements`.
    /// A slab with a side that is not finite and positive has no area.
    pub fn from_placements(placements: &[Placement], slab_width: f64, slab_height: f64) -> Self {
        let used_area = placements.iter().map(|p| p.width * p.height).sum();
        let valid_side = |v: f64| v.is_finite() && v > 0.0;
        let total_area = match valid_side(slab_width) && valid_side(slab_height) {
            true => slab_width * slab_height,
            false => 0.0,
        };
        Utilization::new(used_area, total_area)
    }

    /// Combined utilization of several slabs.
    pub fn aggregate<'a>(utilizations: impl IntoIterator<Item = &'a Utilization>) -> Self {
        let (used_area, total_area) = utilizations
            .into_iter()
            .fold((0.0, 0.0), |(u, t), util| (u + util.used_area, t + util.total_area));
        Utilization::new(used_area, total_area)
    }

    pub fn utilization_percentage(&self) -> f64 {
        100.0 - self.waste_percentage
    }
}
