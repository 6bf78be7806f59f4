use crate::entities::{Placement, Zone};
use crate::opt::Utilization;

/// The pieces fitted on a single slab during a packing run, together with the zones they were packed into.
#[derive(Clone, Debug, PartialEq)]
pub struct SlabLayout {
    pub slab_id: String,
    /// Width and height of the slab's bounding rectangle
    pub slab_dims: (f64, f64),
    /// The zones the slab was decomposed into, in packing order
    pub zones: Vec<Zone>,
    /// Fitted pieces, in placement order
    pub placements: Vec<Placement>,
}

impl SlabLayout {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn n_placed(&self) -> usize {
        self.placements.len()
    }

    pub fn utilization(&self) -> Utilization {
        let (w, h) = self.slab_dims;
        Utilization::from_placements(&self.placements, w, h)
    }
}
