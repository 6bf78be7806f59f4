use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use slabnest::entities::{Slab, UnitPiece};
use slabnest::util::PackingConfig;

/// Chooses the next slab to add to a packing run that ran out of candidates.
pub trait SlabPicker {
    /// Picks one of `candidates` (available slabs of the run's material, not yet used)
    /// for the pieces in `remaining`. `None` stops the run.
    fn pick<'a>(&self, candidates: &[&'a Slab], remaining: &[UnitPiece]) -> Option<&'a Slab>;
}

/// Built-in policies for picking an additional slab
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PickPolicy {
    /// The first candidate in catalog order
    #[default]
    CatalogOrder,
    /// The candidate with the largest bounding area
    LargestFirst,
    /// The smallest candidate whose bounding rectangle holds the largest remaining piece,
    /// the largest candidate if there is none
    SmallestFitting,
}

/// A [`PickPolicy`] bound to the packing configuration it picks for
#[derive(Debug, Clone, Copy)]
pub struct PolicyPicker {
    pub policy: PickPolicy,
    pub allow_rotation: bool,
}

impl PolicyPicker {
    pub fn new(policy: PickPolicy, config: &PackingConfig) -> Self {
        Self {
            policy,
            allow_rotation: config.allow_rotation,
        }
    }

    fn holds(&self, slab: &Slab, piece: &UnitPiece) -> bool {
        let fits = |w: f64, h: f64| w <= slab.width && h <= slab.height;
        fits(piece.width, piece.height)
            || (self.allow_rotation && fits(piece.height, piece.width))
    }
}

impl SlabPicker for PolicyPicker {
    fn pick<'a>(&self, candidates: &[&'a Slab], remaining: &[UnitPiece]) -> Option<&'a Slab> {
        //max_by_key returns the last maximum, min_by_key the first minimum
        let largest = || {
            candidates
                .iter()
                .rev()
                .max_by_key(|s| OrderedFloat(s.area()))
                .copied()
        };
        match self.policy {
            PickPolicy::CatalogOrder => candidates.first().copied(),
            PickPolicy::LargestFirst => largest(),
            PickPolicy::SmallestFitting => {
                let largest_piece = remaining
                    .iter()
                    .max_by_key(|up| OrderedFloat(up.area()));
                let fitting = candidates
                    .iter()
                    .filter(|s| largest_piece.is_none_or(|up| self.holds(s, up)))
                    .collect_vec();
                match fitting.is_empty() {
                    true => largest(),
                    false => fitting
                        .into_iter()
                        .min_by_key(|s| OrderedFloat(s.area()))
                        .copied(),
                }
            }
        }
    }
}
