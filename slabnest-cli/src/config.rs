use serde::{Deserialize, Serialize};
use slabnest::util::PackingConfig;

use crate::picker::PickPolicy;

/// Configuration of the slabnest driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SlabNestConfig {
    /// Configuration of the packing runs
    pub packing: PackingConfig,
    /// Number of available slabs drawn from the catalog for every material before packing starts
    pub initial_slabs_per_material: usize,
    /// Maximum number of slabs added per material while pieces remain unplaced. Unbounded if undefined
    pub max_additional_slabs: Option<usize>,
    /// How an additional slab is chosen among the remaining candidates
    pub pick_policy: PickPolicy,
}

impl Default for SlabNestConfig {
    fn default() -> Self {
        Self {
            packing: PackingConfig::default(),
            initial_slabs_per_material: 1,
            max_additional_slabs: None,
            pick_policy: PickPolicy::CatalogOrder,
        }
    }
}
