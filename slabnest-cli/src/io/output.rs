use crate::config::SlabNestConfig;
use serde::{Deserialize, Serialize};
use slabnest::io::ext_repr::{ExtOrder, ExtReport};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SlabNestOutput {
    #[serde(flatten)]
    pub order: ExtOrder,
    pub report: ExtReport,
    pub config: SlabNestConfig,
    pub run_time_ms: u64,
}
