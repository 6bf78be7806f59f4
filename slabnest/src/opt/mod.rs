mod batch;
mod expand;
mod sequencer;
mod shelf;
mod utilization;
mod zones;

#[doc(inline)]
pub use batch::MaterialRun;
#[doc(inline)]
pub use batch::pack_materials;
#[doc(inline)]
pub use expand::expand;
#[doc(inline)]
pub use sequencer::PackingRun;
#[doc(inline)]
pub use sequencer::RunOutcome;
#[doc(inline)]
pub use sequencer::SlabSequencer;
#[doc(inline)]
pub use shelf::ShelfOutcome;
#[doc(inline)]
pub use shelf::ShelfPacker;
#[doc(inline)]
pub use utilization::Utilization;
#[doc(inline)]
pub use zones::decompose;
