use crate::entities::{Placement, Slab, SlabLayout, UnitPiece, UnplacedPiece, UnplacedReason};
use crate::opt::shelf::ShelfPacker;
use crate::opt::utilization::Utilization;
use crate::opt::zones;
use crate::util::PackingConfig;
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Terminal state of a [`PackingRun`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Every packable piece found a place
    Complete,
    /// The candidate slabs are exhausted while packable pieces remain.
    /// The caller may supply another slab of the same material through [`PackingRun::extend`].
    NeedsAdditionalSlab,
}

/// Packs unit pieces across an ordered list of candidate slabs.
///
/// Each slab is decomposed into its zones, which are filled one after the other by a [`ShelfPacker`].
/// Pieces that fit nowhere on a slab roll over to the next one.
#[derive(Clone, Copy, Debug)]
pub struct SlabSequencer<'a> {
    config: &'a PackingConfig,
}

impl<'a> SlabSequencer<'a> {
    pub fn new(config: &'a PackingConfig) -> Self {
        Self { config }
    }

    /// Packs `unit_pieces` onto `slabs`, in order.
    pub fn run(&self, unit_pieces: Vec<UnitPiece>, slabs: &[Slab]) -> PackingRun {
        let duplicates = unit_pieces
            .iter()
            .map(|up| up.id.as_str())
            .duplicates()
            .collect_vec();
        if !duplicates.is_empty() {
            warn!(
                "[SEQ] unit piece ids are not unique, repeated: {}",
                duplicates.join(", ")
            );
        }

        let (queue, degenerate): (Vec<_>, Vec<_>) =
            unit_pieces.iter().cloned().partition(|up| up.is_packable());

        if !degenerate.is_empty() {
            info!(
                "[SEQ] {} unit piece(s) with non-positive dimensions excluded from packing: {}",
                degenerate.len(),
                degenerate.iter().map(|up| up.id.as_str()).join(", ")
            );
        }

        let mut run = PackingRun {
            config: *self.config,
            unit_pieces,
            slabs: vec![],
            layouts: vec![],
            remaining: queue,
            degenerate,
        };

        for slab in slabs {
            self.advance(&mut run, slab.clone());
        }

        info!(
            "[SEQ] run finished over {} slab(s): {}/{} unit pieces placed, outcome {:?}",
            run.slabs.len(),
            run.n_placed(),
            run.n_unit_pieces(),
            run.outcome()
        );
        debug_assert!(assertions::run_is_consistent(&run));

        run
    }

    /// Packs as much of `queue` as possible onto `slab`.
    /// Returns the slab's layout and the pieces that did not fit, in queue order.
    pub fn pack_slab(&self, slab: &Slab, queue: Vec<UnitPiece>) -> (SlabLayout, Vec<UnitPiece>) {
        let zones = zones::decompose(slab, self.config);
        let mut placements: Vec<Placement> = vec![];
        let mut queue = queue;

        for zone in zones.iter() {
            if queue.is_empty() {
                break;
            }
            let outcome = ShelfPacker::new(*zone, &slab.id, self.config).pack(queue);
            debug!(
                "[SEQ] zone {} of slab {} took {} piece(s), {} left",
                zone.id,
                slab.id,
                outcome.placements.len(),
                outcome.remaining.len()
            );
            placements.extend(outcome.placements);
            queue = outcome.remaining;
        }

        let layout = SlabLayout {
            slab_id: slab.id.clone(),
            slab_dims: (slab.width, slab.height),
            zones,
            placements,
        };
        (layout, queue)
    }

    fn advance(&self, run: &mut PackingRun, slab: Slab) {
        let queue = std::mem::take(&mut run.remaining);
        let n_queued = queue.len();
        let (layout, remaining) = self.pack_slab(&slab, queue);

        info!(
            "[SEQ] slab {} ({:.1}x{:.1}, {} zone(s)): placed {}/{} piece(s), waste {:.2}%",
            slab.id,
            slab.width,
            slab.height,
            layout.zones.len(),
            layout.n_placed(),
            n_queued,
            layout.utilization().waste_percentage
        );

        run.layouts.push(layout);
        run.slabs.push(slab);
        run.remaining = remaining;
    }
}

/// Transient aggregate of a packing run: the candidate slabs, the input unit pieces,
/// one layout per slab and the pieces still unplaced.
///
/// Layouts of earlier slabs are never revisited, extending the run with another slab
/// only packs the pieces left over.
#[derive(Clone, Debug)]
pub struct PackingRun {
    config: PackingConfig,
    /// All unit pieces of the run, in input order
    pub unit_pieces: Vec<UnitPiece>,
    /// Candidate slabs, in the order they were packed
    pub slabs: Vec<Slab>,
    /// One layout per candidate slab, in the same order
    pub layouts: Vec<SlabLayout>,
    /// Packable pieces that did not fit on any slab yet, in input order
    pub remaining: Vec<UnitPiece>,
    /// Pieces that can never be placed
    pub degenerate: Vec<UnitPiece>,
}

impl PackingRun {
    pub fn outcome(&self) -> RunOutcome {
        match self.remaining.is_empty() {
            true => RunOutcome::Complete,
            false => RunOutcome::NeedsAdditionalSlab,
        }
    }

    /// Packs the remaining pieces onto one more slab.
    /// Equivalent to a fresh run over the extended slab list.
    pub fn extend(&mut self, slab: Slab) -> RunOutcome {
        info!(
            "[SEQ] extending run with slab {} for {} remaining piece(s)",
            slab.id,
            self.remaining.len()
        );
        let config = self.config;
        SlabSequencer::new(&config).advance(self, slab);
        debug_assert!(assertions::run_is_consistent(self));
        self.outcome()
    }

    /// Every fitted piece, slab by slab
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.layouts.iter().flat_map(|l| l.placements.iter())
    }

    /// Pieces left without a slab: degenerate ones first, then those for which no room was found
    pub fn unplaced(&self) -> Vec<UnplacedPiece> {
        let degenerate = self
            .degenerate
            .iter()
            .map(|up| UnplacedPiece::new(up.clone(), UnplacedReason::Degenerate));
        let no_capacity = self
            .remaining
            .iter()
            .map(|up| UnplacedPiece::new(up.clone(), UnplacedReason::NoCapacity));
        degenerate.chain(no_capacity).collect()
    }

    pub fn n_unit_pieces(&self) -> usize {
        self.unit_pieces.len()
    }

    pub fn n_placed(&self) -> usize {
        self.layouts.iter().map(|l| l.n_placed()).sum()
    }

    pub fn n_unplaced(&self) -> usize {
        self.remaining.len() + self.degenerate.len()
    }

    /// Combined utilization over all slabs of the run
    pub fn utilization(&self) -> Utilization {
        let per_slab = self.layouts.iter().map(|l| l.utilization()).collect_vec();
        Utilization::aggregate(per_slab.iter())
    }

    pub fn layout(&self, slab_id: &str) -> Option<&SlabLayout> {
        self.layouts.iter().find(|l| l.slab_id == slab_id)
    }

    pub fn config(&self) -> &PackingConfig {
        &self.config
    }
}
