use itertools::Itertools;
use log::{info, warn};
use slabnest::entities::{Piece, Slab, SlabCatalog};
use slabnest::opt::{MaterialRun, RunOutcome, pack_materials};
use std::time::Instant;
use thousands::Separable;

use crate::config::SlabNestConfig;
use crate::picker::SlabPicker;

/// Fulfils an order: packs every material onto its initial slabs, then keeps adding slabs chosen by `picker`
/// until all packable pieces are placed, the material's stock is exhausted or `max_additional_slabs` is reached.
pub fn fulfil(
    pieces: &[Piece],
    catalog: &SlabCatalog,
    config: &SlabNestConfig,
    picker: &impl SlabPicker,
) -> Vec<MaterialRun> {
    let start = Instant::now();

    let mut runs = pack_materials(
        pieces,
        catalog,
        config.initial_slabs_per_material,
        &config.packing,
    );

    for mr in runs.iter_mut() {
        let n_added = extend_run(mr, catalog, config, picker);
        let util = mr.run.utilization();
        info!(
            "[DRIVER] material {}: {}/{} unit pieces placed on {} slab(s) ({} additional), {} of {} cm² used ({:.2}% waste)",
            mr.material_id,
            mr.run.n_placed(),
            mr.run.n_unit_pieces(),
            mr.run.slabs.len(),
            n_added,
            (util.used_area.round() as u64).separate_with_commas(),
            (util.total_area.round() as u64).separate_with_commas(),
            util.waste_percentage
        );
    }

    info!(
        "[DRIVER] order fulfilled in {:.3}ms, {} unplaced unit piece(s)",
        start.elapsed().as_secs_f64() * 1000.0,
        runs.iter().map(|mr| mr.run.n_unplaced()).sum::<usize>()
    );

    runs
}

/// Adds slabs to a run until it completes or no slab may be added. Returns the number of slabs added.
fn extend_run(
    mr: &mut MaterialRun,
    catalog: &SlabCatalog,
    config: &SlabNestConfig,
    picker: &impl SlabPicker,
) -> usize {
    let mut n_added = 0;
    while mr.run.outcome() == RunOutcome::NeedsAdditionalSlab {
        if config.max_additional_slabs.is_some_and(|max| n_added >= max) {
            warn!(
                "[DRIVER] material {}: limit of {} additional slab(s) reached, {} piece(s) remain",
                mr.material_id,
                n_added,
                mr.run.remaining.len()
            );
            break;
        }
        let used = mr.run.slabs.iter().map(|s| s.id.clone()).collect_vec();
        let candidates: Vec<&Slab> = catalog
            .remaining_candidates(&mr.material_id, &used)
            .collect();

        match picker.pick(&candidates, &mr.run.remaining) {
            Some(slab) => {
                info!(
                    "[DRIVER] material {}: adding slab {} ({:.1}x{:.1}) for {} remaining piece(s)",
                    mr.material_id,
                    slab.id,
                    slab.width,
                    slab.height,
                    mr.run.remaining.len()
                );
                mr.run.extend(slab.clone());
                n_added += 1;
            }
            None => {
                warn!(
                    "[DRIVER] material {}: no slabs left in stock, {} piece(s) remain unplaced",
                    mr.material_id,
                    mr.run.remaining.len()
                );
                break;
            }
        }
    }
    n_added
}
