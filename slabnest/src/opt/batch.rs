use crate::entities::{Piece, Slab, SlabCatalog};
use crate::opt::expand::expand;
use crate::opt::sequencer::{PackingRun, SlabSequencer};
use crate::util::PackingConfig;
use itertools::Itertools;
use log::info;

/// The packing run of all pieces of one material
#[derive(Clone, Debug)]
pub struct MaterialRun {
    pub material_id: String,
    pub run: PackingRun,
}

/// Packs a mixed-material order.
///
/// Pieces are grouped by material (in order of first appearance), each group is packed onto the first
/// `slabs_per_material` available slabs of its material in `catalog`.
/// Materials never share slabs, so the groups are packed independently, concurrently if enabled in `config`.
pub fn pack_materials(
    pieces: &[Piece],
    catalog: &SlabCatalog,
    slabs_per_material: usize,
    config: &PackingConfig,
) -> Vec<MaterialRun> {
    let groups = pieces
        .iter()
        .map(|p| p.material_id.as_str())
        .unique()
        .map(|m| {
            let group = pieces.iter().filter(|p| p.material_id == m).cloned().collect_vec();
            (m, group)
        })
        .collect_vec();

    info!(
        "[BATCH] packing {} piece(s) of {} material(s)",
        pieces.len(),
        groups.len()
    );

    let pack_group = |(material_id, group): &(&str, Vec<Piece>)| -> MaterialRun {
        let candidates: Vec<Slab> = catalog
            .candidates(material_id)
            .take(slabs_per_material)
            .cloned()
            .collect();
        info!(
            "[BATCH] material {material_id}: {} candidate slab(s) for {} piece(s)",
            candidates.len(),
            group.len()
        );
        let run = SlabSequencer::new(config).run(expand(group), &candidates);
        MaterialRun {
            material_id: material_id.to_string(),
            run,
        }
    };

    run_groups(&groups, config.parallel_materials, pack_group)
}

#[cfg(feature = "parallel")]
fn run_groups<T, F>(groups: &[T], parallel: bool, f: F) -> Vec<MaterialRun>
where
    T: Sync,
    F: Fn(&T) -> MaterialRun + Sync + Send,
{
    use rayon::prelude::*;
    match parallel {
        //collect keeps the input order
        true => groups.par_iter().map(f).collect(),
        false => groups.iter().map(f).collect(),
    }
}

#[cfg(not(feature = "parallel"))]
fn run_groups<T, F>(groups: &[T], _parallel: bool, f: F) -> Vec<MaterialRun>
where
    F: Fn(&T) -> MaterialRun,
{
    groups.iter().map(f).collect()
}
