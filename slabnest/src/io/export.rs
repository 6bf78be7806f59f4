use crate::entities::{Placement, SlabLayout, UnplacedPiece, Zone};
use crate::io::ext_repr::{
    ExtLayout, ExtMaterialReport, ExtPlacement, ExtReport, ExtUnplaced, ExtZone,
};
use crate::opt::{MaterialRun, PackingRun, Utilization};
use itertools::Itertools;

/// Exports the runs of all materials of an order into a single report.
pub fn export_report(runs: &[MaterialRun]) -> ExtReport {
    let materials = runs
        .iter()
        .map(|mr| export_material_run(&mr.material_id, &mr.run))
        .collect_vec();
    let utilization = Utilization::aggregate(materials.iter().map(|m| &m.utilization));

    ExtReport {
        n_unit_pieces: runs.iter().map(|mr| mr.run.n_unit_pieces()).sum(),
        n_placed: runs.iter().map(|mr| mr.run.n_placed()).sum(),
        n_unplaced: runs.iter().map(|mr| mr.run.n_unplaced()).sum(),
        materials,
        utilization,
    }
}

pub fn export_material_run(material_id: &str, run: &PackingRun) -> ExtMaterialReport {
    ExtMaterialReport {
        material_id: material_id.to_string(),
        outcome: run.outcome(),
        layouts: run.layouts.iter().map(export_layout).collect(),
        unplaced: run.unplaced().iter().map(export_unplaced).collect(),
        utilization: run.utilization(),
    }
}

pub fn export_layout(layout: &SlabLayout) -> ExtLayout {
    ExtLayout {
        slab_id: layout.slab_id.clone(),
        zones: layout.zones.iter().map(export_zone).collect(),
        placements: layout.placements.iter().map(export_placement).collect(),
        utilization: layout.utilization(),
    }
}

pub fn export_placement(p: &Placement) -> ExtPlacement {
    ExtPlacement {
        unit_piece_id: p.unit_piece_id.clone(),
        order_line_id: p.order_line_id.clone(),
        x: p.x,
        y: p.y,
        width: p.width,
        height: p.height,
        rotated: p.is_rotated(),
        zone_id: p.zone_id,
    }
}

fn export_zone(z: &Zone) -> ExtZone {
    ExtZone {
        id: z.id,
        x: z.x,
        y: z.y,
        width: z.width,
        height: z.height,
    }
}

pub fn export_unplaced(u: &UnplacedPiece) -> ExtUnplaced {
    ExtUnplaced {
        unit_piece_id: u.piece.id.clone(),
        order_line_id: u.piece.order_line_id.clone(),
        width: u.piece.width,
        height: u.piece.height,
        reason: u.reason,
        zone_id: u.zone_id,
    }
}
