use crate::entities::{Placement, SlabLayout, UnitPiece, Zone};
use crate::geometry::primitives::Rect;
use crate::opt::PackingRun;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of a packing run
//Used in debug_assert!() blocks and in tests
//Unit piece ids are caller data and may repeat, none of the checks rely on their uniqueness

pub fn run_is_consistent(run: &PackingRun) -> bool {
    let tolerance = run.config().bounds_tolerance;
    conservation_holds(run)
        && run
            .layouts
            .iter()
            .all(|l| layout_is_valid(l, &run.unit_pieces, tolerance))
}

/// Every unit piece is either placed exactly once or unplaced.
/// Compared as multisets of ids, so repeated ids must be accounted for as often as they occur.
pub fn conservation_holds(run: &PackingRun) -> bool {
    let placed = run.placements().map(|p| p.unit_piece_id.as_str()).collect_vec();
    let unplaced = run
        .remaining
        .iter()
        .chain(run.degenerate.iter())
        .map(|up| up.id.as_str())
        .collect_vec();

    if placed.len() + unplaced.len() != run.n_unit_pieces() {
        error!(
            "{} placed + {} unplaced != {} unit pieces",
            placed.len(),
            unplaced.len(),
            run.n_unit_pieces()
        );
        return false;
    }
    let expected = run.unit_pieces.iter().map(|up| up.id.as_str()).counts();
    let seen = placed.into_iter().chain(unplaced).counts();
    let holds = seen == expected;
    if !holds {
        error!("placed and unplaced unit pieces do not match the input: {seen:?} != {expected:?}");
    }
    holds
}

pub fn layout_is_valid(layout: &SlabLayout, unit_pieces: &[UnitPiece], tolerance: f64) -> bool {
    zones_within_slab(layout, tolerance)
        && zones_do_not_overlap(&layout.zones, tolerance)
        && placements_within_zones(layout, tolerance)
        && layout_is_overlap_free(layout)
        && rotations_are_valid(&layout.placements, unit_pieces)
}

pub fn zones_within_slab(layout: &SlabLayout, tolerance: f64) -> bool {
    let (w, h) = layout.slab_dims;
    match Rect::try_new(0.0, 0.0, w, h) {
        Ok(bbox) => layout
            .zones
            .iter()
            .filter_map(|z| z.rect())
            .all(|zr| zr.fits_within(&bbox, tolerance)),
        //degenerate slab, nothing may be placed on it
        Err(_) => layout.placements.is_empty(),
    }
}

/// Two zones of a slab may share an edge, but never overlap by more than `tolerance` in both directions.
pub fn zones_do_not_overlap(zones: &[Zone], tolerance: f64) -> bool {
    zones
        .iter()
        .filter_map(|z| z.rect())
        .tuple_combinations()
        .all(|(a, b)| match Rect::intersection(a, b) {
            Some(i) => i.width() <= tolerance || i.height() <= tolerance,
            None => true,
        })
}

pub fn placements_within_zones(layout: &SlabLayout, tolerance: f64) -> bool {
    layout.placements.iter().all(|p| {
        let zone = layout.zones.iter().find(|z| z.id == p.zone_id);
        match (zone.and_then(|z| z.rect()), p.rect()) {
            (Some(zr), Some(pr)) => {
                let fits = pr.fits_within(&zr, tolerance);
                if !fits {
                    error!("placement {p:?} exceeds zone {zr:?}");
                }
                fits
            }
            _ => false,
        }
    })
}

/// No two rendered rectangles on a slab share any area. Touching edges are allowed.
pub fn layout_is_overlap_free(layout: &SlabLayout) -> bool {
    layout
        .placements
        .iter()
        .filter_map(|p| p.rect())
        .tuple_combinations()
        .all(|(a, b)| Rect::intersection(a, b).is_none())
}

/// Rendered dimensions are the original ones, swapped if and only if the piece was rotated.
/// With repeated ids, one of the unit pieces sharing the placement's id must match.
pub fn rotations_are_valid(placements: &[Placement], unit_pieces: &[UnitPiece]) -> bool {
    let by_id = unit_pieces
        .iter()
        .map(|up| (up.id.as_str(), up))
        .into_group_map();
    placements.iter().all(|p| match by_id.get(p.unit_piece_id.as_str()) {
        Some(ups) => ups
            .iter()
            .any(|up| (p.width, p.height) == p.orientation.apply(up.width, up.height)),
        None => false,
    })
}
