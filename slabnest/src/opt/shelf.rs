use crate::entities::{Placement, UnitPiece, Zone};
use crate::geometry::geo_enums::Orientation;
use crate::util::PackingConfig;
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Greedy shelf packer for a single [`Zone`].
///
/// Pieces are laid left to right along a shelf, starting at the zone's origin.
/// When a piece does not fit in the remaining width, a new shelf is opened on top of the tallest piece of the current one.
/// Every decision is final: there is no backtracking.
#[derive(Debug, Clone)]
pub struct ShelfPacker<'a> {
    zone: Zone,
    slab_id: &'a str,
    config: &'a PackingConfig,
    /// Position of the next piece, relative to the zone's origin
    cursor: (f64, f64),
    /// Height of the tallest piece on the current shelf
    shelf_height: f64,
}

/// Result of packing a queue into a single zone
#[derive(Debug, Clone, Default)]
pub struct ShelfOutcome {
    /// Pieces fitted in the zone, in placement order
    pub placements: Vec<Placement>,
    /// Pieces that did not fit, in their original queue order
    pub remaining: Vec<UnitPiece>,
}

impl<'a> ShelfPacker<'a> {
    pub fn new(zone: Zone, slab_id: &'a str, config: &'a PackingConfig) -> Self {
        Self {
            zone,
            slab_id,
            config,
            cursor: (0.0, 0.0),
            shelf_height: 0.0,
        }
    }

    /// Packs as many pieces of `queue` as possible, largest side first.
    pub fn pack(mut self, queue: Vec<UnitPiece>) -> ShelfOutcome {
        if self.zone.rect().is_none() {
            debug!(
                "[SHELF] zone {} of slab {} has no usable area",
                self.zone.id, self.slab_id
            );
            return ShelfOutcome {
                placements: vec![],
                remaining: queue,
            };
        }
        //sort by descending longest side, stable to keep the queue order as tie-break
        let order = (0..queue.len())
            .sorted_by_cached_key(|&i| Reverse(OrderedFloat(queue[i].max_side())))
            .collect_vec();

        let mut fitted = vec![false; queue.len()];
        let mut placements = vec![];

        for i in order {
            let piece = &queue[i];
            if let Some(placement) = self.place(piece) {
                debug!(
                    "[SHELF] placed {} at ({:.2}, {:.2}) as {:.2}x{:.2} in zone {} of slab {}",
                    placement.unit_piece_id,
                    placement.x,
                    placement.y,
                    placement.width,
                    placement.height,
                    placement.zone_id,
                    self.slab_id
                );
                fitted[i] = true;
                placements.push(placement);
            }
        }

        let remaining = queue
            .into_iter()
            .zip(fitted)
            .filter_map(|(piece, fitted)| match fitted {
                true => None,
                false => Some(piece),
            })
            .collect_vec();

        ShelfOutcome {
            placements,
            remaining,
        }
    }

    /// Tries every allowed orientation of `piece` at the cursor and commits the first one that fits.
    fn place(&mut self, piece: &UnitPiece) -> Option<Placement> {
        if !piece.is_packable() {
            return None;
        }
        for orientation in self.orientations(piece) {
            let (w, h) = orientation.apply(piece.width, piece.height);
            if self.fits(w, h) {
                let (cx, cy) = self.cursor;
                let position = (self.zone.x + cx, self.zone.y + cy);
                let placement =
                    Placement::new(piece, self.slab_id, self.zone.id, position, orientation);
                self.cursor.0 += w;
                self.shelf_height = f64::max(self.shelf_height, h);
                return Some(placement);
            }
        }
        None
    }

    /// The original orientation, followed by the rotated one if it makes a difference.
    fn orientations(&self, piece: &UnitPiece) -> Vec<Orientation> {
        let distinct_sides = (piece.width - piece.height).abs() > self.config.rotation_epsilon;
        match self.config.allow_rotation && distinct_sides {
            true => vec![Orientation::Normal, Orientation::Rotated],
            false => vec![Orientation::Normal],
        }
    }

    /// Checks whether a `w` x `h` rectangle fits at the cursor.
    /// Opens a new shelf first if the current one is occupied and too short, this move is not undone if the rectangle does not fit.
    fn fits(&mut self, w: f64, h: f64) -> bool {
        let (x, _) = self.cursor;
        if x > 0.0 && x + w > self.zone.width {
            self.cursor = (0.0, self.cursor.1 + self.shelf_height);
            self.shelf_height = 0.0;
        }
        let (_, y) = self.cursor;
        w <= self.zone.width && h <= self.zone.height && y + h <= self.zone.height
    }
}
