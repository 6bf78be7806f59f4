use crate::entities::{Piece, Slab, SlabCatalog};
use crate::geometry::primitives::{Point, SPolygon};
use crate::io::ext_repr::{ExtOrder, ExtOrderLine, ExtPoint, ExtSlab};
use crate::util::PackingConfig;
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::{debug, warn};

/// Converts a raw length of unknown unit into centimeters.
///
/// Values up to `meter_threshold` are read as meters, larger ones as centimeters.
/// Missing, non-finite and non-positive values normalize to 0.
pub fn normalize_length(raw: Option<f64>, meter_threshold: f64) -> f64 {
    raw.map_or(0.0, |v| v * unit_factor(v, meter_threshold))
}

/// Factor converting `raw` into centimeters, 0 for invalid lengths.
fn unit_factor(raw: f64, meter_threshold: f64) -> f64 {
    match raw.is_finite() && raw > 0.0 {
        false => 0.0,
        true if raw <= meter_threshold => 100.0,
        true => 1.0,
    }
}

/// Converts external representations of order lines and slabs into internal ones.
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    pub meter_threshold: f64,
}

impl Importer {
    pub fn new(config: &PackingConfig) -> Importer {
        Importer {
            meter_threshold: config.meter_threshold,
        }
    }

    /// Order lines with invalid lengths are imported as they are: the resulting piece is unpackable.
    pub fn import_order_line(&self, ext_line: &ExtOrderLine) -> Piece {
        let width = normalize_length(ext_line.width, self.meter_threshold);
        let height = normalize_length(ext_line.height, self.meter_threshold);
        if width == 0.0 || height == 0.0 {
            warn!(
                "order line {} has invalid dimensions ({:?} x {:?}), it will not be packed",
                ext_line.id, ext_line.width, ext_line.height
            );
        }
        Piece {
            id: ext_line.id.clone(),
            order_line_id: ext_line.id.clone(),
            description: ext_line.description.clone(),
            width,
            height,
            material_id: ext_line.material_id.clone(),
            quantity: ext_line.quantity,
        }
    }

    /// The outline is scaled per axis with the factor applied to the slab's width (x) and height (y).
    /// Malformed outlines are dropped, the slab is then treated as rectangular.
    pub fn import_slab(&self, ext_slab: &ExtSlab) -> Slab {
        let width = normalize_length(ext_slab.width, self.meter_threshold);
        let height = normalize_length(ext_slab.height, self.meter_threshold);

        let mut slab = Slab::new(&ext_slab.id, &ext_slab.material_id, width, height)
            .with_status(ext_slab.status);

        if let Some(ext_points) = ext_slab.polygon.as_ref() {
            let factors = (
                self.factor(ext_slab.width),
                self.factor(ext_slab.height),
            );
            match import_polygon(ext_points, factors) {
                Ok(polygon) => slab = slab.with_polygon(polygon),
                Err(e) => debug!(
                    "outline of slab {} ignored, treated as rectangular: {e}",
                    ext_slab.id
                ),
            }
        }
        slab
    }

    /// Imports all order lines and slabs of an order.
    /// Fails if identifiers of order lines or slabs are not unique.
    pub fn import_order(&self, ext_order: &ExtOrder) -> Result<(Vec<Piece>, SlabCatalog)> {
        ensure!(
            ext_order.order_lines.iter().map(|l| &l.id).all_unique(),
            "order line ids should be unique: {:?}",
            ext_order.order_lines.iter().map(|l| &l.id).duplicates().collect_vec()
        );
        ensure!(
            ext_order.slabs.iter().map(|s| &s.id).all_unique(),
            "slab ids should be unique: {:?}",
            ext_order.slabs.iter().map(|s| &s.id).duplicates().collect_vec()
        );

        let pieces = ext_order
            .order_lines
            .iter()
            .map(|l| self.import_order_line(l))
            .collect_vec();
        let slabs = ext_order
            .slabs
            .iter()
            .map(|s| self.import_slab(s))
            .collect_vec();

        Ok((pieces, SlabCatalog::new(slabs)))
    }

    /// Scale of a slab axis. Axes with an invalid length are left unscaled.
    fn factor(&self, raw: Option<f64>) -> f64 {
        match raw.map(|v| unit_factor(v, self.meter_threshold)) {
            Some(f) if f > 0.0 => f,
            _ => 1.0,
        }
    }
}

fn import_polygon(ext_points: &[ExtPoint], (fx, fy): (f64, f64)) -> Result<SPolygon> {
    let points = ext_points
        .iter()
        .map(|p| Point(p.x * fx, p.y * fy))
        .collect_vec();
    SPolygon::new(points)
}
