use crate::entities::{Slab, Zone, ZoneId};
use crate::geometry::decompose_polygon;
use crate::util::PackingConfig;
use log::debug;

/// Splits a slab into the rectangular zones its pieces are packed into.
///
/// Rectangular slabs (and slabs whose outline cannot be decomposed) yield a single [`ZoneId::Full`] zone
/// covering the bounding rectangle. L-shaped slabs yield zones [`ZoneId::A`] and [`ZoneId::B`], in that order.
/// Degenerate slabs yield a single zone without area, which accepts nothing.
pub fn decompose(slab: &Slab, config: &PackingConfig) -> Vec<Zone> {
    let Some(bbox) = slab.bbox() else {
        debug!(
            "[ZONES] slab {} is degenerate ({}x{}), no usable zone",
            slab.id, slab.width, slab.height
        );
        return vec![Zone::new(ZoneId::Full, 0.0, 0.0, 0.0, 0.0)];
    };
    let full = Zone::from_rect(ZoneId::Full, bbox);
    let Some(polygon) = slab.polygon.as_ref() else {
        return vec![full];
    };
    match decompose_polygon(bbox, polygon, config) {
        Some((a, b)) => vec![Zone::from_rect(ZoneId::A, a), Zone::from_rect(ZoneId::B, b)],
        None => {
            debug!(
                "[ZONES] outline of slab {} could not be decomposed, using its bounding rectangle",
                slab.id
            );
            vec![full]
        }
    }
}
