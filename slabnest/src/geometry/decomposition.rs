use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, Rect, SPolygon};
use crate::util::PackingConfig;
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

/// Cell of the 2x2 grid spanned by an L-shape's three distinct x and y coordinates.
/// `(column, row)`, with `(0, 0)` the bottom-left cell.
type Cell = (usize, usize);

/// Order in which the missing cell of the L is hypothesised: top-right, top-left, bottom-right, bottom-left.
const NOTCH_ORDER: [Cell; 4] = [(1, 1), (0, 1), (1, 0), (0, 0)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cut {
    /// Cut along the middle x-coordinate: a full-height column plus a partial column
    Vertical,
    /// Cut along the middle y-coordinate: a full-width row plus a partial row
    Horizontal,
}

/// Decomposes an axis-aligned L-shaped `polygon` lying inside `bounds` into two rectangles.
///
/// The polygon must span exactly three distinct x- and three distinct y-coordinates, and lie within `bounds`.
/// Candidate pairs are derived from the 3x3 grid of corners (both cuts, every notch position).
/// A notch position is only considered if the outer corner of its cell is not a point of the outline,
/// which tells mirrored L-shapes of equal area apart.
/// Of the remaining candidates, the pair whose covered area deviates least from the polygon's area is returned,
/// provided the deviation is within [`PackingConfig::area_tolerance`].
/// The first rectangle of the pair is the one spanning the full width or height of the shape.
pub fn decompose_polygon(
    bounds: Rect,
    polygon: &SPolygon,
    config: &PackingConfig,
) -> Option<(Rect, Rect)> {
    let tol = config.bounds_tolerance;
    let (xs, ys) = (polygon.distinct_xs(tol), polygon.distinct_ys(tol));
    if xs.len() != 3 || ys.len() != 3 {
        debug!(
            "[ZONES] polygon spans {}x{} distinct coordinates, not an L-shape",
            xs.len(),
            ys.len()
        );
        return None;
    }
    if !polygon.bbox().fits_within(&bounds, tol) {
        debug!("[ZONES] polygon {:?} exceeds the slab bounds {bounds:?}", polygon.bbox());
        return None;
    }
    let (xs, ys) = ([xs[0], xs[1], xs[2]], [ys[0], ys[1], ys[2]]);
    let poly_area = polygon.area();

    let best = NOTCH_ORDER
        .iter()
        .filter(|&&notch| !polygon.has_vertex_at(outer_corner(&xs, &ys, notch), tol))
        .cartesian_product([Cut::Vertical, Cut::Horizontal])
        .filter_map(|(&notch, cut)| candidate_pair(&xs, &ys, notch, cut))
        .map(|(a, b)| {
            let error = (Rect::union_area(a, b) - poly_area).abs();
            (a, b, error)
        })
        //min_by_key returns the first minimum, keeping the candidate order as tie-break
        .min_by_key(|(_, _, error)| OrderedFloat(*error))?;

    let (a, b, error) = best;
    let max_error = config.area_tolerance(poly_area);
    match error <= max_error {
        true => {
            debug!("[ZONES] L-shape decomposed into {a:?} and {b:?} (area error: {error:.3})");
            Some((a, b))
        }
        false => {
            debug!("[ZONES] best decomposition misses the polygon area by {error:.3} > {max_error:.3}");
            None
        }
    }
}

/// Corner of the grid's bounding box that belongs to `cell`
fn outer_corner(xs: &[f64; 3], ys: &[f64; 3], (col, row): Cell) -> Point {
    Point(xs[2 * col], ys[2 * row])
}

fn cell_rect(xs: &[f64; 3], ys: &[f64; 3], (col, row): Cell) -> Option<Rect> {
    Rect::try_new(xs[col], ys[row], xs[col + 1], ys[row + 1]).ok()
}

/// The two rectangles covering the three cells of the grid other than `notch`.
fn candidate_pair(xs: &[f64; 3], ys: &[f64; 3], notch: Cell, cut: Cut) -> Option<(Rect, Rect)> {
    let (n_col, n_row) = notch;
    let (o_col, o_row) = (1 - n_col, 1 - n_row);
    match cut {
        Cut::Vertical => {
            let full = Rect::try_new(xs[o_col], ys[0], xs[o_col + 1], ys[2]).ok()?;
            let partial = cell_rect(xs, ys, (n_col, o_row))?;
            Some((full, partial))
        }
        Cut::Horizontal => {
            let full = Rect::try_new(xs[0], ys[o_row], xs[2], ys[o_row + 1]).ok()?;
            let partial = cell_rect(xs, ys, (o_col, n_row))?;
            Some((full, partial))
        }
    }
}
