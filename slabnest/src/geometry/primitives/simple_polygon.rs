use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, Rect};
use anyhow::{Result, ensure};
use itertools::Itertools;
use ordered_float::OrderedFloat;

/// Simple polygon: a single closed outline without holes, given as an ordered list of points.
/// The outline is implicitly closed, the last point connects back to the first.
#[derive(Clone, Debug)]
pub struct SPolygon {
    /// Set of bounds describing the polygon
    pub points: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    /// Area of its interior
    pub area: f64,
}

impl SPolygon {
    /// Create a new simple polygon from a set of points.
    /// Either winding direction is accepted.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        ensure!(
            points.len() >= 3,
            "simple polygon must have at least 3 points: {points:?}"
        );
        ensure!(
            points.iter().all(|p| p.is_finite()),
            "simple polygon contains non-finite coordinates: {points:?}"
        );
        let area = SPolygon::calculate_area(&points);
        ensure!(area > 0.0, "simple polygon has no area: {points:?}");

        let bbox = SPolygon::generate_bounding_box(&points)?;

        Ok(SPolygon { points, bbox, area })
    }

    /// Shoelace formula, positive for counter-clockwise outlines.
    pub fn calculate_signed_area(points: &[Point]) -> f64 {
        //https://en.wikipedia.org/wiki/Shoelace_formula
        let sigma: f64 = points
            .iter()
            .circular_tuple_windows()
            .map(|(Point(x_i, y_i), Point(x_j, y_j))| x_i * y_j - x_j * y_i)
            .sum();
        0.5 * sigma
    }

    pub fn calculate_area(points: &[Point]) -> f64 {
        SPolygon::calculate_signed_area(points).abs()
    }

    pub fn generate_bounding_box(points: &[Point]) -> Result<Rect> {
        let (x_min, x_max) = points
            .iter()
            .map(|p| p.x())
            .minmax_by_key(|&x| OrderedFloat(x))
            .into_option()
            .unwrap_or((0.0, 0.0));
        let (y_min, y_max) = points
            .iter()
            .map(|p| p.y())
            .minmax_by_key(|&y| OrderedFloat(y))
            .into_option()
            .unwrap_or((0.0, 0.0));
        Rect::try_new(x_min, y_min, x_max, y_max)
    }

    /// Sorted distinct x-coordinates of the outline. Values within `tolerance` of each other are merged.
    pub fn distinct_xs(&self, tolerance: f64) -> Vec<f64> {
        distinct_sorted(self.points.iter().map(|p| p.x()), tolerance)
    }

    /// Sorted distinct y-coordinates of the outline. Values within `tolerance` of each other are merged.
    pub fn distinct_ys(&self, tolerance: f64) -> Vec<f64> {
        distinct_sorted(self.points.iter().map(|p| p.y()), tolerance)
    }

    /// True if one of the outline's points lies within `tolerance` of `point` along both axes.
    pub fn has_vertex_at(&self, point: Point, tolerance: f64) -> bool {
        self.points
            .iter()
            .any(|p| (p.x() - point.x()).abs() <= tolerance && (p.y() - point.y()).abs() <= tolerance)
    }
}

fn distinct_sorted(values: impl Iterator<Item = f64>, tolerance: f64) -> Vec<f64> {
    values
        .sorted_by_key(|&v| OrderedFloat(v))
        .dedup_by(|a, b| (b - a).abs() <= tolerance)
        .collect_vec()
}

impl Shape for SPolygon {
    fn area(&self) -> f64 {
        self.area
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> SPolygon {
        // 300 x 150 with the top-right 100 x 50 notch removed
        SPolygon::new(vec![
            Point(0.0, 0.0),
            Point(300.0, 0.0),
            Point(300.0, 100.0),
            Point(200.0, 100.0),
            Point(200.0, 150.0),
            Point(0.0, 150.0),
        ])
        .unwrap()
    }

    #[test]
    fn shoelace_area_is_winding_independent() {
        let poly = l_shape();
        assert_eq!(poly.area(), 300.0 * 150.0 - 100.0 * 50.0);

        let reversed = SPolygon::new(poly.points.iter().rev().copied().collect()).unwrap();
        assert_eq!(reversed.area(), poly.area());
        assert!(SPolygon::calculate_signed_area(&reversed.points) < 0.0);
    }

    #[test]
    fn distinct_coordinates_merge_within_tolerance() {
        let poly = SPolygon::new(vec![
            Point(0.0, 0.0),
            Point(300.0, 0.0),
            Point(300.0, 100.0),
            Point(200.004, 100.0),
            Point(199.998, 150.0),
            Point(0.0, 150.0),
        ])
        .unwrap();
        assert_eq!(poly.distinct_xs(0.01).len(), 3);
        assert_eq!(poly.distinct_ys(0.01), vec![0.0, 100.0, 150.0]);
    }

    #[test]
    fn vertex_lookup_within_tolerance() {
        let poly = l_shape();
        assert!(poly.has_vertex_at(Point(200.0, 100.0), 0.01));
        assert!(poly.has_vertex_at(Point(299.995, 0.004), 0.01));
        assert!(!poly.has_vertex_at(Point(300.0, 150.0), 0.01));
        //both coordinates must match the same point
        assert!(!poly.has_vertex_at(Point(200.0, 0.0), 0.01));
        assert_eq!(poly.bbox(), Rect::try_new(0.0, 0.0, 300.0, 150.0).unwrap());
    }

    #[test]
    fn rejects_degenerate_outlines() {
        assert!(SPolygon::new(vec![Point(0.0, 0.0), Point(1.0, 1.0)]).is_err());
        assert!(SPolygon::new(vec![Point(0.0, 0.0), Point(1.0, 1.0), Point(2.0, 2.0)]).is_err());
        assert!(
            SPolygon::new(vec![Point(0.0, 0.0), Point(f64::NAN, 1.0), Point(2.0, 0.0)]).is_err()
        );
    }
}
