use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            [x_min, y_min, x_max, y_max].iter().all(|v| v.is_finite()),
            "non-finite rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle with its bottom-left corner at (`x`, `y`) and the given dimensions.
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        Rect::try_new(x, y, x + width, y + height)
    }

    /// True if `self` lies inside `other`, allowing each side to protrude by at most `tolerance`.
    pub fn fits_within(&self, other: &Rect, tolerance: f64) -> bool {
        self.x_min >= other.x_min - tolerance
            && self.y_min >= other.y_min - tolerance
            && self.x_max <= other.x_max + tolerance
            && self.y_max <= other.y_max + tolerance
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f64::max(a.x_min, b.x_min);
        let y_min = f64::max(a.y_min, b.y_min);
        let x_max = f64::min(a.x_max, b.x_max);
        let y_max = f64::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }

    /// Area covered by the union of `a` and `b`.
    pub fn union_area(a: Rect, b: Rect) -> f64 {
        let overlap = Rect::intersection(a, b).map_or(0.0, |i| i.area());
        a.area() + b.area() - overlap
    }

    pub fn area(&self) -> f64 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_rectangles() {
        assert!(Rect::try_new(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(Rect::from_origin(0.0, 0.0, 10.0, -1.0).is_err());
        assert!(Rect::from_origin(5.0, 5.0, 10.0, 1.0).is_ok());
        assert!(Rect::try_new(0.0, 0.0, f64::INFINITY, 10.0).is_err());
        assert!(Rect::from_origin(0.0, 0.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn union_area_subtracts_overlap() {
        let a = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Rect::try_new(5.0, 0.0, 15.0, 10.0).unwrap();
        assert_eq!(Rect::union_area(a, b), 150.0);

        let c = Rect::try_new(10.0, 0.0, 20.0, 10.0).unwrap();
        assert_eq!(Rect::intersection(a, c), None);
        assert_eq!(Rect::union_area(a, c), 200.0);
    }

    #[test]
    fn fits_within_tolerance() {
        let outer = Rect::try_new(0.0, 0.0, 100.0, 100.0).unwrap();
        let inner = Rect::try_new(10.0, 10.0, 20.0, 20.0).unwrap();
        let protruding = Rect::try_new(50.0, 50.0, 100.005, 100.0).unwrap();
        assert!(inner.fits_within(&outer, 0.0));
        assert!(!outer.fits_within(&inner, 0.01));
        assert!(protruding.fits_within(&outer, 0.01));
        assert!(!protruding.fits_within(&outer, 0.0));
    }
}
