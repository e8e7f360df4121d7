//! Planar geometry kernel: point distance and polygon area.

use nalgebra::Point2;

/// Euclidean distance between two points.
///
/// # Example
///
/// ```
/// use polymesh_types::{distance, Point2};
///
/// let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn distance(p1: &Point2<f64>, p2: &Point2<f64>) -> f64 {
    (p2 - p1).norm()
}

/// Signed area of a polygon given its boundary in order (shoelace formula).
///
/// Positive for counter-clockwise boundaries, negative for clockwise ones.
/// Returns `0.0` for fewer than 3 points.
#[must_use]
pub fn signed_polygon_area(points: &[Point2<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let twice_area: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();

    twice_area * 0.5
}

/// Unsigned area of a polygon given its boundary in order.
///
/// Uses the shoelace formula, including the closing segment from the last
/// point back to the first. The result does not depend on orientation or on
/// which boundary point comes first.
///
/// A polygon needs at least 3 points; fewer are treated as degenerate and
/// yield `0.0`.
///
/// # Example
///
/// ```
/// use polymesh_types::{polygon_area, Point2};
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// assert!((polygon_area(&square) - 1.0).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn polygon_area(points: &[Point2<f64>]) -> f64 {
    signed_polygon_area(points).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 5.0);
        assert_relative_eq!(distance(&a, &b), 5.0);
        assert_relative_eq!(distance(&b, &a), 5.0);
    }

    #[test]
    fn distance_of_coincident_points_is_zero() {
        let p = Point2::new(0.25, -3.0);
        assert!(distance(&p, &p) == 0.0);
    }

    #[test]
    fn unit_square_area() {
        let square = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_relative_eq!(polygon_area(&square), 1.0);
    }

    #[test]
    fn right_triangle_area() {
        let tri = pts(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0)]);
        assert_relative_eq!(polygon_area(&tri), 2.0);
    }

    #[test]
    fn signed_area_follows_orientation() {
        let ccw = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert_relative_eq!(signed_polygon_area(&ccw), 1.0);
        assert_relative_eq!(signed_polygon_area(&cw), -1.0);
    }

    #[test]
    fn concave_polygon_area() {
        // L-shape: 2x2 square minus its top-right 1x1 quadrant
        let l_shape = pts(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]);
        assert_relative_eq!(polygon_area(&l_shape), 3.0);
    }

    #[test]
    fn collinear_points_have_zero_area() {
        let line = pts(&[(0.0, 0.0), (1.0, 1.0), (3.0, 3.0)]);
        assert!(polygon_area(&line) == 0.0);
    }

    #[test]
    fn fewer_than_three_points_is_degenerate() {
        assert!(polygon_area(&[]) == 0.0);
        assert!(polygon_area(&pts(&[(0.0, 0.0), (1.0, 0.0)])) == 0.0);
    }
}
