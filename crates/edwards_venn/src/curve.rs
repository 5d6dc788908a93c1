//! Closed polyline made of sampled boundary points.
//!
//! The last point connects back to the first; no duplicate closing point is
//! stored.

use nalgebra::Vector2;
use serde::Serialize;

/// Ordered, closed point sequence with at least one point.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Curve {
    points: Vec<Vector2<f64>>,
}

impl Curve {
    /// Wrap sampled points. `None` if `points` is empty.
    pub fn new(points: Vec<Vector2<f64>>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a constructed curve.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector2<f64>> {
        self.points.iter()
    }

    /// Consecutive edges of the closed polygon, including last → first.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Length of the closed polygon.
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(p, q)| (q - p).norm()).sum()
    }

    /// Largest distance between consecutive points (closing edge included).
    pub fn max_gap(&self) -> f64 {
        self.edges().map(|(p, q)| (q - p).norm()).fold(0.0, f64::max)
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounds(&self) -> (Vector2<f64>, Vector2<f64>) {
        let first = self.points[0];
        self.points[1..]
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)))
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Vector2<f64>;
    type IntoIter = std::slice::Iter<'a, Vector2<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit_square() -> Curve {
        Curve::new(vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn empty_points_rejected() {
        assert!(Curve::new(Vec::new()).is_none());
    }

    #[test]
    fn perimeter_closes_the_loop() {
        let sq = unit_square();
        assert_eq!(sq.len(), 4);
        assert!((sq.perimeter() - 4.0).abs() < 1e-12);
        assert_eq!(sq.edges().count(), 4);
    }

    #[test]
    fn gap_and_bounds() {
        let c = Curve::new(vec![vector![0.0, 0.0], vector![3.0, 0.0], vector![3.0, -2.0]]).unwrap();
        // closing edge (3,-2) -> (0,0) is the longest
        assert!((c.max_gap() - 13f64.sqrt()).abs() < 1e-12);
        let (lo, hi) = c.bounds();
        assert_eq!(lo, vector![0.0, -2.0]);
        assert_eq!(hi, vector![3.0, 0.0]);
    }

    #[test]
    fn single_point_curve() {
        let c = Curve::new(vec![vector![1.0, 2.0]]).unwrap();
        assert_eq!(c.perimeter(), 0.0);
        assert_eq!(c.bounds(), (vector![1.0, 2.0], vector![1.0, 2.0]));
    }
}
