//! Circular arcs with signed sweep.

use nalgebra::Vector2;
use std::f64::consts::TAU;

/// Arc of a circle from angle `start` through `start + sweep` (radians).
///
/// A negative `sweep` traverses clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularArc {
    pub center: Vector2<f64>,
    pub radius: f64,
    pub start: f64,
    pub sweep: f64,
}

impl CircularArc {
    #[inline]
    pub fn new(center: Vector2<f64>, radius: f64, start: f64, sweep: f64) -> Self {
        Self {
            center,
            radius,
            start,
            sweep,
        }
    }

    /// Full counter-clockwise circle starting at angle 0.
    pub fn full_circle(center: Vector2<f64>, radius: f64) -> Self {
        Self::new(center, radius, 0.0, TAU)
    }

    /// Arc length `radius · |sweep|`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    #[inline]
    pub fn point_at(&self, theta: f64) -> Vector2<f64> {
        self.center + Vector2::new(theta.cos(), theta.sin()) * self.radius
    }

    /// `count` points at angles `start + sweep·i/count`. The end angle is
    /// excluded so consecutive arcs can be chained without duplicates.
    pub fn sample(self, count: usize) -> impl Iterator<Item = Vector2<f64>> {
        let n = count as f64;
        (0..count).map(move |i| self.point_at(self.start + self.sweep * (i as f64) / n))
    }
}
