//! Rings of tangent circular arcs ("tennis-ball" seams).
//!
//! Model
//! - Ring `k` has `m = 4·2^k` arcs. Arc `j` lies on a circle of radius
//!   `ρ = tan(π/m)` centered at distance `R = 1/cos(π/m)` from the origin, at
//!   angle `2πj/m`. With these values neighbouring circles are tangent
//!   (`2R·sin(π/m) = 2ρ`) and every circle meets the unit circle at a right
//!   angle.
//! - Even arcs are convex: they sweep `π + 2π/m` forwards and bulge outside
//!   the unit circle. Odd arcs are concave: they sweep `π − 2π/m` backwards
//!   and dip inside it. Both start a quarter turn before the arc's local
//!   sweep start `2πj/m − π/m`, so each arc ends where the next one begins.
//! - All arcs share one density `total_points / (m·π·ρ)`, hence a convex arc
//!   gets more points than a concave one and the ring totals ≈ the budget.

use super::arc::CircularArc;
use super::SampleCfg;
use crate::cfg::MAX_SETS;
use crate::curve::Curve;
use crate::error::VennError;
use nalgebra::Vector2;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Last ring iteration, drawn for set `MAX_SETS`.
pub const MAX_ITERATION: u32 = (MAX_SETS - 4) as u32;

/// One ring of the recursive construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ring {
    iteration: u32,
    arc_count: usize,
}

/// Geometry of a single arc within a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingArc {
    pub index: usize,
    pub convex: bool,
    /// Angle of the arc's circle center as seen from the origin.
    pub center_angle: f64,
    pub arc: CircularArc,
}

impl RingArc {
    /// Unsigned sweep in radians.
    #[inline]
    pub fn measure(&self) -> f64 {
        self.arc.sweep.abs()
    }
}

impl Ring {
    /// Ring for iteration `k`, with `4·2^k` arcs. `None` past [`MAX_ITERATION`].
    pub fn new(iteration: u32) -> Option<Self> {
        if iteration > MAX_ITERATION {
            return None;
        }
        let arc_count = 1usize.checked_shl(iteration + 2)?;
        Some(Self {
            iteration,
            arc_count,
        })
    }

    /// Ring drawn for the 1-based set index `set` (sets 4, 5, … map to
    /// iterations 0, 1, …).
    pub fn for_set(set: usize) -> Option<Self> {
        let k = set.checked_sub(4)?;
        Self::new(u32::try_from(k).ok()?)
    }

    #[inline]
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    #[inline]
    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    /// Half the angular pitch, `π/m`.
    #[inline]
    fn half_pitch(&self) -> f64 {
        PI / self.arc_count as f64
    }

    /// Distance from the origin to every arc center, `1/cos(π/m)`.
    pub fn center_distance(&self) -> f64 {
        1.0 / self.half_pitch().cos()
    }

    /// Radius shared by every arc, `tan(π/m)`.
    pub fn arc_radius(&self) -> f64 {
        self.half_pitch().tan()
    }

    /// Length estimate used for the shared density: `m` half circles.
    pub fn estimated_length(&self) -> f64 {
        self.arc_count as f64 * PI * self.arc_radius()
    }

    /// Arc `j` (0-based, `j < arc_count`).
    pub fn arc(&self, j: usize) -> RingArc {
        let m = self.arc_count as f64;
        let center_angle = TAU * (j as f64) / m;
        let sweep_start = center_angle - self.half_pitch();
        let convex = j % 2 == 0;
        let sweep = if convex { PI + TAU / m } else { -(PI - TAU / m) };
        let center = Vector2::new(center_angle.cos(), center_angle.sin()) * self.center_distance();
        RingArc {
            index: j,
            convex,
            center_angle,
            arc: CircularArc::new(center, self.arc_radius(), sweep_start - FRAC_PI_2, sweep),
        }
    }

    pub fn arcs(&self) -> impl Iterator<Item = RingArc> + '_ {
        (0..self.arc_count).map(move |j| self.arc(j))
    }

    /// Points given to each arc, in index order, under the shared density.
    pub fn arc_point_counts(&self, cfg: &SampleCfg) -> Vec<usize> {
        let density = cfg.density(self.estimated_length());
        self.arcs()
            .map(|a| cfg.rounding.count(density * a.arc.length()))
            .collect()
    }

    /// Sample every arc in index order into one closed curve.
    pub fn sample_with(&self, cfg: &SampleCfg) -> Result<Curve, VennError> {
        cfg.validate()?;
        let density = cfg.density(self.estimated_length());
        tracing::trace!(
            iteration = self.iteration,
            arcs = self.arc_count,
            center_distance = self.center_distance(),
            arc_radius = self.arc_radius(),
            density,
            "ring"
        );

        // Nearest rounding overshoots by at most half a point per arc.
        let mut points =
            Vec::with_capacity(cfg.total_points.saturating_add(cfg.total_points / 2));
        let mut starved = 0usize;
        for (ring_arc, count) in self.arcs().zip(self.arc_point_counts(cfg)) {
            if count == 0 {
                starved += 1;
            }
            points.extend(ring_arc.arc.sample(count));
        }
        if starved > 0 {
            tracing::warn!(
                iteration = self.iteration,
                arcs = self.arc_count,
                starved,
                total_points = cfg.total_points,
                "ring arcs received no points"
            );
        }

        Curve::new(points).ok_or_else(|| {
            VennError::empty(format!(
                "{} points are too few for a ring of {} arcs",
                cfg.total_points, self.arc_count
            ))
        })
    }

    /// Sample with the default rounding policy.
    pub fn sample(&self, total_points: usize) -> Result<Curve, VennError> {
        self.sample_with(&SampleCfg::with_total_points(total_points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn arc_count_doubles() {
        for k in 0..10 {
            let ring = Ring::new(k).unwrap();
            assert_eq!(ring.arc_count(), 4 << k);
            assert_eq!(ring.iteration(), k);
        }
        assert_eq!(Ring::for_set(4), Ring::new(0));
        assert_eq!(Ring::for_set(6).unwrap().arc_count(), 16);
        assert!(Ring::for_set(3).is_none());
        assert!(Ring::new(200).is_none());
    }

    #[test]
    fn iterations_past_last_set_rejected() {
        let last = Ring::new(MAX_ITERATION).unwrap();
        assert_eq!(Ring::for_set(MAX_SETS), Some(last));
        assert!(Ring::new(MAX_ITERATION + 1).is_none());
        assert!(Ring::for_set(MAX_SETS + 1).is_none());
        // 4·2^61 still fits a usize but could never be sampled
        assert!(Ring::new(61).is_none());
        assert!(Ring::new(u32::MAX).is_none());
    }

    #[test]
    fn first_ring_constants() {
        let ring = Ring::new(0).unwrap();
        assert!((ring.center_distance() - SQRT_2).abs() < EPS);
        assert!((ring.arc_radius() - 1.0).abs() < EPS);
        for a in ring.arcs() {
            assert!((a.arc.center.norm() - SQRT_2).abs() < EPS);
        }
    }

    #[test]
    fn neighbours_are_tangent() {
        for k in 0..6 {
            let ring = Ring::new(k).unwrap();
            let m = ring.arc_count();
            let rho = ring.arc_radius();
            for j in 0..m {
                let a = ring.arc(j);
                let b = ring.arc((j + 1) % m);
                assert!(((a.arc.center - b.arc.center).norm() - 2.0 * rho).abs() < EPS);
                let dtheta = (b.center_angle - a.center_angle).rem_euclid(TAU);
                assert!((dtheta - TAU / m as f64).abs() < EPS);
            }
        }
    }

    #[test]
    fn convex_sweep_exceeds_concave() {
        for k in 0..8 {
            let ring = Ring::new(k).unwrap();
            let (convex, concave) = (ring.arc(0), ring.arc(1));
            assert!(convex.convex && !concave.convex);
            assert!(convex.arc.sweep > 0.0 && concave.arc.sweep < 0.0);
            assert!(convex.measure() > concave.measure());
            let m = ring.arc_count() as f64;
            assert!((convex.measure() - (PI + TAU / m)).abs() < EPS);
            assert!((concave.measure() - (PI - TAU / m)).abs() < EPS);
        }
    }

    #[test]
    fn arcs_chain_end_to_start() {
        let ring = Ring::new(2).unwrap();
        let m = ring.arc_count();
        for j in 0..m {
            let a = ring.arc(j).arc;
            let b = ring.arc((j + 1) % m).arc;
            let end = a.point_at(a.start + a.sweep);
            let start = b.point_at(b.start);
            assert!((end - start).norm() < EPS);
            // junctions sit on the unit circle
            assert!((start.norm() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn convex_bulges_out_concave_dips_in() {
        let ring = Ring::new(1).unwrap();
        for a in ring.arcs() {
            let mid = a.arc.point_at(a.arc.start + 0.5 * a.arc.sweep);
            if a.convex {
                assert!(mid.norm() > 1.0);
            } else {
                assert!(mid.norm() < 1.0);
            }
        }
    }

    /// Walk the curve arc by arc and check every point lies on its own circle.
    fn assert_points_on_own_arcs(ring: &Ring, curve: &Curve, counts: &[usize]) {
        assert_eq!(counts.iter().sum::<usize>(), curve.len());
        let rho = ring.arc_radius();
        let mut pts = curve.iter();
        for (a, &n) in ring.arcs().zip(counts) {
            for p in pts.by_ref().take(n) {
                assert!(((p - a.arc.center).norm() - rho).abs() < EPS);
            }
        }
    }

    #[test]
    fn first_ring_point_split() {
        let ring = Ring::new(0).unwrap();
        let cfg = SampleCfg::with_total_points(1000);
        // convex arcs get 1000·1.5/4 = 375 each, concave 1000·0.5/4 = 125
        let counts = ring.arc_point_counts(&cfg);
        assert_eq!(counts, vec![375, 125, 375, 125]);
        let curve = ring.sample_with(&cfg).unwrap();
        assert_eq!(curve.len(), 1000);
        assert_points_on_own_arcs(&ring, &curve, &counts);
    }

    #[test]
    fn longer_arcs_get_more_points() {
        let ring = Ring::new(3).unwrap();
        let cfg = SampleCfg::with_total_points(4000);
        let counts = ring.arc_point_counts(&cfg);
        assert_eq!(counts.len(), 32);
        let density = 4000.0 / ring.estimated_length();
        for (a, &n) in ring.arcs().zip(&counts) {
            let expected = density * a.arc.length();
            assert!(n as f64 <= expected && n as f64 > expected - 1.0);
        }
        for pair in counts.chunks(2) {
            assert!(pair[0] > pair[1], "convex {} vs concave {}", pair[0], pair[1]);
        }
        let curve = ring.sample_with(&cfg).unwrap();
        assert_points_on_own_arcs(&ring, &curve, &counts);
    }

    #[test]
    fn too_many_arcs_for_budget() {
        let ring = Ring::new(6).unwrap();
        assert!(matches!(ring.sample(10), Err(VennError::EmptyCurve { .. })));
    }
}
