//! Rounded rectangles sampled evenly along their perimeter.
//!
//! Model
//! - Four straight edges plus four quarter-circle corners of radius `r`
//!   centered at the inset corners `(left + r, bottom + r)` etc.
//! - Traversal is counter-clockwise: bottom edge (left → right), bottom-right
//!   corner (−90° → 0°), right edge (up), top-right corner (0° → 90°), top edge
//!   (right → left), top-left corner (90° → 180°), left edge (down),
//!   bottom-left corner (180° → 270°).
//! - Edges start exactly at their start corner and exclude the end corner,
//!   which belongs to the following arc.

use super::arc::CircularArc;
use super::segment::Segment;
use super::SampleCfg;
use crate::curve::Curve;
use crate::error::VennError;
use nalgebra::Vector2;
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Axis-aligned rectangle with rounded corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RoundedRect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub radius: f64,
}

impl RoundedRect {
    /// Construct without checks; see [`RoundedRect::validate`].
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64, radius: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            radius,
        }
    }

    /// Reject shapes that are not a proper rounded rectangle. Never clamps.
    pub fn validate(&self) -> Result<(), VennError> {
        let vals = [self.left, self.right, self.top, self.bottom, self.radius];
        if !vals.iter().all(|v| v.is_finite()) {
            return Err(VennError::geometry("edges and radius must be finite"));
        }
        if self.right <= self.left {
            return Err(VennError::geometry(format!(
                "right ({}) must exceed left ({})",
                self.right, self.left
            )));
        }
        if self.top <= self.bottom {
            return Err(VennError::geometry(format!(
                "top ({}) must exceed bottom ({})",
                self.top, self.bottom
            )));
        }
        let half_min = 0.5 * (self.right - self.left).min(self.top - self.bottom);
        if self.radius <= 0.0 || self.radius >= half_min {
            return Err(VennError::geometry(format!(
                "radius {} must lie in (0, {half_min})",
                self.radius
            )));
        }
        Ok(())
    }

    /// Length of each horizontal edge (without corners).
    #[inline]
    pub fn horizontal_length(&self) -> f64 {
        self.right - self.left - 2.0 * self.radius
    }

    /// Length of each vertical edge (without corners).
    #[inline]
    pub fn vertical_length(&self) -> f64 {
        self.top - self.bottom - 2.0 * self.radius
    }

    /// Exact perimeter: straight edges plus one full circle of corners.
    pub fn perimeter(&self) -> f64 {
        2.0 * self.horizontal_length() + 2.0 * self.vertical_length() + TAU * self.radius
    }

    /// Sample with the default rounding policy.
    pub fn sample(&self, total_points: usize) -> Result<Curve, VennError> {
        self.sample_with(&SampleCfg::with_total_points(total_points))
    }

    /// Sample roughly `cfg.total_points` points evenly along the perimeter.
    pub fn sample_with(&self, cfg: &SampleCfg) -> Result<Curve, VennError> {
        cfg.validate()?;
        self.validate()?;

        let Self {
            left,
            right,
            top,
            bottom,
            radius: r,
        } = *self;
        let density = cfg.density(self.perimeter());
        let h_count = cfg.rounding.count(self.horizontal_length() * density);
        let v_count = cfg.rounding.count(self.vertical_length() * density);
        let c_count = cfg.rounding.count(FRAC_PI_2 * r * density);

        let pieces = [
            ("horizontal", h_count),
            ("vertical", v_count),
            ("corner", c_count),
        ];
        let starved: Vec<&str> = pieces
            .into_iter()
            .filter(|&(_, n)| n == 0)
            .map(|(piece, _)| piece)
            .collect();
        if !starved.is_empty() {
            tracing::warn!(
                ?starved,
                total_points = cfg.total_points,
                "rounded rect pieces received no points"
            );
        }

        let edge = |from: Vector2<f64>, to: Vector2<f64>, count: usize| {
            Segment::new(from, to).sample(count, density)
        };
        let corner = |cx: f64, cy: f64, start: f64| {
            CircularArc::new(Vector2::new(cx, cy), r, start, FRAC_PI_2).sample(c_count)
        };

        let mut points = Vec::with_capacity(2 * h_count + 2 * v_count + 4 * c_count);
        points.extend(edge(
            Vector2::new(left + r, bottom),
            Vector2::new(right - r, bottom),
            h_count,
        ));
        points.extend(corner(right - r, bottom + r, -FRAC_PI_2));
        points.extend(edge(
            Vector2::new(right, bottom + r),
            Vector2::new(right, top - r),
            v_count,
        ));
        points.extend(corner(right - r, top - r, 0.0));
        points.extend(edge(
            Vector2::new(right - r, top),
            Vector2::new(left + r, top),
            h_count,
        ));
        points.extend(corner(left + r, top - r, FRAC_PI_2));
        points.extend(edge(
            Vector2::new(left, top - r),
            Vector2::new(left, bottom + r),
            v_count,
        ));
        points.extend(corner(left + r, bottom + r, PI));

        Curve::new(points).ok_or_else(|| {
            VennError::empty(format!(
                "{} points are too few for a rounded rect of perimeter {}",
                cfg.total_points,
                self.perimeter()
            ))
        })
    }
}

/// Sample the rounded rectangle with the given edges and corner radius.
pub fn sample(
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    radius: f64,
    total_points: usize,
) -> Result<Curve, VennError> {
    RoundedRect::new(left, right, top, bottom, radius).sample(total_points)
}
