//! Arc-length sampling of composite closed curves.
//!
//! Purpose
//! - Turn a point budget into evenly spaced samples along shapes built from
//!   straight segments and circular arcs.
//!
//! Model
//! - A curve's budget becomes a density `total_points / length`. Every piece
//!   then gets `count(piece_length · density)` points, so spacing is uniform
//!   within a curve and comparable across curves.
//! - Each sample is computed from its index (`start + step·i`); nothing is
//!   accumulated incrementally.
//! - A piece whose count rounds to zero contributes no points. The curve stays
//!   valid with a visible gap; this is logged, not rejected.

pub mod arc;
pub mod ring;
pub mod rounded_rect;
mod segment;

use crate::cfg::DEFAULT_TOTAL_POINTS;
use crate::error::VennError;
use serde::Serialize;

/// How a fractional per-piece point count becomes an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum CountRounding {
    /// Truncate. A curve never exceeds its budget but may fall short by
    /// up to one point per piece.
    #[default]
    Floor,
    /// Round half away from zero. Closer to the budget on average, may
    /// overshoot by up to half a point per piece.
    Nearest,
}

impl CountRounding {
    /// Integer count for an expected (non-negative) number of points.
    #[inline]
    pub fn count(self, expected: f64) -> usize {
        let n = match self {
            CountRounding::Floor => expected.floor(),
            CountRounding::Nearest => expected.round(),
        };
        // `as` saturates: negatives and NaN land on 0.
        n as usize
    }
}

/// Sampling configuration shared by every curve of a diagram.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SampleCfg {
    /// Target number of points per curve (density budget).
    pub total_points: usize,
    pub rounding: CountRounding,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            total_points: DEFAULT_TOTAL_POINTS,
            rounding: CountRounding::Floor,
        }
    }
}

impl SampleCfg {
    /// Default rounding with the given budget.
    pub fn with_total_points(total_points: usize) -> Self {
        Self {
            total_points,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), VennError> {
        if self.total_points == 0 {
            return Err(VennError::density("total_points must be > 0"));
        }
        Ok(())
    }

    /// Points per unit length for a curve of the given length.
    #[inline]
    pub(crate) fn density(&self, length: f64) -> f64 {
        self.total_points as f64 / length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_and_nearest() {
        assert_eq!(CountRounding::Floor.count(374.9999), 374);
        assert_eq!(CountRounding::Nearest.count(374.9999), 375);
        assert_eq!(CountRounding::Nearest.count(0.49), 0);
        assert_eq!(CountRounding::Floor.count(-1.0), 0);
        assert_eq!(CountRounding::Floor.count(f64::NAN), 0);
    }

    #[test]
    fn zero_budget_rejected() {
        let cfg = SampleCfg::with_total_points(0);
        assert!(matches!(
            cfg.validate(),
            Err(VennError::InvalidDensity { .. })
        ));
        assert!(SampleCfg::default().validate().is_ok());
    }
}
