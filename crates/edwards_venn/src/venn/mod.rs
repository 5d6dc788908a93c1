//! Edwards–Venn diagram builder.
//!
//! Purpose
//! - Produce the `n` closed boundary curves of an Edwards–Venn diagram, one
//!   per set, as evenly sampled polylines.
//!
//! Model
//! - Set 1: unit circle centered at the origin.
//! - Set 2: rounded rectangle covering the circle's lower half.
//! - Set 3: rounded rectangle covering the circle's right half.
//! - Set `n ≥ 4`: ring `n − 4` of tangent arcs (see [`crate::sample::ring`]),
//!   whose arc count doubles with every added set.
//! - Each curve depends only on its set index and the sampling config, so
//!   `build(k)` is always a prefix of `build(n)` for `k ≤ n`.

use crate::cfg::{BOTTOM_HEMISPHERE, MAX_SETS, RIGHT_HEMISPHERE};
use crate::curve::Curve;
use crate::error::VennError;
use crate::sample::arc::CircularArc;
use crate::sample::ring::Ring;
use crate::sample::SampleCfg;
use nalgebra::Vector2;
use serde::Serialize;

/// Which construction rule produced a curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CurveKind {
    Circle,
    BottomHemisphere,
    RightHemisphere,
    Ring { iteration: u32 },
}

impl CurveKind {
    /// Rule for the 1-based set index. `None` for set 0 or an unrepresentable ring.
    pub fn for_set(set: usize) -> Option<Self> {
        match set {
            0 => None,
            1 => Some(Self::Circle),
            2 => Some(Self::BottomHemisphere),
            3 => Some(Self::RightHemisphere),
            _ => Ring::for_set(set).map(|r| Self::Ring {
                iteration: r.iteration(),
            }),
        }
    }
}

/// Boundary of one set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetCurve {
    /// 1-based set index.
    pub set: usize,
    pub kind: CurveKind,
    pub curve: Curve,
}

/// All set boundaries of a diagram, ordered by set index.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct VennDiagram {
    sets: Vec<SetCurve>,
}

impl VennDiagram {
    /// Number of sets.
    #[inline]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Curve of the 1-based set index.
    pub fn curve(&self, set: usize) -> Option<&Curve> {
        set.checked_sub(1)
            .and_then(|i| self.sets.get(i))
            .map(|s| &s.curve)
    }

    pub fn sets(&self) -> &[SetCurve] {
        &self.sets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SetCurve> {
        self.sets.iter()
    }

    pub fn curves(&self) -> impl Iterator<Item = &Curve> + '_ {
        self.sets.iter().map(|s| &s.curve)
    }

    pub fn into_curves(self) -> Vec<Curve> {
        self.sets.into_iter().map(|s| s.curve).collect()
    }

    /// Total number of sampled points over all curves.
    pub fn total_points(&self) -> usize {
        self.curves().map(Curve::len).sum()
    }
}

impl<'a> IntoIterator for &'a VennDiagram {
    type Item = &'a SetCurve;
    type IntoIter = std::slice::Iter<'a, SetCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build the `n`-set diagram with `total_points` points per curve (floor rounding).
pub fn build(n: usize, total_points: usize) -> Result<VennDiagram, VennError> {
    build_with_cfg(n, &SampleCfg::with_total_points(total_points))
}

/// Build the `n`-set diagram. `n = 0` yields an empty diagram.
pub fn build_with_cfg(n: usize, cfg: &SampleCfg) -> Result<VennDiagram, VennError> {
    if n > MAX_SETS {
        return Err(VennError::InvalidSetCount { n, max: MAX_SETS });
    }
    cfg.validate()?;
    let sets = (1..=n)
        .map(|set| build_set(set, cfg))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(VennDiagram { sets })
}

/// Boundary of a single set, independent of every other set.
pub fn build_set(set: usize, cfg: &SampleCfg) -> Result<SetCurve, VennError> {
    if set > MAX_SETS {
        return Err(VennError::InvalidSetCount {
            n: set,
            max: MAX_SETS,
        });
    }
    let kind = CurveKind::for_set(set).ok_or(VennError::InvalidSetCount {
        n: set,
        max: MAX_SETS,
    })?;
    let curve = match kind {
        CurveKind::Circle => unit_circle(cfg)?,
        CurveKind::BottomHemisphere => BOTTOM_HEMISPHERE.sample_with(cfg)?,
        CurveKind::RightHemisphere => RIGHT_HEMISPHERE.sample_with(cfg)?,
        CurveKind::Ring { iteration } => Ring::new(iteration)
            .ok_or(VennError::InvalidSetCount {
                n: set,
                max: MAX_SETS,
            })?
            .sample_with(cfg)?,
    };
    tracing::debug!(set, ?kind, points = curve.len(), "built set curve");
    Ok(SetCurve { set, kind, curve })
}

/// `total_points` samples at angles `2πi/total_points` on the unit circle.
fn unit_circle(cfg: &SampleCfg) -> Result<Curve, VennError> {
    cfg.validate()?;
    let points = CircularArc::full_circle(Vector2::zeros(), 1.0)
        .sample(cfg.total_points)
        .collect();
    Curve::new(points).ok_or_else(|| VennError::empty("unit circle"))
}
