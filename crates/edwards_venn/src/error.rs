//! Error type shared by the samplers and the diagram builder.

use std::fmt;

/// Errors surfaced while sampling curves.
///
/// Zero-point segments are not errors; they are logged and skipped. Only a
/// curve that ends up with no points at all is rejected (`EmptyCurve`).
#[derive(Clone, Debug, PartialEq)]
pub enum VennError {
    /// Shape parameters that describe no valid rounded rectangle.
    InvalidGeometry { reason: String },
    /// Point budget that cannot produce any points.
    InvalidDensity { reason: String },
    /// More sets than the ring construction supports.
    InvalidSetCount { n: usize, max: usize },
    /// Every segment of a curve rounded down to zero points.
    EmptyCurve { reason: String },
}

impl VennError {
    pub(crate) fn geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    pub(crate) fn density(reason: impl Into<String>) -> Self {
        Self::InvalidDensity {
            reason: reason.into(),
        }
    }

    pub(crate) fn empty(reason: impl Into<String>) -> Self {
        Self::EmptyCurve {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for VennError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { reason } => write!(f, "invalid geometry: {reason}"),
            Self::InvalidDensity { reason } => write!(f, "invalid point budget: {reason}"),
            Self::InvalidSetCount { n, max } => {
                write!(f, "cannot build {n} sets (at most {max} supported)")
            }
            Self::EmptyCurve { reason } => write!(f, "curve has no points: {reason}"),
        }
    }
}

impl std::error::Error for VennError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_cause() {
        let e = VennError::geometry("radius must be > 0");
        assert_eq!(e.to_string(), "invalid geometry: radius must be > 0");
        let e = VennError::InvalidSetCount { n: 99, max: 24 };
        assert_eq!(e.to_string(), "cannot build 99 sets (at most 24 supported)");
    }
}
