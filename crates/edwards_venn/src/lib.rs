//! Boundary curves of Edwards–Venn diagrams.
//!
//! An Edwards–Venn diagram draws `n` sets as a unit circle, two rounded
//! "hemispheres", and then one ring of tangent arcs per further set, each
//! ring doubling the arc count of the previous one. This crate samples those
//! boundaries as closed polylines with evenly spaced points; rendering and
//! region bookkeeping are left to callers.
//!
//! ```
//! let diagram = edwards_venn::build(4, 1000)?;
//! assert_eq!(diagram.len(), 4);
//! # Ok::<(), edwards_venn::VennError>(())
//! ```

pub mod cfg;
pub mod curve;
pub mod error;
pub mod sample;
pub mod venn;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use curve::Curve;
pub use error::VennError;
pub use nalgebra::Vector2 as Vec2;
pub use sample::{CountRounding, SampleCfg};
pub use venn::{build, build_set, build_with_cfg, CurveKind, SetCurve, VennDiagram};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::curve::Curve;
    pub use crate::error::VennError;
    pub use crate::sample::arc::CircularArc;
    pub use crate::sample::ring::{Ring, RingArc};
    pub use crate::sample::rounded_rect::RoundedRect;
    pub use crate::sample::{CountRounding, SampleCfg};
    pub use crate::venn::{build, build_with_cfg, CurveKind, SetCurve, VennDiagram};
    pub use nalgebra::Vector2 as Vec2;
}
