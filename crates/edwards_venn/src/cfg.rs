//! Construction constants and defaults.
//!
//! Policy
//! - The diagram layout is fixed: unit circle, two hemispheres, then rings.
//!   The boxes below are the only tunable shapes and are kept as constants
//!   so every caller gets the same picture.

use crate::sample::rounded_rect::RoundedRect;

/// Default points-per-curve budget used by `SampleCfg::default()`.
pub const DEFAULT_TOTAL_POINTS: usize = 1000;

/// Largest set count `build` accepts.
///
/// Set `n` adds a ring of `4·2^(n−4)` arcs; at 24 sets that is already 2^22
/// arcs, far more than any realistic point budget can populate.
pub const MAX_SETS: usize = 24;

/// Corner radius shared by both hemispheres.
pub const HEMISPHERE_RADIUS: f64 = 0.3;

/// Set 2: covers the lower half of the unit circle.
pub const BOTTOM_HEMISPHERE: RoundedRect =
    RoundedRect::new(-3.0, 3.0, 0.0, -1.75, HEMISPHERE_RADIUS);

/// Set 3: covers the right half of the unit circle.
pub const RIGHT_HEMISPHERE: RoundedRect =
    RoundedRect::new(0.0, 3.25, 1.5, -1.5, HEMISPHERE_RADIUS);
