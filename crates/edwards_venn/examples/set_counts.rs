//! Build a diagram and print one summary line per set boundary.
//!
//! Usage:
//!   cargo run -p edwards_venn --example set_counts -- [n] [points]
//!
//! Defaults to n = 6 and 1000 points per curve. Logs at info level; pieces
//! that receive no points show up as warnings.

use anyhow::{Context, Result};
use edwards_venn::{build, CurveKind};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let mut args = std::env::args().skip(1);
    let n: usize = match args.next() {
        Some(s) => s.parse().with_context(|| format!("parsing set count {s:?}"))?,
        None => 6,
    };
    let points: usize = match args.next() {
        Some(s) => s.parse().with_context(|| format!("parsing point budget {s:?}"))?,
        None => 1000,
    };
    tracing::info!(n, points, "build");

    let diagram = build(n, points)?;
    for s in &diagram {
        let label = match s.kind {
            CurveKind::Circle => "circle".to_string(),
            CurveKind::BottomHemisphere => "bottom hemisphere".to_string(),
            CurveKind::RightHemisphere => "right hemisphere".to_string(),
            CurveKind::Ring { iteration } => format!("ring {iteration} ({} arcs)", 4usize << iteration),
        };
        let (lo, hi) = s.curve.bounds();
        println!(
            "set {}: {label}, {} points, perimeter {:.4}, max gap {:.4}, bounds [{:.3}, {:.3}] x [{:.3}, {:.3}]",
            s.set,
            s.curve.len(),
            s.curve.perimeter(),
            s.curve.max_gap(),
            lo.x,
            hi.x,
            lo.y,
            hi.y
        );
    }
    Ok(())
}
