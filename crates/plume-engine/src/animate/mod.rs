//! Blob morphing and drift.
//!
//! Each [`Blob`] blends between two fractal contours, maps the blend into
//! polar space around its drifting center, and strokes the result once per
//! tick. [`BlobMorphAnimator`] owns the blobs and steps them in creation order.

mod animator;
mod blob;

pub use animator::{BlobMorphAnimator, ExpiryPolicy};
pub use blob::{Blob, BlobState};

/// Horizontal squeeze applied to blob outlines (a foreshortened view).
pub const X_SQUEEZE: f64 = 0.75;
/// Rotation added to each blob per tick, in radians.
pub const PHASE_STEP: f64 = 0.0002;
/// Linear center drift per tick, in pixels.
pub const DRIFT_X: f64 = 0.5;
pub const DRIFT_Y: f64 = 0.04;
/// Vertical oscillation amplitude, in pixels.
pub const WOBBLE_AMPLITUDE: f64 = 40.0;
/// Ticks per full oscillation period.
pub const WOBBLE_PERIOD_TICKS: f64 = 1000.0;
/// Morph progress per tick (one full blend every 250 ticks).
pub const MORPH_RATE: f64 = 1.0 / 250.0;
/// Spawn height above the vertical middle of the surface.
pub const SPAWN_LIFT: f64 = 50.0;
