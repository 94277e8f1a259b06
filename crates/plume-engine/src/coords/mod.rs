//! Coordinate types shared by the gradient, contour and animation modules.
//!
//! Canonical space:
//! - surface pixels, `f64`
//! - origin top-left
//! - +X right, +Y down

mod size;
mod vec2;

pub use size::SurfaceSize;
pub use vec2::{lerp, Vec2};
