//! Paint model: colors, stop tables, the conic gradient evaluator and stroke brushes.

pub mod brush;
pub mod color;
pub mod gradient;

pub use brush::RadialBrush;
pub use color::{Rgb8, Rgba, RgbF};
pub use gradient::{Circle, ColorStop, ColorStopTable, FocalGeometry, GradientField};

/// Stroke paint source.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Radial(RadialBrush),
}

impl Paint {
    #[inline]
    pub fn solid(color: Rgba) -> Self {
        Paint::Solid(color)
    }
}
