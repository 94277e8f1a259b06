use crate::coords::Vec2;

use super::gradient::{Circle, ColorStopTable, FocalGeometry, GradientField};
use super::{Rgb8, Rgba};

/// Translucent radial stroke brush centered on a blob's local origin.
///
/// Ratio 0 sits on the inner radius, ratio 1 on the outer radius. Built once
/// per blob and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialBrush {
    field: GradientField,
    inner: Rgba,
    outer: Rgba,
}

impl RadialBrush {
    pub fn new(inner_radius: f64, outer_radius: f64, inner: Rgba, outer: Rgba) -> Self {
        let geometry = FocalGeometry::new(
            Circle::new(0.0, 0.0, inner_radius),
            Circle::new(0.0, 0.0, outer_radius),
        );
        let stops = ColorStopTable::two_stop(inner.rgb(), outer.rgb());
        let field = GradientField::from_padded(geometry, stops);

        Self { field, inner, outer }
    }

    #[inline]
    pub fn inner(&self) -> Rgba {
        self.inner
    }

    #[inline]
    pub fn outer(&self) -> Rgba {
        self.outer
    }

    /// Brush color at a point in blob-local coordinates.
    ///
    /// Equal radii ramp from the origin out to that radius.
    pub fn sample(&self, local: Vec2) -> Rgba {
        let t = self.field.ratio_at(local).unwrap_or(1.0);
        let rgb: Rgb8 = self.field.stops().color_at_ratio(t).to_rgb8();
        let a = self.inner.a + (self.outer.a - self.inner.a) * t;
        rgb.with_alpha(a)
    }
}
