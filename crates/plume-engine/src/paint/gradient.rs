use crate::coords::{lerp, Vec2};
use crate::dither::ColorField;
use crate::error::PlumeError;

use super::{Rgb8, RgbF};

/// Magnitude below which a conic quadratic term is treated as zero.
const DEGENERATE_EPS: f64 = 1e-9;

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub ratio: f64,
    pub color: Rgb8,
}

impl ColorStop {
    #[inline]
    pub const fn new(ratio: f64, color: Rgb8) -> Self {
        Self { ratio, color }
    }
}

/// Stops kept sorted by ascending, unique ratio.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorStopTable {
    stops: Vec<ColorStop>,
}

impl ColorStopTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A two-stop ramp from `start` at ratio 0 to `end` at ratio 1.
    pub(crate) fn two_stop(start: Rgb8, end: Rgb8) -> Self {
        Self { stops: vec![ColorStop::new(0.0, start), ColorStop::new(1.0, end)] }
    }

    /// Inserts a stop at its sorted position. A stop with an equal ratio is replaced.
    pub fn add_stop(&mut self, ratio: f64, color: Rgb8) -> Result<(), PlumeError> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(PlumeError::StopOutOfRange(ratio));
        }
        // -0.0 and 0.0 are the same stop.
        let ratio = ratio + 0.0;

        let stop = ColorStop::new(ratio, color);
        match self.stops.binary_search_by(|s| s.ratio.total_cmp(&ratio)) {
            Ok(i) => self.stops[i] = stop,
            Err(i) => self.stops.insert(i, stop),
        }
        Ok(())
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Makes the table span `[0, 1]` by duplicating the nearest stop at a
    /// missing end. No-op on an empty table.
    pub fn pad_endpoints(&mut self) {
        if let Some(&first) = self.stops.first() {
            if first.ratio != 0.0 {
                self.stops.insert(0, ColorStop::new(0.0, first.color));
            }
        }
        if let Some(&last) = self.stops.last() {
            if last.ratio != 1.0 {
                self.stops.push(ColorStop::new(1.0, last.color));
            }
        }
    }

    /// Interpolated color at ratio `t`.
    ///
    /// Requires a padded table (see [`pad_endpoints`](Self::pad_endpoints)).
    /// `t` is clamped to `[0, 1]`; `t == 1` uses the final bracket.
    pub fn color_at_ratio(&self, t: f64) -> RgbF {
        debug_assert!(self.stops.len() >= 2, "color_at_ratio on an unpadded table");

        let t = t.clamp(0.0, 1.0);
        let last = self.stops.len() - 1;
        let hi = if t >= 1.0 {
            last
        } else {
            self.stops.iter().position(|s| t < s.ratio).unwrap_or(last)
        }
        .max(1);

        let s0 = self.stops[hi - 1];
        let s1 = self.stops[hi];
        let f = (t - s0.ratio) / (s1.ratio - s0.ratio);
        s0.color.to_f64().lerp(s1.color.to_f64(), f)
    }
}

/// Circle in surface pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { center: Vec2::new(x, y), radius }
    }
}

/// Two circles spanning a conic gradient: `start` is ratio 0, `end` is ratio 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FocalGeometry {
    pub start: Circle,
    pub end: Circle,
}

impl FocalGeometry {
    #[inline]
    pub const fn new(start: Circle, end: Circle) -> Self {
        Self { start, end }
    }

    /// The interpolated circle at parameter `t`.
    pub fn circle_at(&self, t: f64) -> Circle {
        Circle {
            center: Vec2::new(
                lerp(self.start.center.x, self.end.center.x, t),
                lerp(self.start.center.y, self.end.center.y, t),
            ),
            radius: lerp(self.start.radius, self.end.radius, t),
        }
    }
}

/// Conic gradient evaluator.
///
/// A point's ratio is the largest `t` whose interpolated circle passes
/// through it, clamped to `[0, 1]`; the color is the stop ramp at that ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientField {
    geometry: FocalGeometry,
    stops: ColorStopTable,
    // Quadratic terms that do not depend on the query point.
    a: f64,
    delta: Vec2,
    b_const: f64,
    r0_sq: f64,
    coincident: bool,
}

impl GradientField {
    /// Builds an evaluator, padding `stops` to span `[0, 1]`.
    ///
    /// Returns `None` for an empty stop table.
    pub fn new(geometry: FocalGeometry, mut stops: ColorStopTable) -> Option<Self> {
        if stops.is_empty() {
            return None;
        }
        stops.pad_endpoints();
        Some(Self::from_padded(geometry, stops))
    }

    /// Builds an evaluator over a table already spanning `[0, 1]`.
    pub(crate) fn from_padded(geometry: FocalGeometry, stops: ColorStopTable) -> Self {
        debug_assert!(stops.len() >= 2, "stop table is not padded");

        let delta = geometry.end.center - geometry.start.center;
        let r0 = geometry.start.radius;
        let dr = geometry.end.radius - r0;

        Self {
            geometry,
            stops,
            a: dr * dr - delta.x * delta.x - delta.y * delta.y,
            delta,
            b_const: 2.0 * r0 * dr,
            r0_sq: r0 * r0,
            coincident: delta.length() < DEGENERATE_EPS && dr.abs() < DEGENERATE_EPS,
        }
    }

    #[inline]
    pub fn stops(&self) -> &ColorStopTable {
        &self.stops
    }

    /// Gradient ratio at `p`, or `None` when no interpolated circle passes through it.
    ///
    /// Coincident focal circles have no conic solution; they ramp radially
    /// from the shared center out to the radius instead.
    pub fn ratio_at(&self, p: Vec2) -> Option<f64> {
        let d = p - self.geometry.start.center;
        if self.coincident {
            let r = self.geometry.start.radius.max(self.geometry.end.radius);
            let t = if r > 0.0 { d.length() / r } else { 0.0 };
            return Some(t.clamp(0.0, 1.0));
        }

        let b = self.b_const + 2.0 * (d.x * self.delta.x + d.y * self.delta.y);
        let c = self.r0_sq - d.x * d.x - d.y * d.y;

        let t = if self.a.abs() < DEGENERATE_EPS {
            // Linear ramp: b·t + c = 0.
            if b.abs() < DEGENERATE_EPS {
                return None;
            }
            -c / b
        } else {
            let discrim = b * b - 4.0 * self.a * c;
            if discrim < 0.0 {
                return None;
            }
            let sq = discrim.sqrt();
            let t0 = (-b + sq) / (2.0 * self.a);
            let t1 = (-b - sq) / (2.0 * self.a);
            t0.max(t1)
        };

        Some(t.clamp(0.0, 1.0))
    }

    /// Color at `p`, or `None` outside the gradient's cone.
    #[inline]
    pub fn color_at(&self, p: Vec2) -> Option<RgbF> {
        self.ratio_at(p).map(|t| self.stops.color_at_ratio(t))
    }

    /// Samples every integer pixel position of a `width × height` grid in raster order.
    ///
    /// Positions outside the cone repeat the previous sample; the first stop's
    /// color stands in when the very first sample is outside.
    pub fn render(&self, width: usize, height: usize) -> ColorField {
        let mut samples = Vec::with_capacity(width * height);
        let mut previous = self.stops.color_at_ratio(0.0);

        for y in 0..height {
            for x in 0..width {
                let color = self
                    .color_at(Vec2::new(x as f64, y as f64))
                    .unwrap_or(previous);
                samples.push(color);
                previous = color;
            }
        }

        ColorField::from_samples(width, height, samples)
    }
}
