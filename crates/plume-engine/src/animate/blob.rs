use std::f64::consts::{PI, TAU};
use std::mem;

use rand::Rng;

use crate::contour::{Contour, FractalContourGenerator};
use crate::coords::{lerp, Vec2};
use crate::paint::{Paint, RadialBrush};
use crate::surface::{DrawingSurface, Transform};

use super::{DRIFT_X, DRIFT_Y, PHASE_STEP, WOBBLE_AMPLITUDE, WOBBLE_PERIOD_TICKS, X_SQUEEZE};

/// Lifecycle of a blob.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BlobState {
    Active,
    /// Drifted past the right edge. Terminal.
    Expired,
}

/// One drifting, morphing smoke outline.
#[derive(Debug, Clone)]
pub struct Blob {
    pub(crate) center: Vec2,
    pub(crate) min_radius: f64,
    pub(crate) max_radius: f64,
    pub(crate) paint: Paint,
    pub(crate) phase: f64,
    pub(crate) global_phase: f64,
    pub(crate) morph: f64,
    pub(crate) morph_rate: f64,
    pub(crate) contour_a: Contour,
    pub(crate) contour_b: Contour,
    pub(crate) state: BlobState,
}

impl Blob {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        center: Vec2,
        min_radius: f64,
        max_radius: f64,
        brush: RadialBrush,
        phase: f64,
        global_phase: f64,
        morph_rate: f64,
        contour_a: Contour,
        contour_b: Contour,
    ) -> Self {
        debug_assert_eq!(contour_a.len(), contour_b.len(), "contours must share a depth");
        Self {
            center,
            min_radius,
            max_radius,
            paint: Paint::Radial(brush),
            phase,
            global_phase,
            morph: 0.0,
            morph_rate,
            contour_a,
            contour_b,
            state: BlobState::Active,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    #[inline]
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    #[inline]
    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    #[inline]
    pub fn global_phase(&self) -> f64 {
        self.global_phase
    }

    /// Blend progress from `contour_a` to `contour_b`, in `[0, 1)`.
    #[inline]
    pub fn morph(&self) -> f64 {
        self.morph
    }

    #[inline]
    pub fn contour_a(&self) -> &Contour {
        &self.contour_a
    }

    #[inline]
    pub fn contour_b(&self) -> &Contour {
        &self.contour_b
    }

    #[inline]
    pub fn state(&self) -> BlobState {
        self.state
    }

    /// Smoothstep-like cosine ease of the morph parameter.
    #[inline]
    pub fn ease(&self) -> f64 {
        0.5 - 0.5 * (PI * self.morph).cos()
    }

    /// Vertical oscillation at the given global tick count.
    #[inline]
    pub fn wobble(&self, tick: u64) -> f64 {
        WOBBLE_AMPLITUDE * (self.global_phase + tick as f64 / WOBBLE_PERIOD_TICKS * TAU).sin()
    }

    /// Advances morph, rotation and drift by one tick.
    ///
    /// Returns `true` when a morph cycle completed and a new target contour
    /// was generated.
    pub(crate) fn advance<R: Rng + ?Sized>(
        &mut self,
        generator: &FractalContourGenerator,
        rng: &mut R,
    ) -> bool {
        let mut cycled = false;
        self.morph += self.morph_rate;
        if self.morph >= 1.0 {
            self.morph = 0.0;
            let next = generator.generate(rng);
            self.contour_a = mem::replace(&mut self.contour_b, next);
            cycled = true;
        }

        self.phase += PHASE_STEP;
        self.center.x += DRIFT_X;
        self.center.y += DRIFT_Y;
        cycled
    }

    /// Outline vertices in local (pre-transform) coordinates.
    ///
    /// Both contours share their x samples and end heights, so the first and
    /// last vertex land on the same angle modulo 2π at the same radius.
    pub fn outline(&self) -> Vec<Vec2> {
        let e = self.ease();
        self.contour_a
            .iter()
            .zip(self.contour_b.iter())
            .map(|(p1, p2)| {
                let theta = TAU * lerp(p1.x, p2.x, e) + self.phase;
                let radius = lerp(self.min_radius, self.max_radius, lerp(p1.y, p2.y, e));
                let local = Vec2::from_polar(theta, radius);
                Vec2::new(X_SQUEEZE * local.x, local.y)
            })
            .collect()
    }

    /// Transform placing the outline on the surface at tick `tick`.
    #[inline]
    pub fn transform(&self, tick: u64) -> Transform {
        Transform::new(X_SQUEEZE, 1.0, self.center.x, self.center.y + self.wobble(tick))
    }

    /// Strokes the current outline as a closed path.
    pub(crate) fn draw<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        tick: u64,
        line_width: f64,
    ) {
        let outline = self.outline();
        let Some((&first, rest)) = outline.split_first() else {
            return;
        };

        surface.set_transform(self.transform(tick));
        surface.begin_path();
        surface.move_to(first);
        for &p in rest {
            surface.line_to(p);
        }
        surface.close_path();
        surface.stroke(&self.paint, line_width);
    }

    /// True once the center is more than one outer radius past `surface_width`.
    #[inline]
    pub(crate) fn is_past(&self, surface_width: f64) -> bool {
        self.center.x > surface_width + self.max_radius
    }
}
