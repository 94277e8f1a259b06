//! The smoke scene: static conic backdrop plus drifting blobs.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animate::BlobMorphAnimator;
use crate::config::{Settings, SmokeConfig};
use crate::coords::SurfaceSize;
use crate::dither::{ErrorDiffusionQuantizer, PixelBuffer};
use crate::error::PlumeError;
use crate::paint::{Circle, ColorStopTable, FocalGeometry, GradientField, Rgb8};
use crate::surface::{DrawingSurface, Transform};

/// Focal circles of the backdrop for a surface of `size`.
///
/// The inner circle is a point right of center in the upper half; the outer
/// circle spans half the diagonal around the upper-middle.
pub fn background_geometry(size: SurfaceSize) -> FocalGeometry {
    let (w, h) = (size.width, size.height);
    FocalGeometry::new(
        Circle::new(w * 0.75, h / 2.0 * 0.75, 0.0),
        Circle::new(w / 2.0, h / 4.0, size.diagonal() / 2.0),
    )
}

/// Evaluates and dithers a conic gradient from `inner` to `outer` over `size`.
pub fn paint_background(
    size: SurfaceSize,
    inner: Rgb8,
    outer: Rgb8,
    quantizer: ErrorDiffusionQuantizer,
) -> Option<PixelBuffer> {
    let mut stops = ColorStopTable::new();
    stops.add_stop(0.0, inner).ok()?;
    stops.add_stop(1.0, outer).ok()?;

    let field = GradientField::new(background_geometry(size), stops)?;
    let (width, height) = size.pixel_dims();
    Some(quantizer.quantize(&field.render(width, height)))
}

/// Smoke plume scene bound to one surface size.
///
/// Single-threaded and tick-driven: an external scheduler calls
/// [`frame`](Self::frame) (or [`tick`](Self::tick)) at
/// [`tick_interval`](Self::tick_interval). All randomness comes from the
/// owned generator `R`.
#[derive(Debug)]
pub struct Smoke<R: Rng = StdRng> {
    settings: Settings,
    size: SurfaceSize,
    animator: BlobMorphAnimator,
    rng: R,
}

impl Smoke<StdRng> {
    /// Validates `config` for `size`, seeding randomness from the OS.
    pub fn new(config: &SmokeConfig, size: SurfaceSize) -> Result<Self, PlumeError> {
        Self::with_rng(config, size, StdRng::from_entropy())
    }

    /// Like [`new`](Self::new) with a reproducible seed.
    pub fn seeded(config: &SmokeConfig, size: SurfaceSize, seed: u64) -> Result<Self, PlumeError> {
        Self::with_rng(config, size, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Smoke<R> {
    /// Validates `config` for `size`. The scene stays idle until
    /// [`regenerate`](Self::regenerate) is called.
    pub fn with_rng(config: &SmokeConfig, size: SurfaceSize, rng: R) -> Result<Self, PlumeError> {
        let settings = config.validate(size)?;
        let animator = BlobMorphAnimator::new(settings.clone(), size);
        Ok(Self { settings, size, animator, rng })
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[inline]
    pub fn animator(&self) -> &BlobMorphAnimator {
        &self.animator
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    /// Period the driver should call [`frame`](Self::frame) at.
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        self.settings.tick_interval
    }

    /// Clears `surface`, repaints the backdrop and respawns every blob.
    ///
    /// Drift, phase, morph progress and the tick counter all restart; no
    /// contour from before the call survives.
    pub fn regenerate<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        if surface.size() != self.size {
            log::warn!(
                "surface is {:?} but scene was configured for {:?}",
                surface.size(),
                self.size
            );
        }

        surface.set_transform(Transform::identity());
        surface.clear();

        let quantizer = ErrorDiffusionQuantizer::new(self.settings.edge_policy);
        match paint_background(
            self.size,
            self.settings.bg_color_inner,
            self.settings.bg_color_outer,
            quantizer,
        ) {
            Some(pixels) => surface.put_pixels(pixels),
            None => log::warn!("background has no color stops; skipping"),
        }

        self.animator.reseed(&mut self.rng);
        log::debug!(
            "scene regenerated: {}x{}, {} blob(s), {} contour iterations",
            self.size.width,
            self.size.height,
            self.animator.blobs().len(),
            self.settings.iterations
        );
    }

    /// Advances one animation step. Returns whether the animation is still running.
    #[inline]
    pub fn tick<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        self.animator.tick(surface, &mut self.rng)
    }

    /// Runs `drawsPerFrame` ticks, stopping early if the animation ends.
    pub fn frame<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        for _ in 0..self.settings.draws_per_frame {
            if !self.tick(surface) {
                return false;
            }
        }
        true
    }

    /// Halts the animation at the current tick boundary.
    pub fn stop(&mut self) {
        self.animator.stop();
    }
}
