use std::f64::consts::TAU;

use rand::Rng;
use serde::Deserialize;

use crate::config::Settings;
use crate::contour::FractalContourGenerator;
use crate::coords::{SurfaceSize, Vec2};
use crate::paint::RadialBrush;
use crate::surface::DrawingSurface;

use super::{Blob, BlobState, MORPH_RATE, SPAWN_LIFT};

/// What happens when a blob drifts off the right edge.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpiryPolicy {
    /// The first blob to leave stops the whole animation.
    #[default]
    StopAll,
    /// Each blob is removed on its own; the animation stops when none remain.
    PerBlob,
}

/// Owns the active blobs and steps them one tick at a time.
#[derive(Debug, Clone)]
pub struct BlobMorphAnimator {
    settings: Settings,
    size: SurfaceSize,
    generator: FractalContourGenerator,
    blobs: Vec<Blob>,
    tick_count: u64,
    running: bool,
}

impl BlobMorphAnimator {
    /// An idle animator with no blobs; call [`reseed`](Self::reseed) to start it.
    pub fn new(settings: Settings, size: SurfaceSize) -> Self {
        let generator = FractalContourGenerator::new(settings.iterations);
        Self {
            settings,
            size,
            generator,
            blobs: Vec::new(),
            tick_count: 0,
            running: false,
        }
    }

    #[inline]
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    /// Ticks taken since the last reseed.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Halts the animation; further ticks are no-ops until the next reseed.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("animation stopped after {} ticks", self.tick_count);
        }
        self.running = false;
    }

    /// Discards every blob, spawns a fresh set and restarts the tick counter.
    pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.blobs = (0..self.settings.num_circles).map(|_| self.spawn(rng)).collect();
        self.tick_count = 0;
        self.running = true;
        log::debug!("spawned {} blob(s)", self.blobs.len());
    }

    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Blob {
        let s = &self.settings;
        let max_radius = s.min_max_rad + rng.gen_range(0.0..1.0) * (s.max_max_rad - s.min_max_rad);
        let min_radius = s.min_rad_factor * max_radius;

        let brush = RadialBrush::new(
            min_radius,
            max_radius,
            s.gradient_end.with_alpha(s.smoke_opacity),
            s.gradient_start.with_alpha(s.smoke_opacity),
        );

        let phase = rng.gen_range(0.0..TAU);
        let global_phase = rng.gen_range(0.0..TAU);
        let contour_a = self.generator.generate(rng);
        let contour_b = self.generator.generate(rng);

        log::trace!("blob spawned: max_radius={max_radius:.1} min_radius={min_radius:.1}");

        Blob::new(
            Vec2::new(-max_radius, self.size.height / 2.0 - SPAWN_LIFT),
            min_radius,
            max_radius,
            brush,
            phase,
            global_phase,
            MORPH_RATE,
            contour_a,
            contour_b,
        )
    }

    /// Advances and draws every blob once, in creation order.
    ///
    /// Returns whether the animation is still running afterwards. A stopped
    /// animator draws nothing.
    pub fn tick<S, R>(&mut self, surface: &mut S, rng: &mut R) -> bool
    where
        S: DrawingSurface + ?Sized,
        R: Rng + ?Sized,
    {
        if !self.running {
            return false;
        }

        self.tick_count += 1;
        let tick = self.tick_count;
        let width = self.size.width;
        let line_width = self.settings.line_width;

        for (i, blob) in self.blobs.iter_mut().enumerate() {
            if blob.advance(&self.generator, rng) {
                log::trace!("blob {i}: morph cycle complete at tick {tick}");
            }
            blob.draw(surface, tick, line_width);
            if blob.is_past(width) {
                blob.state = BlobState::Expired;
            }
        }

        match self.settings.expiry {
            ExpiryPolicy::StopAll => {
                if self.blobs.iter().any(|b| b.state == BlobState::Expired) {
                    log::info!("blob left the surface at tick {tick}; stopping animation");
                    self.running = false;
                }
            }
            ExpiryPolicy::PerBlob => {
                let before = self.blobs.len();
                self.blobs.retain(|b| b.state == BlobState::Active);
                if self.blobs.len() < before {
                    log::debug!("{} blob(s) expired at tick {tick}", before - self.blobs.len());
                }
                if self.blobs.is_empty() {
                    log::info!("all blobs left the surface at tick {tick}; stopping animation");
                    self.running = false;
                }
            }
        }

        self.running
    }
}
