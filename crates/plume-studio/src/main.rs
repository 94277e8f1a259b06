use std::time::Instant;

use anyhow::{Context, Result};
use plume_engine::coords::SurfaceSize;
use plume_engine::logging::{init_logging, LoggingConfig};
use plume_engine::scene::DrawList;
use plume_engine::time::IntervalTimer;
use plume_engine::{Smoke, SmokeConfig};

/// Surface the headless driver renders into.
const SURFACE: SurfaceSize = SurfaceSize::new(960.0, 540.0);

/// Safety cap for configurations that never leave the surface.
const MAX_FRAMES: u64 = 100_000;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let src = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read options file {path}"))?;
            SmokeConfig::from_json(&src).with_context(|| format!("invalid options in {path}"))?
        }
        None => SmokeConfig::default(),
    };

    let mut surface = DrawList::new(SURFACE);
    let mut smoke = Smoke::new(&config, SURFACE).context("smoke scene rejected its options")?;

    let started = Instant::now();
    smoke.regenerate(&mut surface);
    log::info!(
        "background painted in {:.1?}, {} blob(s), tick every {:?}",
        started.elapsed(),
        smoke.animator().blobs().len(),
        smoke.tick_interval()
    );

    let mut timer = IntervalTimer::new(smoke.tick_interval());
    let mut frames = 0u64;
    let mut vertices = 0usize;

    while smoke.is_running() && frames < MAX_FRAMES {
        std::thread::sleep(timer.time_until_next(Instant::now()));

        for _ in 0..timer.poll_now() {
            smoke.frame(&mut surface);
            frames += 1;
        }

        vertices += surface.strokes().map(|s| s.points.len()).sum::<usize>();
        surface.clear_strokes();

        if frames > 0 && frames % 250 == 0 {
            log::debug!("frame {frames}: tick {}", smoke.animator().tick_count());
        }
    }

    if smoke.is_running() {
        log::warn!("frame cap reached; stopping");
        smoke.stop();
    }

    log::info!(
        "plume finished: {frames} frames, {} ticks, {vertices} vertices stroked in {:.2?}",
        smoke.animator().tick_count(),
        started.elapsed()
    );
    Ok(())
}
