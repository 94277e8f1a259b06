//! Tick scheduling for animation drivers.
//!
//! The engine itself never looks at the clock; drivers use [`IntervalTimer`]
//! to decide how many frames are due and call `Smoke::frame` that many times.

mod interval;

pub use interval::IntervalTimer;
