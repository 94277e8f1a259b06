//! Plume engine.
//!
//! Procedural core of an animated smoke plume:
//! - [`paint`]: color stops and the conic gradient evaluator
//! - [`dither`]: error-diffusion quantization of gradient fields
//! - [`contour`]: midpoint-displacement contours
//! - [`animate`]: blobs morphing between contours
//! - [`smoke`]: the scene tying them to a [`surface::DrawingSurface`]

pub mod animate;
pub mod config;
pub mod contour;
pub mod coords;
pub mod dither;
pub mod error;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod smoke;
pub mod surface;
pub mod time;

pub use config::{RadiusBound, Settings, SmokeConfig};
pub use error::PlumeError;
pub use smoke::Smoke;
