//! Turning continuous color fields into bytes.
//!
//! - [`ColorField`]: row-major grid of fractional RGB samples
//! - [`PixelBuffer`]: row-major RGBA8 pixels handed to the presentation layer
//! - [`ErrorDiffusionQuantizer`]: forward error diffusion between the two

mod field;
mod pixels;
mod quantizer;

pub use field::ColorField;
pub use pixels::{Pixel, PixelBuffer};
pub use quantizer::{EdgePolicy, ErrorDiffusionQuantizer};
