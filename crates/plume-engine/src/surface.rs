//! The drawing-surface collaborator.
//!
//! The engine never rasterizes paths itself. It issues canvas-style path
//! calls against a [`DrawingSurface`] and hands finished background pixels
//! over in one piece. Hosts implement the trait on top of whatever they draw
//! with; [`DrawList`](crate::scene::DrawList) is the recording implementation.

use crate::coords::{SurfaceSize, Vec2};
use crate::dither::PixelBuffer;
use crate::paint::Paint;

/// Axis-aligned scale followed by translation: `p' = (sx·x + tx, sy·y + ty)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform {
    #[inline]
    pub const fn new(sx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self { sx, sy, tx, ty }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(self.sx * p.x + self.tx, self.sy * p.y + self.ty)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Canvas-style drawing target.
///
/// Path coordinates are local; the surface maps them through the current
/// transform. Paint is interpreted in the same local space.
pub trait DrawingSurface {
    fn size(&self) -> SurfaceSize;

    /// Replaces the current transform.
    fn set_transform(&mut self, transform: Transform);

    /// Erases everything drawn so far.
    fn clear(&mut self);

    /// Replaces the surface contents with `pixels` (raster order, RGBA8).
    fn put_pixels(&mut self, pixels: PixelBuffer);

    /// Discards the pending path.
    fn begin_path(&mut self);

    /// Starts a new subpath at `p`.
    fn move_to(&mut self, p: Vec2);

    fn line_to(&mut self, p: Vec2);

    /// Connects the last vertex back to the first of the current subpath.
    fn close_path(&mut self);

    /// Strokes the pending path.
    fn stroke(&mut self, paint: &Paint, line_width: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_scales_then_translates() {
        let t = Transform::new(0.75, 1.0, 10.0, -4.0);
        assert_eq!(t.apply(Vec2::new(4.0, 2.0)), Vec2::new(13.0, -2.0));
        assert_eq!(Transform::identity().apply(Vec2::new(4.0, 2.0)), Vec2::new(4.0, 2.0));
    }
}
