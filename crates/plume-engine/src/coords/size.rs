/// Drawing surface size in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Length of the surface diagonal.
    #[inline]
    pub fn diagonal(self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Pixel grid dimensions covering the surface (fractional sizes round down).
    #[inline]
    pub fn pixel_dims(self) -> (usize, usize) {
        (self.width.max(0.0) as usize, self.height.max(0.0) as usize)
    }
}
