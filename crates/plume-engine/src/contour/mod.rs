//! Fractal contours: randomized outlines built by midpoint displacement.

mod generator;

pub use generator::{FractalContourGenerator, MAX_ITERATIONS};

/// One normalized contour sample. `x` maps to angle, `y` to radius.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ContourPoint {
    pub x: f64,
    pub y: f64,
}

impl ContourPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered samples from `x = 0` to `x = 1`, strictly increasing in `x`.
///
/// Immutable once generated; owners replace contours wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<ContourPoint>,
}

impl Contour {
    #[inline]
    pub(crate) fn from_points(points: Vec<ContourPoint>) -> Self {
        debug_assert!(points.len() >= 2);
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[ContourPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ContourPoint> {
        self.points.iter()
    }
}
