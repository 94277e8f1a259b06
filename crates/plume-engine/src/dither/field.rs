use crate::paint::RgbF;

/// Row-major grid of continuous RGB samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorField {
    width: usize,
    height: usize,
    samples: Vec<RgbF>,
}

impl ColorField {
    /// A `width × height` field filled with `color`.
    pub fn filled(width: usize, height: usize, color: RgbF) -> Self {
        Self { width, height, samples: vec![color; width * height] }
    }

    /// Wraps raster-ordered samples.
    ///
    /// # Panics
    /// Panics if `samples.len() != width * height`.
    pub fn from_samples(width: usize, height: usize, samples: Vec<RgbF>) -> Self {
        assert_eq!(samples.len(), width * height, "sample count does not match field size");
        Self { width, height, samples }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn samples(&self) -> &[RgbF] {
        &self.samples
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> RgbF {
        self.samples[y * self.width + x]
    }
}
