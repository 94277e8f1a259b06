use crate::coords::Vec2;
use crate::dither::PixelBuffer;
use crate::paint::Paint;
use crate::surface::Transform;

/// Recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Pixel contents replaced wholesale (background painting).
    Pixels(PixelBuffer),
    Stroke(StrokeCmd),
}

/// One stroked path.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    /// Transform active when the stroke was issued.
    pub transform: Transform,
    /// Vertices in local coordinates.
    pub points: Vec<Vec2>,
    pub closed: bool,
    pub paint: Paint,
    pub line_width: f64,
}

impl StrokeCmd {
    /// Vertices mapped through the recorded transform.
    pub fn surface_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().map(|&p| self.transform.apply(p))
    }
}
