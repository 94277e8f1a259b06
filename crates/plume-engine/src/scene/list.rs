use crate::coords::{SurfaceSize, Vec2};
use crate::dither::PixelBuffer;
use crate::paint::Paint;
use crate::surface::{DrawingSurface, Transform};

use super::{DrawCmd, StrokeCmd};

/// Recording drawing surface.
///
/// Captures the command stream in issue order instead of rasterizing it.
/// Tests inspect it directly; hosts can replay it onto a real canvas.
#[derive(Debug, Clone)]
pub struct DrawList {
    size: SurfaceSize,
    items: Vec<DrawCmd>,

    transform: Transform,
    path: Vec<Vec2>,
    path_closed: bool,
}

impl DrawList {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            items: Vec::new(),
            transform: Transform::identity(),
            path: Vec::new(),
            path_closed: false,
        }
    }

    /// Commands in issue order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    pub fn strokes(&self) -> impl Iterator<Item = &StrokeCmd> {
        self.items.iter().filter_map(|cmd| match cmd {
            DrawCmd::Stroke(s) => Some(s),
            DrawCmd::Pixels(_) => None,
        })
    }

    /// The most recently painted pixel contents.
    pub fn background(&self) -> Option<&PixelBuffer> {
        self.items.iter().rev().find_map(|cmd| match cmd {
            DrawCmd::Pixels(p) => Some(p),
            DrawCmd::Stroke(_) => None,
        })
    }

    /// Drops recorded strokes, keeping painted pixels. Keeps allocated capacity.
    pub fn clear_strokes(&mut self) {
        self.items.retain(|cmd| matches!(cmd, DrawCmd::Pixels(_)));
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }
}

impl DrawingSurface for DrawList {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn clear(&mut self) {
        self.items.clear();
        self.path.clear();
        self.path_closed = false;
    }

    fn put_pixels(&mut self, pixels: PixelBuffer) {
        // Earlier pixels are fully covered; keep only the newest.
        self.items.retain(|cmd| !matches!(cmd, DrawCmd::Pixels(_)));
        self.items.push(DrawCmd::Pixels(pixels));
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.path_closed = false;
    }

    fn move_to(&mut self, p: Vec2) {
        self.path.clear();
        self.path_closed = false;
        self.path.push(p);
    }

    fn line_to(&mut self, p: Vec2) {
        self.path.push(p);
    }

    fn close_path(&mut self) {
        self.path_closed = true;
    }

    fn stroke(&mut self, paint: &Paint, line_width: f64) {
        if self.path.is_empty() {
            return;
        }
        self.items.push(DrawCmd::Stroke(StrokeCmd {
            transform: self.transform,
            points: self.path.clone(),
            closed: self.path_closed,
            paint: paint.clone(),
            line_width,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Rgb8;

    fn list() -> DrawList {
        DrawList::new(SurfaceSize::new(100.0, 50.0))
    }

    #[test]
    fn records_stroke_with_transform() {
        let mut dl = list();
        let paint = Paint::solid(Rgb8::white().with_alpha(1.0));
        dl.set_transform(Transform::new(2.0, 1.0, 5.0, 0.0));
        dl.begin_path();
        dl.move_to(Vec2::new(1.0, 1.0));
        dl.line_to(Vec2::new(2.0, 3.0));
        dl.close_path();
        dl.stroke(&paint, 4.0);

        let s = dl.strokes().next().unwrap();
        assert!(s.closed);
        assert_eq!(s.line_width, 4.0);
        let pts: Vec<Vec2> = s.surface_points().collect();
        assert_eq!(pts, vec![Vec2::new(7.0, 1.0), Vec2::new(9.0, 3.0)]);
    }

    #[test]
    fn empty_path_is_not_stroked() {
        let mut dl = list();
        dl.begin_path();
        dl.stroke(&Paint::solid(Rgb8::black().with_alpha(1.0)), 1.0);
        assert!(dl.items().is_empty());
    }

    #[test]
    fn clear_strokes_keeps_background() {
        let mut dl = list();
        dl.put_pixels(PixelBuffer::new(2, 2));
        dl.move_to(Vec2::zero());
        dl.stroke(&Paint::solid(Rgb8::black().with_alpha(1.0)), 1.0);
        assert_eq!(dl.items().len(), 2);

        dl.clear_strokes();
        assert_eq!(dl.items().len(), 1);
        assert_eq!(dl.background().map(|b| b.width()), Some(2));
    }

    #[test]
    fn clear_erases_everything() {
        let mut dl = list();
        dl.put_pixels(PixelBuffer::new(2, 2));
        dl.clear();
        assert!(dl.background().is_none());
    }
}
