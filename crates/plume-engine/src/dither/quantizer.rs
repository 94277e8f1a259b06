use serde::Deserialize;

use super::{ColorField, Pixel, PixelBuffer};

// Forward diffusion weights (sum to 1).
const RIGHT: f64 = 7.0 / 16.0;
const DOWN_LEFT: f64 = 3.0 / 16.0;
const DOWN: f64 = 5.0 / 16.0;
const DOWN_RIGHT: f64 = 1.0 / 16.0;

/// How diffusion treats neighbors that fall outside the current pixel's row.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgePolicy {
    /// Neighbor indices are computed on the flat buffer, so error pushed past
    /// the last column lands at the start of the next row, and down-left from
    /// the first column lands on the last pixel of the current row. Writes
    /// past the end of the buffer are dropped.
    #[default]
    FlatBleed,
    /// Neighbors outside the image are skipped.
    RowClamped,
}

/// Truncating quantizer with four-neighbor forward error diffusion.
///
/// Pixels are processed in raster order; each channel is diffused
/// independently. Output alpha is always 255.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ErrorDiffusionQuantizer {
    edge: EdgePolicy,
}

impl ErrorDiffusionQuantizer {
    #[inline]
    pub const fn new(edge: EdgePolicy) -> Self {
        Self { edge }
    }

    pub fn quantize(&self, field: &ColorField) -> PixelBuffer {
        let width = field.width();
        let samples = field.samples();

        let mut r: Vec<f64> = samples.iter().map(|c| c.r).collect();
        let mut g: Vec<f64> = samples.iter().map(|c| c.g).collect();
        let mut b: Vec<f64> = samples.iter().map(|c| c.b).collect();

        for channel in [&mut r, &mut g, &mut b] {
            self.diffuse(channel, width);
        }

        let mut out = PixelBuffer::new(width, field.height());
        for (i, px) in out.pixels_mut().iter_mut().enumerate() {
            // `as` saturates, so stray values outside 0..=255 cannot wrap.
            *px = Pixel::opaque(r[i] as u8, g[i] as u8, b[i] as u8);
        }
        out
    }

    fn diffuse(&self, buf: &mut [f64], width: usize) {
        let len = buf.len();

        for i in 0..len {
            let value = buf[i];
            let err = value - value.trunc();
            if err == 0.0 {
                continue;
            }

            let col = i % width;
            let has_right = col + 1 < width;
            let has_left = col > 0;

            let targets = [
                (i + 1, RIGHT, has_right),
                (i + width - 1, DOWN_LEFT, has_left),
                (i + width, DOWN, true),
                (i + width + 1, DOWN_RIGHT, has_right),
            ];

            for (j, weight, in_row) in targets {
                if j >= len || (self.edge == EdgePolicy::RowClamped && !in_row) {
                    continue;
                }
                buf[j] += weight * err;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::RgbF;

    fn red_field(width: usize, height: usize, values: &[f64]) -> ColorField {
        let samples = values.iter().map(|&v| RgbF::new(v, 0.0, 0.0)).collect();
        ColorField::from_samples(width, height, samples)
    }

    fn reds(buf: &PixelBuffer) -> Vec<u8> {
        buf.pixels().iter().map(|p| p.r).collect()
    }

    // ── basic quantization ────────────────────────────────────────────────

    #[test]
    fn integral_field_passes_through() {
        let field = ColorField::filled(5, 4, RgbF::new(12.0, 200.0, 255.0));
        let out = ErrorDiffusionQuantizer::default().quantize(&field);
        assert!(out.pixels().iter().all(|&p| p == Pixel::opaque(12, 200, 255)));
    }

    #[test]
    fn alpha_is_always_opaque() {
        let field = ColorField::filled(3, 3, RgbF::new(0.4, 0.4, 0.4));
        let out = ErrorDiffusionQuantizer::default().quantize(&field);
        assert!(out.pixels().iter().all(|p| p.a == 255));
    }

    #[test]
    fn constant_field_preserves_mean() {
        let (w, h) = (64, 64);
        let input = 100.3;
        let field = ColorField::filled(w, h, RgbF::new(input, input, input));

        for edge in [EdgePolicy::FlatBleed, EdgePolicy::RowClamped] {
            let out = ErrorDiffusionQuantizer::new(edge).quantize(&field);
            assert!(out.pixels().iter().all(|p| p.r == 100 || p.r == 101));

            // Only error pushed off the image is lost: at most the border pixels' worth.
            let sum_out: f64 = out.pixels().iter().map(|p| p.r as f64).sum();
            let lost = input * (w * h) as f64 - sum_out;
            assert!(lost >= 0.0 && lost < (w + h) as f64, "{edge:?} lost {lost}");

            let mean = sum_out / (w * h) as f64;
            assert!((mean - input).abs() < 0.03, "{edge:?} mean {mean}");
        }
    }

    #[test]
    fn half_field_dithers_instead_of_banding() {
        let field = ColorField::filled(16, 16, RgbF::new(0.5, 0.5, 0.5));
        let out = ErrorDiffusionQuantizer::default().quantize(&field);
        let ones = out.pixels().iter().filter(|p| p.r == 1).count();
        assert!(ones > 64 && ones < 192, "{ones} of 256 pixels rounded up");
    }

    // ── edge behavior ─────────────────────────────────────────────────────

    #[test]
    fn flat_bleed_pushes_right_edge_error_into_next_row() {
        let field = red_field(2, 2, &[0.0, 0.5, 0.9, 0.0]);
        let out = ErrorDiffusionQuantizer::new(EdgePolicy::FlatBleed).quantize(&field);
        assert_eq!(reds(&out), vec![0, 0, 1, 0]);
    }

    #[test]
    fn row_clamped_keeps_error_inside_the_image() {
        let field = red_field(2, 2, &[0.0, 0.5, 0.9, 0.0]);
        let out = ErrorDiffusionQuantizer::new(EdgePolicy::RowClamped).quantize(&field);
        assert_eq!(reds(&out), vec![0, 0, 0, 0]);
    }

    #[test]
    fn flat_bleed_sends_first_column_down_left_to_end_of_same_row() {
        // Index 0 + width - 1 is the last pixel of row 0.
        let field = red_field(3, 1, &[0.9, 0.0, 0.8]);
        let flat = ErrorDiffusionQuantizer::new(EdgePolicy::FlatBleed).quantize(&field);
        let clamped = ErrorDiffusionQuantizer::new(EdgePolicy::RowClamped).quantize(&field);
        assert_eq!(reds(&flat), vec![0, 0, 1]);
        assert_eq!(reds(&clamped), vec![0, 0, 0]);
    }

    #[test]
    fn single_column_image_does_not_underflow() {
        let field = red_field(1, 3, &[0.7, 0.7, 0.7]);
        let out = ErrorDiffusionQuantizer::default().quantize(&field);
        assert_eq!(out.width(), 1);
        assert_eq!(out.height(), 3);
    }
}
