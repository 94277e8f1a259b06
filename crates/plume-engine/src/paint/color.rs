use std::fmt;
use std::str::FromStr;

use crate::error::PlumeError;

/// 8-bit RGB triple, the unit color stops and configuration colors are given in.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Parses `#rrggbb` (the `#` is optional, digits are case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, PlumeError> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PlumeError::InvalidColor(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| PlumeError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    #[inline]
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba { r: self.r, g: self.g, b: self.b, a: a.clamp(0.0, 1.0) }
    }

    #[inline]
    pub fn to_f64(self) -> RgbF {
        RgbF::new(self.r as f64, self.g as f64, self.b as f64)
    }
}

impl FromStr for Rgb8 {
    type Err = PlumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Continuous RGB sample with channels on the `0..=255` scale.
///
/// This is what the gradient evaluator produces and the quantizer consumes;
/// values are fractional until error diffusion turns them into bytes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RgbF {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RgbF {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn lerp(self, other: RgbF, t: f64) -> RgbF {
        RgbF::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Largest absolute per-channel difference.
    #[inline]
    pub fn max_delta(self, other: RgbF) -> f64 {
        (self.r - other.r).abs().max((self.g - other.g).abs()).max((self.b - other.b).abs())
    }

    /// Truncates each channel to a byte.
    #[inline]
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8::new(self.r as u8, self.g as u8, self.b as u8)
    }
}

/// Straight-alpha color used for stroke brushes.
///
/// `Display` renders the CSS form `rgba(r, g, b, a)` so hosts backed by a
/// canvas-style API can pass it through unchanged.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    #[inline]
    pub fn rgb(self) -> Rgb8 {
        Rgb8::new(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hex parsing ───────────────────────────────────────────────────────

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Rgb8::from_hex("#ff8000").unwrap(), Rgb8::new(255, 128, 0));
        assert_eq!(Rgb8::from_hex("666666").unwrap(), Rgb8::new(0x66, 0x66, 0x66));
        assert_eq!("#AbCdEf".parse::<Rgb8>().unwrap(), Rgb8::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "#fff", "#12345", "#1234567", "#gg0000", "red"] {
            assert!(Rgb8::from_hex(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn rgba_css_form() {
        let c = Rgb8::new(34, 34, 34).with_alpha(0.1);
        assert_eq!(c.to_string(), "rgba(34, 34, 34, 0.1)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Rgb8::black().with_alpha(3.0).a, 1.0);
        assert_eq!(Rgb8::black().with_alpha(-1.0).a, 0.0);
    }
}
