//! Smoke options and their validation.
//!
//! [`SmokeConfig`] is the loose, host-facing option set (hex strings,
//! `"auto"` radii). [`SmokeConfig::validate`] resolves it against a surface
//! size into [`Settings`], the only form the engine consumes.

use std::time::Duration;

use serde::Deserialize;

use crate::animate::ExpiryPolicy;
use crate::contour::MAX_ITERATIONS;
use crate::coords::SurfaceSize;
use crate::dither::EdgePolicy;
use crate::error::PlumeError;
use crate::paint::Rgb8;

/// Share of the surface height an `"auto"` radius bound spans (as a diameter).
const AUTO_RADIUS_FRACTION: f64 = 0.8;

/// A radius bound: explicit pixels, or derived from the surface height.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawRadius")]
pub enum RadiusBound {
    Auto,
    Fixed(f64),
}

impl RadiusBound {
    /// Pixels for a surface of the given size.
    pub fn resolve(self, size: SurfaceSize) -> f64 {
        match self {
            RadiusBound::Auto => size.height * AUTO_RADIUS_FRACTION / 2.0,
            RadiusBound::Fixed(r) => r,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRadius {
    Number(f64),
    Keyword(String),
}

impl TryFrom<RawRadius> for RadiusBound {
    type Error = String;

    fn try_from(raw: RawRadius) -> Result<Self, Self::Error> {
        match raw {
            RawRadius::Number(r) => Ok(RadiusBound::Fixed(r)),
            RawRadius::Keyword(k) if k == "auto" => Ok(RadiusBound::Auto),
            RawRadius::Keyword(k) => Err(format!("expected a number or \"auto\", got {k:?}")),
        }
    }
}

/// Host-facing options. Missing JSON keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmokeConfig {
    /// Outer brush color, `#rrggbb`.
    pub gradient_start: String,
    /// Inner brush color, `#rrggbb`.
    pub gradient_end: String,
    pub smoke_opacity: f64,
    pub num_circles: usize,
    pub max_max_rad: RadiusBound,
    pub min_max_rad: RadiusBound,
    /// Inner radius as a fraction of each blob's outer radius.
    pub min_rad_factor: f64,
    /// Fractal subdivision depth for blob contours.
    pub iterations: u32,
    pub draws_per_frame: u32,
    pub line_width: f64,
    /// Tick interval in milliseconds.
    pub speed: f64,
    pub bg_color_inner: String,
    pub bg_color_outer: String,
    pub expiry: ExpiryPolicy,
    pub edge_policy: EdgePolicy,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            gradient_start: "#000000".to_string(),
            gradient_end: "#222222".to_string(),
            smoke_opacity: 0.1,
            num_circles: 1,
            max_max_rad: RadiusBound::Auto,
            min_max_rad: RadiusBound::Auto,
            min_rad_factor: 0.0,
            iterations: 8,
            draws_per_frame: 3,
            line_width: 5.0,
            speed: 1.0,
            bg_color_inner: "#ffffff".to_string(),
            bg_color_outer: "#666666".to_string(),
            expiry: ExpiryPolicy::default(),
            edge_policy: EdgePolicy::default(),
        }
    }
}

/// Validated, surface-resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub gradient_start: Rgb8,
    pub gradient_end: Rgb8,
    pub smoke_opacity: f64,
    pub num_circles: usize,
    pub max_max_rad: f64,
    pub min_max_rad: f64,
    pub min_rad_factor: f64,
    pub iterations: u32,
    pub draws_per_frame: u32,
    pub line_width: f64,
    pub tick_interval: Duration,
    pub bg_color_inner: Rgb8,
    pub bg_color_outer: Rgb8,
    pub expiry: ExpiryPolicy,
    pub edge_policy: EdgePolicy,
}

impl SmokeConfig {
    /// Merges a (possibly partial) JSON options object over the defaults.
    pub fn from_json(src: &str) -> Result<Self, PlumeError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Checks every option and resolves `"auto"` radii for `size`.
    pub fn validate(&self, size: SurfaceSize) -> Result<Settings, PlumeError> {
        if !size.is_valid() {
            return Err(PlumeError::option(
                "surface",
                format!("size must be positive and finite, got {}x{}", size.width, size.height),
            ));
        }

        let max_max_rad = self.max_max_rad.resolve(size);
        let min_max_rad = self.min_max_rad.resolve(size);

        for (option, r) in [("maxMaxRad", max_max_rad), ("minMaxRad", min_max_rad)] {
            if !(r.is_finite() && r > 0.0) {
                return Err(PlumeError::option(option, format!("radius must be positive, got {r}")));
            }
        }
        if min_max_rad > max_max_rad {
            return Err(PlumeError::option(
                "minMaxRad",
                format!("{min_max_rad} exceeds maxMaxRad {max_max_rad}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_rad_factor) {
            return Err(PlumeError::option("minRadFactor", "must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.smoke_opacity) {
            return Err(PlumeError::option("smokeOpacity", "must be within [0, 1]"));
        }
        if self.num_circles == 0 {
            return Err(PlumeError::option("numCircles", "must be at least 1"));
        }
        if self.iterations > MAX_ITERATIONS {
            return Err(PlumeError::option(
                "iterations",
                format!("{} exceeds the maximum of {MAX_ITERATIONS}", self.iterations),
            ));
        }
        if self.draws_per_frame == 0 {
            return Err(PlumeError::option("drawsPerFrame", "must be at least 1"));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(PlumeError::option("lineWidth", "must be positive"));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(PlumeError::option("speed", "tick interval must be positive"));
        }

        Ok(Settings {
            gradient_start: Rgb8::from_hex(&self.gradient_start)?,
            gradient_end: Rgb8::from_hex(&self.gradient_end)?,
            smoke_opacity: self.smoke_opacity,
            num_circles: self.num_circles,
            max_max_rad,
            min_max_rad,
            min_rad_factor: self.min_rad_factor,
            iterations: self.iterations,
            draws_per_frame: self.draws_per_frame,
            line_width: self.line_width,
            tick_interval: Duration::from_nanos(((self.speed * 1_000_000.0).round() as u64).max(1)),
            bg_color_inner: Rgb8::from_hex(&self.bg_color_inner)?,
            bg_color_outer: Rgb8::from_hex(&self.bg_color_outer)?,
            expiry: self.expiry,
            edge_policy: self.edge_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> SurfaceSize {
        SurfaceSize::new(800.0, 600.0)
    }

    fn rejects(config: SmokeConfig, option: &str) {
        match config.validate(size()) {
            Err(PlumeError::InvalidOption { option: got, .. }) => assert_eq!(got, option),
            other => panic!("expected {option} to be rejected, got {other:?}"),
        }
    }

    // ── defaults / merging ────────────────────────────────────────────────

    #[test]
    fn defaults_validate() {
        let s = SmokeConfig::default().validate(size()).unwrap();
        assert_eq!(s.gradient_end, Rgb8::new(0x22, 0x22, 0x22));
        assert_eq!(s.bg_color_outer, Rgb8::new(0x66, 0x66, 0x66));
        assert_eq!(s.iterations, 8);
        assert_eq!(s.draws_per_frame, 3);
        assert_eq!(s.tick_interval, Duration::from_millis(1));
        assert_eq!(s.expiry, ExpiryPolicy::StopAll);
        assert_eq!(s.edge_policy, EdgePolicy::FlatBleed);
    }

    #[test]
    fn auto_radius_is_forty_percent_of_height() {
        let s = SmokeConfig::default().validate(size()).unwrap();
        assert_eq!(s.max_max_rad, 240.0);
        assert_eq!(s.min_max_rad, 240.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = SmokeConfig::from_json(r#"{ "iterations": 0, "numCircles": 4, "maxMaxRad": 120 }"#)
            .unwrap();
        assert_eq!(c.iterations, 0);
        assert_eq!(c.num_circles, 4);
        assert_eq!(c.max_max_rad, RadiusBound::Fixed(120.0));
        assert_eq!(c.min_max_rad, RadiusBound::Auto);
        assert_eq!(c.gradient_start, "#000000");
    }

    #[test]
    fn json_policies_and_auto_keyword() {
        let c = SmokeConfig::from_json(
            r#"{ "minMaxRad": "auto", "expiry": "perBlob", "edgePolicy": "rowClamped" }"#,
        )
        .unwrap();
        assert_eq!(c.min_max_rad, RadiusBound::Auto);
        assert_eq!(c.expiry, ExpiryPolicy::PerBlob);
        assert_eq!(c.edge_policy, EdgePolicy::RowClamped);
    }

    #[test]
    fn bad_radius_keyword_is_a_parse_error() {
        assert!(matches!(
            SmokeConfig::from_json(r#"{ "maxMaxRad": "huge" }"#),
            Err(PlumeError::Json(_))
        ));
    }

    // ── rejection ─────────────────────────────────────────────────────────

    #[test]
    fn malformed_color_rejected() {
        let c = SmokeConfig { bg_color_inner: "#fffff".into(), ..Default::default() };
        assert!(matches!(c.validate(size()), Err(PlumeError::InvalidColor(_))));
    }

    #[test]
    fn inverted_radius_bounds_rejected() {
        rejects(
            SmokeConfig {
                min_max_rad: RadiusBound::Fixed(200.0),
                max_max_rad: RadiusBound::Fixed(100.0),
                ..Default::default()
            },
            "minMaxRad",
        );
    }

    #[test]
    fn non_positive_radius_rejected() {
        rejects(
            SmokeConfig { max_max_rad: RadiusBound::Fixed(0.0), ..Default::default() },
            "maxMaxRad",
        );
    }

    #[test]
    fn out_of_range_scalars_rejected() {
        rejects(SmokeConfig { min_rad_factor: 1.5, ..Default::default() }, "minRadFactor");
        rejects(SmokeConfig { smoke_opacity: -0.1, ..Default::default() }, "smokeOpacity");
        rejects(SmokeConfig { num_circles: 0, ..Default::default() }, "numCircles");
        rejects(SmokeConfig { iterations: MAX_ITERATIONS + 1, ..Default::default() }, "iterations");
        rejects(SmokeConfig { draws_per_frame: 0, ..Default::default() }, "drawsPerFrame");
        rejects(SmokeConfig { line_width: 0.0, ..Default::default() }, "lineWidth");
        rejects(SmokeConfig { speed: f64::NAN, ..Default::default() }, "speed");
    }

    #[test]
    fn invalid_surface_rejected() {
        let err = SmokeConfig::default().validate(SurfaceSize::new(0.0, 10.0));
        assert!(matches!(err, Err(PlumeError::InvalidOption { option: "surface", .. })));
    }
}
