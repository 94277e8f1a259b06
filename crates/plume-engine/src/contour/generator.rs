use rand::Rng;

use super::{Contour, ContourPoint};

/// Deepest subdivision accepted by configuration (`2^20 + 1` points).
pub const MAX_ITERATIONS: u32 = 20;

/// Midpoint-displacement contour generator.
///
/// Starting from the anchors `(0, 1)` and `(1, 1)`, every pass inserts a
/// midpoint into each segment and displaces it vertically by up to the
/// segment's width. Heights are then rescaled into `[0, 1]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FractalContourGenerator {
    iterations: u32,
}

impl FractalContourGenerator {
    #[inline]
    pub const fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Number of points every generated contour has: `2^iterations + 1`.
    #[inline]
    pub fn point_count(&self) -> usize {
        (1usize << self.iterations) + 1
    }

    /// Builds a fresh contour, drawing all randomness from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Contour {
        let mut points = vec![ContourPoint::new(0.0, 1.0), ContourPoint::new(1.0, 1.0)];

        for _ in 0..self.iterations {
            let mut next = Vec::with_capacity(points.len() * 2 - 1);
            for pair in points.windows(2) {
                let (p, q) = (pair[0], pair[1]);
                let dx = q.x - p.x;
                let displacement = dx * rng.gen_range(-1.0..1.0);
                next.push(p);
                next.push(ContourPoint::new(0.5 * (p.x + q.x), 0.5 * (p.y + q.y) + displacement));
            }
            if let Some(&last) = points.last() {
                next.push(last);
            }
            points = next;
        }

        normalize_heights(&mut points);
        Contour::from_points(points)
    }
}

/// Rescales every `y` into `[0, 1]`, or sets all to 1 when they are equal.
fn normalize_heights(points: &mut [ContourPoint]) {
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));

    if max != min {
        let span = max - min;
        for p in points.iter_mut() {
            p.y = (p.y - min) / span;
        }
    } else {
        for p in points.iter_mut() {
            p.y = 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    // ── fixed cases ───────────────────────────────────────────────────────

    #[test]
    fn zero_iterations_returns_anchors() {
        let c = FractalContourGenerator::new(0).generate(&mut rng(1));
        assert_eq!(c.points(), &[ContourPoint::new(0.0, 1.0), ContourPoint::new(1.0, 1.0)]);
    }

    #[test]
    fn point_count_matches_depth() {
        for k in 0..=8 {
            let g = FractalContourGenerator::new(k);
            assert_eq!(g.generate(&mut rng(k as u64)).len(), g.point_count());
            assert_eq!(g.point_count(), 2usize.pow(k) + 1);
        }
    }

    #[test]
    fn same_seed_same_contour() {
        let g = FractalContourGenerator::new(6);
        assert_eq!(g.generate(&mut rng(42)), g.generate(&mut rng(42)));
    }

    #[test]
    fn successive_calls_differ() {
        let g = FractalContourGenerator::new(6);
        let mut r = rng(7);
        let a = g.generate(&mut r);
        let b = g.generate(&mut r);
        assert_ne!(a, b);
    }

    #[test]
    fn x_samples_are_evenly_spaced() {
        let c = FractalContourGenerator::new(3).generate(&mut rng(3));
        let xs: Vec<f64> = c.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875, 1.0]);
    }

    #[test]
    fn flat_heights_normalize_to_one() {
        let mut pts = vec![ContourPoint::new(0.0, 0.3), ContourPoint::new(1.0, 0.3)];
        normalize_heights(&mut pts);
        assert!(pts.iter().all(|p| p.y == 1.0));
    }

    // ── properties ────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn contour_shape_invariants(iterations in 0u32..=10, seed in any::<u64>()) {
            let g = FractalContourGenerator::new(iterations);
            let c = g.generate(&mut rng(seed));
            let pts = c.points();

            prop_assert_eq!(pts.len(), (1usize << iterations) + 1);
            prop_assert_eq!(pts[0].x, 0.0);
            prop_assert_eq!(pts[pts.len() - 1].x, 1.0);
            prop_assert!(pts.windows(2).all(|w| w[0].x < w[1].x));
            prop_assert!(pts.iter().all(|p| (0.0..=1.0).contains(&p.y)));

            // Both anchors start at the same height and are rescaled identically.
            prop_assert_eq!(pts[0].y, pts[pts.len() - 1].y);

            let min = pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
            let max = pts.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
            prop_assert!((min == 0.0 && max == 1.0) || pts.iter().all(|p| p.y == 1.0));
        }
    }
}
