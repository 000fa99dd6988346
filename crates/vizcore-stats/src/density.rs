//! Gaussian kernel density estimation for density and violin plots
//!
//! The estimate at `x` is `(1 / (n * h)) * Σ φ((x - xi) / h)` where `φ` is the
//! standard normal density and `h` the bandwidth. The evaluation grid spans
//! the observed range padded by [`GRID_PADDING_BANDWIDTHS`] bandwidths on
//! both sides so the tails of the curve reach (close to) zero.
//!
//! When no bandwidth is given, Silverman's rule of thumb is used:
//! `h = 1.06 * σ * n^(-1/5)` with `σ` the sample standard deviation.

use crate::descriptive::DescriptiveStats;

/// Default number of grid points a density curve is evaluated on.
pub const DEFAULT_GRID_SIZE: usize = 100;

/// Multiplier of Silverman's rule of thumb.
pub const SILVERMAN_FACTOR: f64 = 1.06;

/// Bandwidth used when the rule of thumb degenerates (zero variance or a single value).
pub const FALLBACK_BANDWIDTH: f64 = 1.0;

/// Number of bandwidths the grid extends beyond the observed range.
pub const GRID_PADDING_BANDWIDTHS: f64 = 3.0;

const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// A point on an estimated density curve.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DensityPoint {
    pub x: f64,
    /// Estimated probability density at `x`; never negative.
    pub density: f64,
}

/// Estimates the density of a sample on an evenly spaced grid.
///
/// # Arguments
///
/// * `sample` - Observations; non-finite values are skipped
/// * `bandwidth` - Kernel width. `None`, or a value that is not finite and
///   positive, selects [`silverman_bandwidth`]
/// * `grid_size` - Number of points to evaluate (see [`DEFAULT_GRID_SIZE`])
///
/// # Returns
///
/// `grid_size` points in ascending `x` order, or an empty vector when the
/// sample has no finite values or `grid_size` is zero.
///
/// # Examples
///
/// ```
/// use vizcore_stats::density::{DEFAULT_GRID_SIZE, kernel_density};
///
/// let curve = kernel_density(&[1.0, 2.0, 2.5, 3.0, 7.0], None, DEFAULT_GRID_SIZE);
/// assert_eq!(curve.len(), DEFAULT_GRID_SIZE);
/// assert!(curve.iter().all(|p| p.density >= 0.0));
///
/// assert!(kernel_density(&[], None, DEFAULT_GRID_SIZE).is_empty());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn kernel_density(
    sample: &[f64],
    bandwidth: Option<f64>,
    grid_size: usize,
) -> Vec<DensityPoint> {
    let finite = sample
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .collect::<Vec<_>>();
    let Some(stats) = DescriptiveStats::new(finite.iter().copied()) else {
        return vec![];
    };
    if grid_size == 0 {
        return vec![];
    }

    let h = resolve_bandwidth(bandwidth, &finite, &stats);
    let lo = stats.min - GRID_PADDING_BANDWIDTHS * h;
    let hi = stats.max + GRID_PADDING_BANDWIDTHS * h;
    let norm = 1.0 / (finite.len() as f64 * h);

    grid(lo, hi, grid_size)
        .map(|x| {
            let sum = finite
                .iter()
                .map(|&xi| gaussian_kernel((x - xi) / h))
                .sum::<f64>();
            DensityPoint {
                x,
                density: sum * norm,
            }
        })
        .collect()
}

/// Silverman's rule-of-thumb bandwidth `1.06 * σ * n^(-1/5)`.
///
/// Returns NaN for fewer than two values and `0.0` for a constant sample.
/// A constant sample is detected from its values rather than its variance,
/// which rounding leaves slightly above zero for values such as `0.1`.
///
/// # Examples
///
/// ```
/// use vizcore_stats::density::silverman_bandwidth;
///
/// let h = silverman_bandwidth(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!((h - 1.06 * 2.5_f64.sqrt() * 5.0_f64.powf(-0.2)).abs() < 1e-12);
/// assert!(silverman_bandwidth(&[1.0]).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn silverman_bandwidth(sample: &[f64]) -> f64 {
    if sample.len() < 2 {
        return f64::NAN;
    }
    let Some(stats) = DescriptiveStats::new(sample.iter().copied()) else {
        return f64::NAN;
    };
    if stats.min == stats.max {
        return 0.0;
    }
    SILVERMAN_FACTOR * stats.std_dev * (stats.count as f64).powf(-0.2)
}

fn resolve_bandwidth(requested: Option<f64>, sample: &[f64], stats: &DescriptiveStats) -> f64 {
    if let Some(h) = requested.filter(|&h| h.is_finite() && h > 0.0) {
        return h;
    }
    // below this the kernel is narrower than the spacing of floats around the data
    let floor = f64::EPSILON * stats.min.abs().max(stats.max.abs()).max(1.0);
    let h = silverman_bandwidth(sample);
    if h.is_finite() && h >= floor {
        h
    } else {
        FALLBACK_BANDWIDTH
    }
}

#[expect(clippy::cast_precision_loss)]
fn grid(lo: f64, hi: f64, size: usize) -> impl Iterator<Item = f64> {
    let last = size.saturating_sub(1);
    (0..size).map(move |i| {
        if last == 0 {
            (lo + hi) / 2.0
        } else if i == last {
            hi
        } else {
            lo + (hi - lo) * (i as f64) / (last as f64)
        }
    })
}

fn gaussian_kernel(u: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * u * u).exp()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_distr::{Distribution as _, Normal};
    use rand_pcg::Pcg32;

    use super::*;

    fn trapezoid_area(curve: &[DensityPoint]) -> f64 {
        curve
            .windows(2)
            .map(|w| (w[1].x - w[0].x) * (w[0].density + w[1].density) / 2.0)
            .sum()
    }

    fn peak_x(curve: &[DensityPoint]) -> f64 {
        curve
            .iter()
            .max_by(|a, b| a.density.total_cmp(&b.density))
            .unwrap()
            .x
    }

    #[test]
    fn test_empty_sample() {
        assert!(kernel_density(&[], None, 50).is_empty());
        assert!(kernel_density(&[f64::NAN, f64::INFINITY], None, 50).is_empty());
    }

    #[test]
    fn test_zero_grid_size() {
        assert!(kernel_density(&[1.0, 2.0], None, 0).is_empty());
    }

    #[test]
    fn test_single_grid_point_at_center() {
        let curve = kernel_density(&[2.0, 4.0], Some(1.0), 1);
        assert_eq!(curve.len(), 1);
        assert_eq!(curve[0].x, 3.0);
    }

    #[test]
    fn test_grid_covers_observed_range() {
        let sample = [3.0, -2.0, 8.0, 1.5];
        let curve = kernel_density(&sample, Some(0.5), 64);
        assert_eq!(curve.len(), 64);
        assert!(curve[0].x <= -2.0);
        assert!(curve[63].x >= 8.0);
        assert!(curve.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_constant_sample_has_finite_bump() {
        let curve = kernel_density(&[5.0; 8], None, 101);
        assert!(curve.iter().all(|p| p.density.is_finite()));
        assert!((peak_x(&curve) - 5.0).abs() < 1e-9);
        // FALLBACK_BANDWIDTH gives the standard normal peak height
        let peak = curve.iter().map(|p| p.density).fold(0.0, f64::max);
        assert!((peak - INV_SQRT_2PI).abs() < 1e-9);
    }

    #[test]
    fn test_inexact_constant_sample_uses_fallback_bandwidth() {
        for value in [0.1, 0.7, 3.3] {
            for n in [3, 7] {
                let sample = vec![value; n];
                assert_eq!(silverman_bandwidth(&sample), 0.0);

                let curve = kernel_density(&sample, None, 101);
                assert!((curve[0].x - (value - 3.0)).abs() < 1e-9);
                assert!((peak_x(&curve) - value).abs() < 1e-9);
                let peak = curve.iter().map(|p| p.density).fold(0.0, f64::max);
                assert!((peak - INV_SQRT_2PI).abs() < 1e-9, "{value} x {n}: {peak}");
            }
        }
    }

    #[test]
    fn test_single_value() {
        let curve = kernel_density(&[42.0], None, 11);
        assert_eq!(curve.len(), 11);
        assert!((peak_x(&curve) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_bandwidth_uses_rule_of_thumb() {
        let sample = [1.0, 2.0, 4.0, 8.0];
        let by_rule = kernel_density(&sample, None, 20);
        assert_eq!(kernel_density(&sample, Some(0.0), 20), by_rule);
        assert_eq!(kernel_density(&sample, Some(-1.0), 20), by_rule);
        assert_eq!(kernel_density(&sample, Some(f64::NAN), 20), by_rule);
    }

    #[test]
    fn test_integrates_to_one() {
        let mut rng = Pcg32::seed_from_u64(42);
        let normal = Normal::new(10.0, 2.0).unwrap();
        let sample = (0..200).map(|_| normal.sample(&mut rng)).collect::<Vec<f64>>();
        let curve = kernel_density(&sample, None, 400);
        let area = trapezoid_area(&curve);
        assert!((area - 1.0).abs() < 0.01, "area = {area}");
        assert!(curve.iter().all(|p| p.density >= 0.0));
    }

    #[test]
    fn test_peak_location_stable_across_grid_sizes() {
        let sample = [0.0, 0.2, 0.3, 0.5, 0.6, 0.7, 4.0, 6.0];
        let coarse = peak_x(&kernel_density(&sample, Some(0.4), 50));
        let fine = peak_x(&kernel_density(&sample, Some(0.4), 500));
        let spacing = (6.0 + 2.0 * GRID_PADDING_BANDWIDTHS * 0.4) / 49.0;
        assert!((coarse - fine).abs() <= 2.0 * spacing, "{coarse} vs {fine}");
    }

    #[test]
    fn test_idempotent() {
        let sample = [0.3, 1.7, 2.2, 2.9];
        assert_eq!(
            kernel_density(&sample, None, DEFAULT_GRID_SIZE),
            kernel_density(&sample, None, DEFAULT_GRID_SIZE)
        );
    }
}
