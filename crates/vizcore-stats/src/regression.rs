//! Ordinary least squares regression and Pearson correlation
//!
//! This module fits a straight line `y = intercept + slope * x` to paired
//! observations and samples the fitted line together with a confidence band
//! for the mean response, as drawn by scatter-with-trend-line charts.
//!
//! # Degenerate input
//!
//! Nothing here returns an error. Undefined quantities are reported as NaN:
//!
//! - [`pearson_r`] is NaN for fewer than two points or a constant variable
//! - [`RegressionModel::residual_std_error`] is NaN for fewer than two points
//! - [`line_and_band`] collapses the band onto the line wherever the
//!   confidence half-width is not finite
//!
//! Points are expected to be finite; see `vizcore_data::extract::extract_points`.
//!
//! # Examples
//!
//! ```
//! use vizcore_stats::regression::{Point2D, line_and_band, ols, pearson_r};
//!
//! let points = [
//!     Point2D::new(1.0, 2.1),
//!     Point2D::new(2.0, 3.9),
//!     Point2D::new(3.0, 6.2),
//!     Point2D::new(4.0, 7.8),
//! ];
//!
//! let model = ols(&points);
//! assert!((model.slope - 1.94).abs() < 1e-9);
//! assert!(pearson_r(&points) > 0.99);
//!
//! let chart = line_and_band(&points, 0.0, 5.0, 10);
//! assert_eq!(chart.line.len(), 11);
//! assert!(chart.band.iter().all(|row| row.lower <= row.y && row.y <= row.upper));
//! ```

/// Multiplier applied to the standard error of the fit to obtain the band.
///
/// Approximates the two-sided 95% critical value of Student's t for
/// moderate-to-large samples. It is not looked up per degrees of freedom, so
/// bands for very small samples are narrower than an exact interval.
pub const CONFIDENCE_MULTIPLIER: f64 = 2.0;

/// Default number of intervals the x range is divided into by [`line_and_band`].
pub const DEFAULT_BAND_STEPS: usize = 120;

/// A single `(x, y)` observation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A least-squares line fitted to a set of points.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RegressionModel {
    /// Number of points the model was fitted to.
    pub n: usize,
    pub intercept: f64,
    pub slope: f64,
    /// Unbiased residual standard error (`n - 2` degrees of freedom, at least 1).
    /// NaN when fewer than two points were given.
    pub residual_std_error: f64,
    /// Mean of the x values (`0.0` for an empty input).
    pub mean_x: f64,
    /// `Σ (x - mean_x)²`.
    pub sum_sq_centered_x: f64,
}

impl RegressionModel {
    /// Evaluates the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Half-width of the confidence band for the mean response at `x`.
    ///
    /// Computed as `CONFIDENCE_MULTIPLIER * se_fit` where
    /// `se_fit = residual_std_error * sqrt(1/n + (x - mean_x)² / sum_sq_centered_x)`.
    /// The result is NaN or infinite whenever the interval is undefined.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn confidence_half_width(&self, x: f64) -> f64 {
        let n = self.n as f64;
        let se_fit = self.residual_std_error
            * (1.0 / n + (x - self.mean_x).powi(2) / self.sum_sq_centered_x).sqrt();
        CONFIDENCE_MULTIPLIER * se_fit
    }
}

/// One sample of the fitted line with its confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BandRow {
    pub x: f64,
    pub y: f64,
    pub lower: f64,
    pub upper: f64,
}

/// The fitted line and its confidence band on a shared x grid.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LineAndBand {
    pub model: RegressionModel,
    pub line: Vec<Point2D>,
    pub band: Vec<BandRow>,
}

/// Means and centered sums of squares of a non-empty point set.
#[derive(Debug)]
struct Moments {
    mean_x: f64,
    mean_y: f64,
    sxx: f64,
    syy: f64,
    sxy: f64,
    /// Every x is identical. Checked on the values, since `sxx` keeps
    /// rounding residue for constants such as `0.1`.
    constant_x: bool,
    constant_y: bool,
}

impl Moments {
    #[expect(clippy::cast_precision_loss)]
    fn new(points: &[Point2D]) -> Option<Self> {
        let first = points.first()?;
        let constant_x = points.iter().all(|p| p.x == first.x);
        let constant_y = points.iter().all(|p| p.y == first.y);

        let n = points.len() as f64;
        let mean_x = if constant_x {
            first.x
        } else {
            points.iter().map(|p| p.x).sum::<f64>() / n
        };
        let mean_y = if constant_y {
            first.y
        } else {
            points.iter().map(|p| p.y).sum::<f64>() / n
        };

        let (sxx, syy, sxy) = points.iter().fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), p| {
            let dx = p.x - mean_x;
            let dy = p.y - mean_y;
            (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
        });

        Some(Self {
            mean_x,
            mean_y,
            sxx,
            syy,
            sxy,
            constant_x,
            constant_y,
        })
    }
}

/// Computes Pearson's correlation coefficient.
///
/// Returns NaN when fewer than two points are given or when either variable
/// has zero variance. Otherwise the result lies in `[-1, 1]`.
///
/// # Examples
///
/// ```
/// use vizcore_stats::regression::{Point2D, pearson_r};
///
/// let rising = [Point2D::new(1.0, 1.0), Point2D::new(2.0, 2.0), Point2D::new(3.0, 3.0)];
/// assert_eq!(pearson_r(&rising), 1.0);
///
/// let flat = [Point2D::new(1.0, 5.0), Point2D::new(2.0, 5.0)];
/// assert!(pearson_r(&flat).is_nan());
/// ```
#[must_use]
pub fn pearson_r(points: &[Point2D]) -> f64 {
    if points.len() < 2 {
        return f64::NAN;
    }
    let Some(m) = Moments::new(points) else {
        return f64::NAN;
    };
    if m.constant_x || m.constant_y || m.sxx <= 0.0 || m.syy <= 0.0 {
        return f64::NAN;
    }
    (m.sxy / (m.sxx * m.syy).sqrt()).clamp(-1.0, 1.0)
}

/// Fits a least-squares line to the points.
///
/// When every x value is identical the fit degrades to the horizontal line
/// through the mean of y (`slope = 0`). With fewer than two points the model
/// has zero slope and intercept and a NaN residual standard error.
///
/// # Examples
///
/// ```
/// use vizcore_stats::regression::{Point2D, ols};
///
/// let points = [Point2D::new(1.0, 2.0), Point2D::new(2.0, 4.0), Point2D::new(3.0, 6.0)];
/// let model = ols(&points);
/// assert_eq!(model.slope, 2.0);
/// assert_eq!(model.intercept, 0.0);
/// assert_eq!(model.residual_std_error, 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn ols(points: &[Point2D]) -> RegressionModel {
    let Some(m) = Moments::new(points) else {
        return RegressionModel {
            n: 0,
            intercept: 0.0,
            slope: 0.0,
            residual_std_error: f64::NAN,
            mean_x: 0.0,
            sum_sq_centered_x: 0.0,
        };
    };
    // a constant x leaves no spread to divide by
    let sum_sq_centered_x = if m.constant_x { 0.0 } else { m.sxx };

    if points.len() < 2 {
        return RegressionModel {
            n: points.len(),
            intercept: 0.0,
            slope: 0.0,
            residual_std_error: f64::NAN,
            mean_x: m.mean_x,
            sum_sq_centered_x,
        };
    }

    let (slope, intercept) = if sum_sq_centered_x > 0.0 {
        let slope = m.sxy / sum_sq_centered_x;
        (slope, m.mean_y - slope * m.mean_x)
    } else {
        (0.0, m.mean_y)
    };

    let sse = points
        .iter()
        .map(|p| (p.y - (intercept + slope * p.x)).powi(2))
        .sum::<f64>();
    let dof = points.len().saturating_sub(2).max(1) as f64;

    RegressionModel {
        n: points.len(),
        intercept,
        slope,
        residual_std_error: (sse / dof).sqrt(),
        mean_x: m.mean_x,
        sum_sq_centered_x,
    }
}

/// Samples the fitted line and its confidence band over `[x_min, x_max]`.
///
/// Produces `steps + 1` evenly spaced rows including both end points
/// (a single row at `x_min` when `steps` is zero). Where the confidence
/// half-width is not finite, `lower` and `upper` equal `y`.
///
/// See [`DEFAULT_BAND_STEPS`] for the customary number of steps.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn line_and_band(points: &[Point2D], x_min: f64, x_max: f64, steps: usize) -> LineAndBand {
    let model = ols(points);

    let band = (0..=steps)
        .map(|i| {
            let x = if steps == 0 || i == 0 {
                x_min
            } else if i == steps {
                x_max
            } else {
                x_min + (x_max - x_min) * (i as f64) / (steps as f64)
            };
            let y = model.predict(x);
            let half_width = model.confidence_half_width(x);
            let (lower, upper) = if half_width.is_finite() {
                (y - half_width, y + half_width)
            } else {
                (y, y)
            };
            BandRow { x, y, lower, upper }
        })
        .collect::<Vec<_>>();
    let line = band.iter().map(|row| Point2D::new(row.x, row.y)).collect();

    LineAndBand { model, line, band }
}
