//! Equal-interval class breaks for choropleth coloring
//!
//! This module divides the observed range of a metric into
//! [`CLASS_COUNT`] classes of equal width and reports the interior
//! breakpoints between them. Degenerate samples are reported through
//! dedicated [`BreakSet`] variants so renderers must handle them explicitly.
//!
//! # Algorithm
//!
//! 1. Empty sample: [`BreakSet::NoData`]
//! 2. All values equal: [`BreakSet::Uniform`] (no breaks, a single color class)
//! 3. Otherwise `step = (max - min) / 5` and the breaks are `min + i * step`
//!    for `i = 1..=4`, rounded to [`BREAK_PRECISION`] decimal places
//! 4. Rounded breaks that do not lie strictly above `min` and the previous
//!    break (or that reach `max`) are dropped
//! 5. If fewer than 4 breaks survive, the 4 breaks are recomputed without rounding
//!
//! # Examples
//!
//! ```
//! use vizcore_stats::breaks::{BreakSet, calculate_breaks};
//!
//! let breaks = calculate_breaks(&[10.0, 20.0, 30.0, 40.0, 50.0]);
//! assert_eq!(
//!     breaks,
//!     BreakSet::Classes {
//!         breaks: [18.0, 26.0, 34.0, 42.0],
//!         min: 10.0,
//!         max: 50.0,
//!     }
//! );
//! assert_eq!(breaks.classify(27.0), Some(2));
//!
//! assert_eq!(
//!     calculate_breaks(&[5.0, 5.0, 5.0]),
//!     BreakSet::Uniform { min: 5.0, max: 5.0 }
//! );
//! assert_eq!(calculate_breaks(&[]), BreakSet::NoData);
//! ```

use arrayvec::ArrayVec;

/// Number of color classes produced for a non-degenerate sample.
pub const CLASS_COUNT: usize = 5;

/// Number of interior breakpoints separating [`CLASS_COUNT`] classes.
pub const BREAK_COUNT: usize = CLASS_COUNT - 1;

/// Decimal places breakpoints are rounded to before de-duplication.
pub const BREAK_PRECISION: i32 = 6;

/// Classification result for a sample.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BreakSet {
    /// The sample was empty.
    NoData,
    /// Every value in the sample is equal; render a single color class.
    Uniform {
        /// The shared value.
        min: f64,
        /// Equal to `min`.
        max: f64,
    },
    /// Strictly ascending interior breakpoints within `(min, max)`.
    Classes {
        breaks: [f64; BREAK_COUNT],
        min: f64,
        max: f64,
    },
}

impl BreakSet {
    /// Interior breakpoints; empty for the degenerate variants.
    #[must_use]
    pub fn breaks(&self) -> &[f64] {
        match self {
            Self::NoData | Self::Uniform { .. } => &[],
            Self::Classes { breaks, .. } => breaks,
        }
    }

    /// Observed `(min, max)` of the sample, if there was any data.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            Self::NoData => None,
            Self::Uniform { min, max } | Self::Classes { min, max, .. } => Some((min, max)),
        }
    }

    /// Number of color classes a renderer needs.
    #[must_use]
    pub fn class_count(&self) -> usize {
        match self {
            Self::NoData => 0,
            Self::Uniform { .. } => 1,
            Self::Classes { .. } => CLASS_COUNT,
        }
    }

    /// Returns the class index (`0..class_count()`) a value falls into.
    ///
    /// A value equal to a breakpoint belongs to the class above it. Values
    /// outside `[min, max]` are assigned to the outermost classes.
    /// Returns `None` for [`BreakSet::NoData`] and for NaN values.
    ///
    /// # Examples
    ///
    /// ```
    /// use vizcore_stats::breaks::calculate_breaks;
    ///
    /// let breaks = calculate_breaks(&[0.0, 100.0]);
    /// assert_eq!(breaks.classify(0.0), Some(0));
    /// assert_eq!(breaks.classify(20.0), Some(1));
    /// assert_eq!(breaks.classify(100.0), Some(4));
    /// assert_eq!(breaks.classify(f64::NAN), None);
    /// ```
    #[must_use]
    pub fn classify(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        match self {
            Self::NoData => None,
            Self::Uniform { .. } => Some(0),
            Self::Classes { breaks, .. } => Some(breaks.iter().filter(|&&b| b <= value).count()),
        }
    }
}

/// Computes equal-interval class breaks for a sample.
///
/// See the [module documentation](self) for the algorithm. Values are
/// expected to be finite; filter them with the extraction helpers first.
#[must_use]
pub fn calculate_breaks(values: &[f64]) -> BreakSet {
    if values.is_empty() {
        return BreakSet::NoData;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return BreakSet::Uniform { min, max };
    }

    let breaks = rounded_breaks(min, max)
        .into_inner()
        .unwrap_or_else(|_| raw_breaks(min, max));

    BreakSet::Classes { breaks, min, max }
}

#[expect(clippy::cast_precision_loss)]
fn raw_breaks(min: f64, max: f64) -> [f64; BREAK_COUNT] {
    let step = (max - min) / CLASS_COUNT as f64;
    std::array::from_fn(|i| min + (i + 1) as f64 * step)
}

fn rounded_breaks(min: f64, max: f64) -> ArrayVec<f64, BREAK_COUNT> {
    let scale = 10_f64.powi(BREAK_PRECISION);
    let mut breaks = ArrayVec::new();
    for value in raw_breaks(min, max) {
        let rounded = (value * scale).round() / scale;
        let floor = breaks.last().copied().unwrap_or(min);
        if rounded > floor && rounded < max {
            breaks.push(rounded);
        }
    }
    breaks
}
