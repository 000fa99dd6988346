//! Quantiles and quartiles for box-plot overlays
//!
//! Quantiles are computed with linear interpolation between order statistics
//! (Hyndman & Fan type 7, the default of R and NumPy). For a sorted sample
//! `x[0..n]` and probability `p`, the quantile sits at fractional index
//! `h = (n - 1) * p` and is interpolated between `x[floor(h)]` and `x[ceil(h)]`.
//!
//! # Examples
//!
//! ```
//! use vizcore_stats::quantile::Quartiles;
//!
//! let quartiles = Quartiles::new(&[4.0, 1.0, 3.0, 2.0]).unwrap();
//! assert_eq!(quartiles.q1, 1.75);
//! assert_eq!(quartiles.median, 2.5);
//! assert_eq!(quartiles.q3, 3.25);
//! ```

/// First quartile, median and third quartile of a sample.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Quartiles {
    /// 25th percentile.
    pub q1: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q3: f64,
}

impl Quartiles {
    /// Computes quartiles from unsorted values.
    ///
    /// The values are copied and sorted internally. Non-finite values are
    /// skipped.
    ///
    /// # Returns
    ///
    /// * `Some(Quartiles)` - if the sample contains at least one finite value
    /// * `None` - otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use vizcore_stats::quantile::Quartiles;
    ///
    /// let quartiles = Quartiles::new(&[42.0]).unwrap();
    /// assert_eq!(quartiles.q1, 42.0);
    /// assert_eq!(quartiles.median, 42.0);
    /// assert_eq!(quartiles.q3, 42.0);
    ///
    /// assert!(Quartiles::new(&[]).is_none());
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let mut sorted = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes quartiles from values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        if sorted_values.is_empty() {
            return None;
        }

        Some(Self {
            q1: quantile_sorted(sorted_values, 0.25),
            median: quantile_sorted(sorted_values, 0.5),
            q3: quantile_sorted(sorted_values, 0.75),
        })
    }

    /// Interquartile range (`q3 - q1`).
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes a single quantile from sorted data using linear interpolation.
///
/// `p` is a probability in `[0, 1]`; values outside the interval are clamped.
///
/// # Returns
///
/// The interpolated quantile. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use vizcore_stats::quantile::quantile_sorted;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(quantile_sorted(&values, 0.5), 3.0);
/// assert_eq!(quantile_sorted(&values, 0.25), 2.0);
/// assert_eq!(quantile_sorted(&[1.0, 2.0, 3.0, 4.0], 0.5), 2.5);
/// assert_eq!(quantile_sorted(&values, 1.0), 5.0);
/// assert!(quantile_sorted(&[], 0.5).is_nan());
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn quantile_sorted(sorted_values: &[f64], p: f64) -> f64 {
    let Some(&first) = sorted_values.first() else {
        return f64::NAN;
    };
    if sorted_values.len() == 1 {
        return first;
    }

    let h = (sorted_values.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let lower = sorted_values[lo];
    let upper = sorted_values[hi];
    lower + (h - lo as f64) * (upper - lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_sample() {
        let quartiles = Quartiles::new(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
        assert_eq!(quartiles.q1, 20.0);
        assert_eq!(quartiles.median, 30.0);
        assert_eq!(quartiles.q3, 40.0);
        assert_eq!(quartiles.iqr(), 20.0);
    }

    #[test]
    fn test_interpolates_between_order_statistics() {
        let quartiles = Quartiles::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(quartiles.q1, 2.25);
        assert_eq!(quartiles.median, 3.5);
        assert_eq!(quartiles.q3, 4.75);
    }

    #[test]
    fn test_unsorted_input() {
        let sorted = Quartiles::new(&[1.0, 3.0, 7.0, 8.0, 20.0]).unwrap();
        let shuffled = Quartiles::new(&[8.0, 1.0, 20.0, 7.0, 3.0]).unwrap();
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn test_ordering_invariant() {
        let values = [5.2, -1.0, 3.3, 3.3, 0.0, 12.5, 7.1, 2.2];
        let quartiles = Quartiles::new(&values).unwrap();
        assert!(quartiles.q1 <= quartiles.median);
        assert!(quartiles.median <= quartiles.q3);
    }

    #[test]
    fn test_constant_sample() {
        let quartiles = Quartiles::new(&[4.0; 7]).unwrap();
        assert_eq!(quartiles.q1, 4.0);
        assert_eq!(quartiles.median, 4.0);
        assert_eq!(quartiles.q3, 4.0);
    }

    #[test]
    fn test_skips_non_finite_values() {
        let quartiles = Quartiles::new(&[1.0, f64::NAN, 2.0]).unwrap();
        assert_eq!(quartiles, Quartiles::new(&[1.0, 2.0]).unwrap());
        assert_eq!(quartiles.median, 1.5);

        let quartiles = Quartiles::new(&[f64::NEG_INFINITY, 3.0, f64::NAN, 5.0, f64::INFINITY]);
        assert_eq!(quartiles.map(|q| q.median), Some(4.0));

        assert!(Quartiles::new(&[f64::NAN, f64::NAN]).is_none());
    }

    #[test]
    fn test_quantile_clamps_probability() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(quantile_sorted(&values, -0.5), 1.0);
        assert_eq!(quantile_sorted(&values, 1.5), 3.0);
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = Quartiles::from_sorted(&[3.0, 1.0, 2.0]);
    }
}
