use crate::{
    density::{self, DensityPoint},
    descriptive::DescriptiveStats,
    quantile::Quartiles,
};

/// Distribution summary for violin plots with a box-plot overlay.
///
/// Runs the density estimator and the quartile calculator side by side on
/// the same sample:
/// - Descriptive statistics (range, mean, standard deviation)
/// - Quartiles for the box
/// - Density curve for the violin outline
///
/// # Examples
///
/// ```
/// use vizcore_stats::summary::DistributionSummary;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let summary = DistributionSummary::new(&values, None, 50).unwrap();
///
/// assert_eq!(summary.stats.mean, 5.5);
/// assert_eq!(summary.quartiles.median, 5.5);
/// assert_eq!(summary.density.len(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DistributionSummary {
    /// Basic descriptive statistics for the sample.
    pub stats: DescriptiveStats,
    /// Box-plot quartiles.
    pub quartiles: Quartiles,
    /// Density curve evaluated on `grid_size` points.
    pub density: Vec<DensityPoint>,
}

impl DistributionSummary {
    /// Summarizes a sample.
    ///
    /// Non-finite values are skipped for every part of the summary so the
    /// box and the violin describe the same observations.
    ///
    /// # Arguments
    ///
    /// * `values` - The observations to summarize
    /// * `bandwidth` - Optional kernel bandwidth, see [`density::kernel_density`]
    /// * `grid_size` - Number of density grid points
    ///
    /// # Returns
    ///
    /// * `Some(DistributionSummary)` - if the sample contains at least one finite value
    /// * `None` - otherwise
    #[must_use]
    pub fn new(values: &[f64], bandwidth: Option<f64>, grid_size: usize) -> Option<Self> {
        let mut sorted = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);

        let stats = DescriptiveStats::new(sorted.iter().copied())?;
        let quartiles = Quartiles::from_sorted(&sorted)?;
        let density = density::kernel_density(&sorted, bandwidth, grid_size);

        Some(Self {
            stats,
            quartiles,
            density,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(DistributionSummary::new(&[], None, 10).is_none());
        assert!(DistributionSummary::new(&[f64::NAN], None, 10).is_none());
    }

    #[test]
    fn test_skips_non_finite_values() {
        let with_nan = DistributionSummary::new(&[3.0, f64::NAN, 1.0, 2.0], None, 16).unwrap();
        let clean = DistributionSummary::new(&[1.0, 2.0, 3.0], None, 16).unwrap();
        assert_eq!(with_nan, clean);
        assert_eq!(with_nan.stats.count, 3);
    }

    #[test]
    fn test_box_within_violin_range() {
        let summary = DistributionSummary::new(&[0.5, 1.0, 4.0, 4.5, 9.0], Some(0.5), 32).unwrap();
        let first = summary.density.first().unwrap().x;
        let last = summary.density.last().unwrap().x;
        assert!(first <= summary.quartiles.q1);
        assert!(summary.quartiles.q3 <= last);
    }
}
