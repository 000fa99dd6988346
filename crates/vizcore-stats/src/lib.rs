//! Numeric core for chart components.
//!
//! This crate derives plotted quantities from raw observations. Every
//! function is pure and deterministic; degenerate input (empty, constant or
//! single-point samples) is reported through NaN, `Option` or tagged results
//! rather than errors, so renderers can decide what "no visual encoding" means.
//!
//! - **Regression**: least-squares trend lines with a confidence band, Pearson's r
//! - **Density estimation**: Gaussian kernel density curves for density and violin plots
//! - **Quantiles**: type-7 quartiles for box-plot overlays
//! - **Class breaks**: equal-interval breaks for 5-class choropleth coloring
//! - **Divergence**: the pair of sub-series with the largest gap between means
//!
//! # Modules
//!
//! - [`regression`]: OLS fit, confidence band sampling, correlation
//! - [`density`]: Kernel density estimation and the bandwidth rule of thumb
//! - [`quantile`]: Quantiles and quartiles
//! - [`descriptive`]: Mean, variance and range of a sample
//! - [`summary`]: Quartiles and density curve of one sample, for violin plots
//! - [`breaks`]: Choropleth class breaks
//! - [`divergence`]: Most divergent pair selection
//!
//! # Examples
//!
//! ## Fitting a trend line
//!
//! ```
//! use vizcore_stats::regression::{DEFAULT_BAND_STEPS, Point2D, line_and_band};
//!
//! let points = [Point2D::new(1.0, 2.0), Point2D::new(2.0, 4.5), Point2D::new(3.0, 5.5)];
//! let chart = line_and_band(&points, 1.0, 3.0, DEFAULT_BAND_STEPS);
//! assert_eq!(chart.band.len(), DEFAULT_BAND_STEPS + 1);
//! ```
//!
//! ## Drawing a density curve
//!
//! ```
//! use vizcore_stats::density::{DEFAULT_GRID_SIZE, kernel_density};
//!
//! let curve = kernel_density(&[1.0, 1.5, 2.0, 6.0], None, DEFAULT_GRID_SIZE);
//! assert_eq!(curve.len(), DEFAULT_GRID_SIZE);
//! ```
//!
//! ## Coloring a choropleth
//!
//! ```
//! use vizcore_stats::breaks::{BreakSet, calculate_breaks};
//!
//! match calculate_breaks(&[3.0, 9.0, 4.5, 7.0]) {
//!     BreakSet::NoData => println!("no data"),
//!     BreakSet::Uniform { min, .. } => println!("every region is {min}"),
//!     BreakSet::Classes { breaks, .. } => println!("breaks: {breaks:?}"),
//! }
//! ```
//!
//! ## Picking groups to compare
//!
//! ```
//! use vizcore_stats::divergence::find_most_divergent_pair;
//!
//! let categories = vec![vec![("18-29", Some(31.0)), ("30-49", Some(35.0)), ("65+", Some(62.0))]];
//! assert_eq!(find_most_divergent_pair(&categories), Some(("18-29", "65+")));
//! ```

pub mod breaks;
pub mod density;
pub mod descriptive;
pub mod divergence;
pub mod quantile;
pub mod regression;
pub mod summary;
