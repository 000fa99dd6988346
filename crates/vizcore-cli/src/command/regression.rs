use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use serde::Serialize;
use vizcore_stats::regression::{self, DEFAULT_BAND_STEPS, LineAndBand};

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct RegressionArg {
    /// Path to a JSON array of row objects
    pub rows: PathBuf,

    /// Row field holding the x value
    #[arg(long, default_value = "x")]
    pub x_field: String,

    /// Row field holding the y value
    #[arg(long, default_value = "y")]
    pub y_field: String,

    /// Number of intervals the x range is sampled with
    #[arg(long, default_value_t = DEFAULT_BAND_STEPS)]
    pub steps: usize,

    /// Start of the sampled x range (defaults to the smallest x)
    #[arg(long)]
    pub x_min: Option<f64>,

    /// End of the sampled x range (defaults to the largest x)
    #[arg(long)]
    pub x_max: Option<f64>,

    /// Output file path (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RegressionReport {
    points: usize,
    pearson_r: f64,
    #[serde(flatten)]
    fit: LineAndBand,
}

pub(crate) fn run(arg: &RegressionArg) -> anyhow::Result<()> {
    tracing::info!("Loading rows from {}...", arg.rows.display());
    let rows = util::read_rows_file(&arg.rows)?;
    let points = vizcore_data::extract::extract_points(&rows, &arg.x_field, &arg.y_field);
    util::log_dropped("row", rows.len(), points.len());

    let observed_min = points.iter().map(|p| p.x).reduce(f64::min);
    let observed_max = points.iter().map(|p| p.x).reduce(f64::max);
    let (Some(x_min), Some(x_max)) = (arg.x_min.or(observed_min), arg.x_max.or(observed_max))
    else {
        bail!(
            "No usable ({}, {}) points in {} and no explicit x range given",
            arg.x_field,
            arg.y_field,
            arg.rows.display()
        );
    };

    let fit = regression::line_and_band(&points, x_min, x_max, arg.steps);
    let pearson_r = regression::pearson_r(&points);
    tracing::info!(
        "Fitted y = {:.4} + {:.4} x over {} points (r = {:.4})",
        fit.model.intercept,
        fit.model.slope,
        points.len(),
        pearson_r
    );
    if !fit.model.residual_std_error.is_finite() {
        tracing::warn!("Residual standard error is undefined; the band collapses onto the line");
    }

    let report = RegressionReport {
        points: points.len(),
        pearson_r,
        fit,
    };
    util::save_report(&report, arg.output.as_deref())
}
