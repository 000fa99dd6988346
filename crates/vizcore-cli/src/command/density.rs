use std::path::PathBuf;

use clap::Args;
use vizcore_stats::{density::DEFAULT_GRID_SIZE, summary::DistributionSummary};

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct DensityArg {
    /// Path to a JSON array of numbers, or of row objects when `--field` is given
    pub values: PathBuf,

    /// Row field holding the value
    #[arg(long)]
    pub field: Option<String>,

    /// Kernel bandwidth (Silverman's rule of thumb if omitted)
    #[arg(long)]
    pub bandwidth: Option<f64>,

    /// Number of points the density curve is evaluated on
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Output file path (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DensityArg) -> anyhow::Result<()> {
    tracing::info!("Loading sample from {}...", arg.values.display());
    let sample = util::read_sample_file(&arg.values, arg.field.as_deref())?;
    tracing::info!("Loaded {} values", sample.len());

    let summary = DistributionSummary::new(&sample, arg.bandwidth, arg.grid_size);
    match &summary {
        Some(summary) => tracing::info!(
            "Median {:.4}, IQR {:.4}, {} density points",
            summary.quartiles.median,
            summary.quartiles.iqr(),
            summary.density.len()
        ),
        None => tracing::warn!("Sample is empty; nothing to estimate"),
    }

    util::save_report(&summary, arg.output.as_deref())
}
