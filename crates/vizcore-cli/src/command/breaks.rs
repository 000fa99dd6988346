use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use vizcore_data::{extract, format};
use vizcore_stats::breaks::{self, BreakSet};

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct BreaksArg {
    /// Path to a GeoJSON-like feature collection
    pub features: PathBuf,

    /// Feature property to classify
    #[arg(long)]
    pub metric: String,

    /// Decimals shown in legend labels
    #[arg(long, default_value_t = 2)]
    pub decimals: usize,

    /// Output file path (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct BreaksReport {
    metric: String,
    values: usize,
    classes: BreakSet,
    labels: Vec<String>,
    /// Number of values per class
    counts: Vec<usize>,
}

pub(crate) fn run(arg: &BreaksArg) -> anyhow::Result<()> {
    tracing::info!("Loading features from {}...", arg.features.display());
    let collection = util::read_features_file(&arg.features)?;
    let values = extract::extract_metric_values(&collection.features, &arg.metric);
    util::log_dropped("feature", collection.features.len(), values.len());

    let classes = breaks::calculate_breaks(&values);
    match classes {
        BreakSet::NoData => tracing::warn!("No usable values for metric '{}'", arg.metric),
        BreakSet::Uniform { min, .. } => {
            tracing::warn!("All values equal {min}; using a single class");
        }
        BreakSet::Classes { breaks, .. } => tracing::info!("Class breaks: {breaks:?}"),
    }

    let mut counts = vec![0; classes.class_count()];
    for class in values.iter().filter_map(|&v| classes.classify(v)) {
        counts[class] += 1;
    }

    let report = BreaksReport {
        metric: arg.metric.clone(),
        values: values.len(),
        classes,
        labels: format::break_labels(&classes, arg.decimals),
        counts,
    };
    util::save_report(&report, arg.output.as_deref())
}
