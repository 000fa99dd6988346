use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use vizcore_data::groups::{DEFAULT_VALUE_FIELD, GroupedValues};

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct DivergentArg {
    /// Path to a JSON object of categories mapping subgroups to records
    pub groups: PathBuf,

    /// Record field holding the value
    #[arg(long, default_value = DEFAULT_VALUE_FIELD)]
    pub value_field: String,

    /// Output file path (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SubgroupMean {
    key: String,
    mean: Option<f64>,
}

#[derive(Debug, Serialize)]
struct DivergentReport {
    categories: usize,
    means: Vec<SubgroupMean>,
    pair: Option<(String, String)>,
}

pub(crate) fn run(arg: &DivergentArg) -> anyhow::Result<()> {
    tracing::info!("Loading groups from {}...", arg.groups.display());
    let value: Value = util::read_json_file("groups", &arg.groups)?;
    let groups = GroupedValues::from_json(&value, &arg.value_field)
        .with_context(|| format!("Invalid grouped data in {}", arg.groups.display()))?;

    let pair = groups.most_divergent_pair();
    match &pair {
        Some((a, b)) => tracing::info!("Most divergent subgroups: {a} and {b}"),
        None => tracing::warn!("Fewer than two subgroups have data"),
    }

    let means = groups
        .subgroup_means()
        .into_iter()
        .map(|(key, mean)| SubgroupMean { key, mean })
        .collect();
    let report = DivergentReport {
        categories: groups.categories.len(),
        means,
        pair,
    };
    util::save_report(&report, arg.output.as_deref())
}
