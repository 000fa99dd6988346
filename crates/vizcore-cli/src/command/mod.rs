use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{
    breaks::BreaksArg, density::DensityArg, divergent::DivergentArg, regression::RegressionArg,
};

mod breaks;
mod density;
mod divergent;
mod regression;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Statistic to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Fit a trend line with a confidence band to (x, y) rows
    Regression(#[clap(flatten)] RegressionArg),
    /// Estimate a density curve and quartiles for a numeric sample
    Density(#[clap(flatten)] DensityArg),
    /// Compute choropleth class breaks for a feature metric
    Breaks(#[clap(flatten)] BreaksArg),
    /// Select the two subgroups whose means differ the most
    Divergent(#[clap(flatten)] DivergentArg),
}

fn init_logging() {
    // stdout carries the JSON result
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging();
    match args.mode {
        Mode::Regression(arg) => regression::run(&arg)?,
        Mode::Density(arg) => density::run(&arg)?,
        Mode::Breaks(arg) => breaks::run(&arg)?,
        Mode::Divergent(arg) => divergent::run(&arg)?,
    }
    Ok(())
}
