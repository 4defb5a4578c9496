// File: crates/perfplot/src/lib.rs
// Summary: Benchmark plotting pipeline: labels, CSV loading, chart building, rendering.

pub mod builder;
pub mod cli;
pub mod config;
pub mod label;
pub mod loader;
pub mod logging;

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::Chart;
use tracing::{debug, info};

pub use builder::ChartBuilder;
pub use cli::{Cli, UsageError};
pub use config::{LabelMode, PlotConfig};
pub use label::LabelResolver;
pub use loader::{load_series, DataLoadError, SeriesData};

/// Load every input in order and assemble the chart.
/// The first file that fails to load aborts the whole run.
pub fn build_chart<S: AsRef<str>>(title: &str, inputs: &[S], config: &PlotConfig) -> Result<Chart> {
    let resolver = LabelResolver::new(config.label_mode).context("compiling label pattern")?;
    let mut builder = ChartBuilder::new(title);

    for input in inputs {
        let path = input.as_ref();
        let data = load_series(path)?;
        let label = resolver.resolve(path);
        info!(file = path, points = data.len(), label, "loaded series");
        builder.push(label, &data);
        debug!(ymax = builder.ymax(), "running maximum");
    }

    Ok(builder.finish(config.legend))
}

/// Full pipeline: load, build, render to `output`.
pub fn run<S: AsRef<str>>(title: &str, output: &Path, inputs: &[S], config: &PlotConfig) -> Result<()> {
    let chart = build_chart(title, inputs, config)?;
    let format = chart
        .render_to_file(&config.render, output)
        .with_context(|| format!("failed to render chart to {}", output.display()))?;
    info!(path = %output.display(), format = format.name(), series = chart.series.len(), "wrote chart");
    Ok(())
}
