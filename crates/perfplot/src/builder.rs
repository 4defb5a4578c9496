// File: crates/perfplot/src/builder.rs
// Summary: Accumulates benchmark series onto one chart and finalizes axes.

use chart_core::{Axis, Chart, LegendStyle, Series};

use crate::loader::SeriesData;

pub const X_LABEL: &str = "Size (p=m0)";
pub const Y_LABEL: &str = "Performance (GFLOP/s)";
/// Upper y bound is the largest result times this, so no curve touches the top.
pub const HEADROOM_FACTOR: f64 = 1.5;
/// Starting value of the running y maximum; keeps the y range non-degenerate.
pub const Y_MAX_FLOOR: f64 = 1.0;
/// Fraction of the x extent added on each side.
pub const X_MARGIN: f64 = 0.05;

pub struct ChartBuilder {
    chart: Chart,
    ymax: f64,
}

impl ChartBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        let mut chart = Chart::new();
        chart.title = title.into();
        Self { chart, ymax: Y_MAX_FLOOR }
    }

    /// Append one series, in call order.
    pub fn push(&mut self, label: impl Into<String>, data: &SeriesData) {
        let series = Series::from_columns(label, &data.m0, &data.result);
        if let Some(m) = series.y_max() {
            self.ymax = self.ymax.max(m);
        }
        self.chart.add_series(series);
    }

    /// Running maximum of all results seen so far (never below 1).
    pub fn ymax(&self) -> f64 { self.ymax }

    pub fn series_count(&self) -> usize { self.chart.series.len() }

    pub fn finish(mut self, legend: LegendStyle) -> Chart {
        self.chart.x_axis = Axis::new(X_LABEL, 0.0, 1.0);
        self.chart.autoscale_x(X_MARGIN);
        self.chart.y_axis = Axis::new(Y_LABEL, 0.0, self.ymax * HEADROOM_FACTOR);
        self.chart.legend = Some(legend);
        self.chart
    }
}
