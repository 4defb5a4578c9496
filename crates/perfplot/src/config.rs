// File: crates/perfplot/src/config.rs
// Summary: Run configuration built once from the command line.

use chart_core::{LegendStyle, RenderOptions};

/// How legend labels are derived from input file paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LabelMode {
    /// The input path, verbatim.
    #[default]
    Filename,
    /// The first `var<digits>` substring of the path, else the path.
    VarPattern,
}

impl LabelMode {
    /// Legend preset paired with each mode; `var-pattern` labels are short
    /// and numerous, so they get a tighter legend.
    pub fn legend_preset(self) -> LegendStyle {
        match self {
            Self::Filename => LegendStyle::default(),
            Self::VarPattern => LegendStyle::compact(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PlotConfig {
    pub label_mode: LabelMode,
    pub legend: LegendStyle,
    pub render: RenderOptions,
}

impl PlotConfig {
    pub fn new(label_mode: LabelMode) -> Self {
        Self { label_mode, legend: label_mode.legend_preset(), render: RenderOptions::default() }
    }
}

impl Default for PlotConfig {
    fn default() -> Self { Self::new(LabelMode::default()) }
}
