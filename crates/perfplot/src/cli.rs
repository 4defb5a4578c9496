// File: crates/perfplot/src/cli.rs
// Summary: Command-line surface and its conversion into a run configuration.

use std::ffi::OsString;
use std::path::PathBuf;

use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{theme, LegendStyle};
use clap::error::ErrorKind;
use clap::Parser;
use thiserror::Error;
use tracing::warn;

use crate::config::{LabelMode, PlotConfig};

/// Exit status for a usage error.
pub const USAGE_EXIT_CODE: i32 = 2;

const USAGE_ARGS: &str = "chart_title output.png file0.csv [file1.csv file2.csv ...]";

/// Plot benchmark CSV results (columns `m0` and `result`) as one line per file.
///
/// Options are long-only and go before CHART_TITLE. Positional values are taken
/// verbatim, so titles and file names may start with `-`.
#[derive(Parser, Debug, Clone)]
#[command(name = "perfplot", version, long_about = None, disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Chart title
    #[arg(value_name = "CHART_TITLE", allow_hyphen_values = true)]
    pub title: String,

    /// Output image; the format follows the extension (png, jpg, jpeg, webp)
    #[arg(value_name = "OUTPUT", allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Benchmark CSV files, plotted in the order given
    #[arg(value_name = "FILE", required = true, allow_hyphen_values = true)]
    pub inputs: Vec<String>,

    /// How legend labels are derived from the file paths
    #[arg(long, value_enum, default_value_t = LabelMode::Filename)]
    pub labels: LabelMode,

    /// Gap between legend entries, in units of the legend font size
    #[arg(long, value_name = "UNITS")]
    pub legend_spacing: Option<f32>,

    /// Legend font size in points
    #[arg(long, value_name = "POINTS")]
    pub legend_font_size: Option<f32>,

    /// Image width in pixels
    #[arg(long, default_value_t = WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,

    /// Color theme (light, dark)
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Enable verbose logging (once: INFO, twice: DEBUG, three times: TRACE)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print help
    // no short flags: a single-dash title like `-O3 vs -O2` must not parse as a flag cluster
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long, action = clap::ArgAction::Version)]
    version: Option<bool>,
}

#[derive(Debug, Error)]
pub enum UsageError {
    /// Fewer than the three required positional arguments.
    #[error("{usage}")]
    TooFewArguments { usage: String },
    /// Anything else clap rejects, or help/version requests.
    #[error(transparent)]
    Clap(#[from] clap::Error),
}

/// Usage line naming the invoking command.
pub fn usage(program: &str) -> String {
    format!("Usage: {program} {USAGE_ARGS}")
}

impl Cli {
    /// Parse a full argument list (program name first).
    pub fn parse_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        Self::try_parse_from(args.iter().cloned()).map_err(|e| match e.kind() {
            ErrorKind::MissingRequiredArgument => {
                let program = args
                    .first()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "perfplot".to_string());
                UsageError::TooFewArguments { usage: usage(&program) }
            }
            _ => UsageError::Clap(e),
        })
    }

    /// Build the run configuration: label mode preset, then explicit overrides.
    pub fn config(&self) -> PlotConfig {
        let mut config = PlotConfig::new(self.labels);
        let preset = config.legend;
        config.legend = LegendStyle::new(
            self.legend_spacing.unwrap_or(preset.label_spacing),
            self.legend_font_size.unwrap_or(preset.font_size),
        );
        config.render.width = self.width;
        config.render.height = self.height;
        config.render.theme = theme::find(&self.theme).unwrap_or_else(|| {
            warn!(theme = %self.theme, "unknown theme, using light");
            theme::Theme::light()
        });
        config
    }
}
