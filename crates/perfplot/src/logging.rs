// File: crates/perfplot/src/logging.rs
// Summary: tracing subscriber setup for the CLI (stderr, compact, RUST_LOG aware).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Map `--verbose` occurrences to a filter directive.
pub fn verbosity_to_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, wins over `verbosity`.
/// Calling this again after a subscriber is installed is a no-op.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::try_new(verbosity_to_filter(verbosity))?,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    // Already initialised (e.g. by a test harness): keep the existing one.
    let _ = Registry::default().with(filter).with(fmt_layer).try_init();
    Ok(())
}
