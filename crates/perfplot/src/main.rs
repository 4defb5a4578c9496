// File: crates/perfplot/src/main.rs
// Summary: perfplot entry point; usage errors exit with status 2, other failures propagate.

use anyhow::Result;
use perfplot::cli::{Cli, UsageError, USAGE_EXIT_CODE};

fn main() -> Result<()> {
    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(UsageError::TooFewArguments { usage }) => {
            println!("{usage}");
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(UsageError::Clap(e)) => e.exit(),
    };

    perfplot::logging::init(cli.verbose)?;
    let config = cli.config();
    perfplot::run(&cli.title, &cli.output, &cli.inputs, &config)
}
