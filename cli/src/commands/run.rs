//! The `run` command - scan a JSON dataset.

use viewscan::{Dataset, ScanOptions};

use crate::cli::RunArgs;
use crate::common::input::read_input;
use crate::common::output::report;
use crate::common::{CliError, CliResult};

/// Run the run command.
///
/// Flags given on the command line take precedence over the dataset's own
/// `bound` and `overrun`: `--exclusive`/`--inclusive` set the bound and
/// `--skip-overrun`/`--strict` set the overrun policy.
pub fn run(args: RunArgs) -> CliResult<()> {
    let (content, display_name) = read_input(&args.file)?;

    let mut dataset = Dataset::from_json(&content)
        .map_err(|e| CliError::with_filename(e, display_name.as_str()))?;

    let flags = args.options.to_override();
    dataset.bound = flags.bound.or(dataset.bound);
    dataset.overrun = flags.overrun.or(dataset.overrun);
    tracing::debug!(file = %display_name, count = dataset.count, "scanning dataset");

    let found = dataset.scan(&ScanOptions::default())?;
    report(dataset.key, found);
    Ok(())
}
