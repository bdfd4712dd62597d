//! The `scan` command - scan arrays given as command-line lists.

use viewscan::{MultiViewScanner, ScanOptions, SearchQuery, View};

use crate::cli::ScanArgs;
use crate::common::CliResult;
use crate::common::input::parse_list;
use crate::common::output::report;

/// Run the scan command.
pub fn run(args: ScanArgs) -> CliResult<()> {
    let matrix = args
        .matrix_rows
        .iter()
        .map(|row| parse_list(row))
        .collect::<Result<Vec<_>, _>>()?;

    let direct = View::direct(&args.direct);
    let offset = View::offset(&args.storage, args.offset)?;
    let row = View::row(&matrix, args.row)?;

    let options = ScanOptions::default().override_with(&args.options.to_override());
    tracing::debug!(
        ?options,
        direct = direct.as_slice().len(),
        offset = args.offset,
        row = args.row,
        "scanning command-line views"
    );

    let query = SearchQuery::new(args.count, args.key);
    let found = MultiViewScanner::new(options).scan(&direct, &offset, &row, &query)?;
    report(args.key, found);
    Ok(())
}
