//! The `demo` command - scan the built-in sample arrays.
//!
//! `demo multi` scans a direct view over [`GLOBAL`], an offset view five
//! elements into a second array, and row 1 of a two-row matrix. `demo single`
//! scans one array, allocated on the heap, on the stack, or as a static.
//! Both declare a count of [`ARRAY_SIZE`], so under the default options a
//! miss probes one element past the end of every view sized `ARRAY_SIZE`.

use viewscan::{MultiViewScanner, ScanOptions, SearchQuery, View};

use crate::cli::{DemoArgs, DemoProgram, MultiDemoArgs, SingleDemoArgs, Storage};
use crate::common::CliResult;
use crate::common::output::report;

pub const ARRAY_SIZE: usize = 20;

pub static GLOBAL: [i64; ARRAY_SIZE] = [
    5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90, 95, 100,
];

/// Run the demo command.
pub fn run(args: DemoArgs) -> CliResult<()> {
    match args.program {
        DemoProgram::Multi(args) => run_multi(args),
        DemoProgram::Single(args) => run_single(args),
    }
}

/// `0..ARRAY_SIZE` with indices `5..ARRAY_SIZE - 4` overwritten by `5`.
pub fn offset_storage() -> Vec<i64> {
    let mut storage: Vec<i64> = (0..ARRAY_SIZE as i64).collect();
    for value in &mut storage[5..ARRAY_SIZE - 4] {
        *value = 5;
    }
    storage
}

fn run_multi(args: MultiDemoArgs) -> CliResult<()> {
    let storage = offset_storage();
    let matrix = [GLOBAL, GLOBAL];

    let direct = View::direct(&GLOBAL);
    let offset = View::offset(&storage, 5)?;
    let row = View::row(&matrix, 1)?;

    let options = ScanOptions::default().override_with(&args.options.to_override());
    tracing::debug!(?options, key = args.key, "running multi-view demo");

    let query = SearchQuery::new(ARRAY_SIZE, args.key);
    let found = MultiViewScanner::new(options).scan(&direct, &offset, &row, &query)?;
    report(args.key, found);
    Ok(())
}

fn run_single(args: SingleDemoArgs) -> CliResult<()> {
    let options = ScanOptions::default().override_with(&args.options.to_override());
    let scanner = MultiViewScanner::new(options);
    let query = SearchQuery::new(ARRAY_SIZE, args.key);
    tracing::debug!(?options, storage = ?args.storage, key = args.key, "running single-view demo");

    let found = match args.storage {
        Storage::Heap => {
            let heap = vec![0i64; ARRAY_SIZE];
            scanner.scan_single(&View::direct(&heap), &query)?
        }
        Storage::Stack => {
            let stack: [i64; ARRAY_SIZE] = GLOBAL;
            scanner.scan_single(&View::direct(&stack), &query)?
        }
        Storage::Global => scanner.scan_single(&View::direct(&GLOBAL), &query)?,
    };
    report(args.key, found);
    Ok(())
}
