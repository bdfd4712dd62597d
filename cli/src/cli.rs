//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use viewscan::{Bound, Overrun, ScanOptionsOverride};

/// viewscan - find the first index where any of three integer views holds a key
#[derive(Parser, Debug)]
#[command(name = "viewscan", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan the built-in sample arrays
    Demo(DemoArgs),

    /// Scan arrays given on the command line
    Scan(ScanArgs),

    /// Scan a JSON dataset file
    Run(RunArgs),
}

/// Arguments for the `demo` command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    #[command(subcommand)]
    pub program: DemoProgram,
}

#[derive(Subcommand, Debug)]
pub enum DemoProgram {
    /// Direct, offset and row views over the sample arrays
    Multi(MultiDemoArgs),

    /// One view over a heap, stack or global array
    Single(SingleDemoArgs),
}

/// Arguments for `demo multi`.
#[derive(Args, Debug)]
pub struct MultiDemoArgs {
    /// Key to search for
    #[arg(long, default_value_t = 55, allow_negative_numbers = true)]
    pub key: i64,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Arguments for `demo single`.
#[derive(Args, Debug)]
pub struct SingleDemoArgs {
    /// Where the sample array lives
    #[arg(long, default_value = "stack")]
    pub storage: Storage,

    /// Key to search for
    #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
    pub key: i64,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Backing storage for the single-view demo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Storage {
    /// Freshly allocated, zero-filled vector
    Heap,
    /// Local array of multiples of five
    #[default]
    Stack,
    /// Static array of multiples of five
    Global,
}

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Elements of the direct view, comma-separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub direct: Vec<i64>,

    /// Backing storage of the offset view, comma-separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub storage: Vec<i64>,

    /// Number of storage elements the offset view skips
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// One row of the matrix, comma-separated; repeat for each row
    #[arg(long = "matrix-row", allow_hyphen_values = true, required = true)]
    pub matrix_rows: Vec<String>,

    /// Index of the matrix row the row view covers
    #[arg(long, default_value_t = 0)]
    pub row: usize,

    /// Number of elements each view is declared to hold
    #[arg(long)]
    pub count: usize,

    /// Key to search for
    #[arg(long, allow_negative_numbers = true)]
    pub key: i64,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Dataset file to scan (use "-" for stdin)
    pub file: String,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Scan option flags shared by every command.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OptionArgs {
    /// Stop before index COUNT instead of probing it
    #[arg(long, conflicts_with = "inclusive")]
    pub exclusive: bool,

    /// Probe index COUNT as well (the default)
    #[arg(long)]
    pub inclusive: bool,

    /// Treat reads past the end of a view as misses instead of errors
    #[arg(long, conflicts_with = "strict")]
    pub skip_overrun: bool,

    /// Fail on reads past the end of a view (the default)
    #[arg(long)]
    pub strict: bool,
}

impl OptionArgs {
    /// Options explicitly requested on the command line.
    ///
    /// Unset pairs leave the field empty so a dataset's own value survives.
    pub fn to_override(self) -> ScanOptionsOverride {
        let bound = match (self.exclusive, self.inclusive) {
            (true, _) => Some(Bound::Exclusive),
            (_, true) => Some(Bound::Inclusive),
            _ => None,
        };
        let overrun = match (self.skip_overrun, self.strict) {
            (true, _) => Some(Overrun::Skip),
            (_, true) => Some(Overrun::Strict),
            _ => None,
        };
        ScanOptionsOverride { bound, overrun }
    }
}
