//! Error types for view construction and scanning.

use core::fmt;

use thiserror::Error;

/// Which of the scanner's inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewRole {
    /// The independently allocated array.
    Direct,
    /// The window advanced into a second array.
    Offset,
    /// The selected row of the array of rows.
    Row,
}

impl fmt::Display for ViewRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewRole::Direct => "direct",
            ViewRole::Offset => "offset",
            ViewRole::Row => "row",
        };
        f.write_str(name)
    }
}

/// A view could not be constructed over the given storage.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// The offset lies past the end of the storage it should advance into.
    #[error("offset {offset} is past the end of storage of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// The row index does not select an existing row.
    #[error("row {row} does not exist in a matrix of {rows} row(s)")]
    RowOutOfRange { row: usize, rows: usize },
}

/// A scan probed an index its inputs cannot satisfy.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The scan reached an index at or past a view's true length.
    ///
    /// Only raised under [`Overrun::Strict`](crate::Overrun::Strict).
    #[error("{view} view read out of bounds: index {index}, length {len}")]
    OutOfBounds {
        view: ViewRole,
        index: usize,
        len: usize,
    },
}

/// Any error produced by this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Scan(#[from] ScanError),
}
