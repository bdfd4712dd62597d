//! Public error type for the viewscan API.

use std::ops::Range;

use thiserror::Error;
use viewscan_core::{ScanError, ViewError};

/// Every failure a viewscan front end can report.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad input that never reached the scanner (unreadable file, malformed
    /// list, and the like).
    #[error("{0}")]
    Input(String),

    /// A dataset document failed to parse.
    ///
    /// `span` is a byte range into `text` pointing at the offending token.
    #[error("invalid dataset: {message}")]
    Dataset {
        message: String,
        text: String,
        span: Range<usize>,
    },

    /// View construction or the scan itself failed.
    #[error(transparent)]
    Scan(#[from] viewscan_core::Error),
}

impl From<ViewError> for Error {
    fn from(err: ViewError) -> Self {
        Error::Scan(err.into())
    }
}

impl From<ScanError> for Error {
    fn from(err: ScanError) -> Self {
        Error::Scan(err.into())
    }
}
