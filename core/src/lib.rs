//! Multi-view linear search over borrowed integer windows.
//!
//! The scanner walks one shared index across three views that address their
//! backing storage differently:
//!
//! - a **direct** view over an independent array,
//! - an **offset** view that starts a fixed number of elements into a second
//!   array and shares its storage,
//! - a **row** view over one row of an array of rows.
//!
//! It returns the first index at which any of the three holds the key.
//!
//! ```
//! use viewscan_core::{SearchQuery, View, scan};
//!
//! let direct = [5, 10, 15, 20];
//! let storage = [0, 1, 2, 3, 4, 5, 5, 5, 5];
//! let matrix = [[1, 2, 3, 4], [7, 8, 9, 15]];
//!
//! let offset = View::offset(&storage, 5).unwrap();
//! let row = View::row(&matrix, 1).unwrap();
//!
//! let query = SearchQuery::new(3, 15);
//! assert_eq!(scan(&View::direct(&direct), &offset, &row, &query), Ok(Some(2)));
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

pub mod error;
pub mod options;
pub mod query;
pub mod scanner;
pub mod view;

pub use error::{Error, ScanError, ViewError, ViewRole};
pub use options::{Bound, Overrun, ScanOptions, ScanOptionsOverride};
pub use query::SearchQuery;
pub use scanner::{MultiViewScanner, NOT_FOUND, scan, scan_single};
pub use view::{ArrayView, View};
