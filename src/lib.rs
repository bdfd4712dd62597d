//! viewscan - first-match search across differently addressed integer views
//!
//! # Overview
//!
//! A scan walks one index across three views of integer storage and stops at
//! the first position where any of them holds the key:
//!
//! - a **direct** view over an independent array,
//! - an **offset** view starting a fixed number of elements into a second
//!   array, sharing that array's storage,
//! - a **row** view over one row of an array of rows.
//!
//! # Quick Start
//!
//! ```
//! use viewscan::{SearchQuery, View, scan};
//!
//! let direct: Vec<i64> = (1..=20).map(|i| i * 5).collect();
//! let storage: Vec<i64> = (0..20).collect();
//! let matrix = vec![direct.clone(), direct.clone()];
//!
//! let offset = View::offset(&storage, 5).unwrap();
//! let row = View::row(&matrix, 1).unwrap();
//! let query = SearchQuery::new(14, 55);
//!
//! assert_eq!(scan(&View::direct(&direct), &offset, &row, &query), Ok(Some(10)));
//! ```
//!
//! # Datasets
//!
//! [`Dataset`] bundles the storage, view parameters, query and options of one
//! scan so it can be loaded from JSON:
//!
//! ```
//! use viewscan::{Dataset, ScanOptions};
//!
//! let dataset = Dataset::from_json(r#"{
//!     "direct": [1, 2, 3],
//!     "storage": [0, 0, 7, 8],
//!     "offset": 2,
//!     "matrix": [[4, 5, 6]],
//!     "count": 1,
//!     "key": 8
//! }"#).unwrap();
//!
//! assert_eq!(dataset.scan(&ScanOptions::default()).unwrap(), Some(1));
//! ```

pub mod dataset;
pub mod error;
pub mod error_renderer;

pub use dataset::Dataset;
pub use error::Error;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from viewscan_core
pub use viewscan_core::{
    ArrayView, Bound, MultiViewScanner, NOT_FOUND, Overrun, ScanError, ScanOptions,
    ScanOptionsOverride, SearchQuery, View, ViewError, ViewRole, scan, scan_single,
};
