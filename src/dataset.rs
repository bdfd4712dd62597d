//! JSON-loadable scan inputs.

use serde::{Deserialize, Serialize};
use viewscan_core::{
    Bound, MultiViewScanner, Overrun, ScanOptions, ScanOptionsOverride, SearchQuery, View,
};

use crate::Error;

/// Owned storage and parameters for one three-view scan.
///
/// `offset` selects where the offset view starts inside `storage`, and `row`
/// selects which row of `matrix` the row view covers. Both default to `0`.
/// `bound` and `overrun` override the options the scan is run with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    pub direct: Vec<i64>,
    pub storage: Vec<i64>,
    #[serde(default)]
    pub offset: usize,
    pub matrix: Vec<Vec<i64>>,
    #[serde(default)]
    pub row: usize,
    pub count: usize,
    pub key: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<Bound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrun: Option<Overrun>,
}

impl Dataset {
    /// Parse a dataset from JSON text.
    ///
    /// Parse failures carry the source text and the byte span of the error so
    /// they can be rendered with [`render_error_to`](crate::render_error_to).
    pub fn from_json(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(|err| {
            let full = err.to_string();
            let position = format!(" at line {} column {}", err.line(), err.column());
            let message = full.strip_suffix(&position).unwrap_or(&full).to_string();
            Error::Dataset {
                message,
                text: text.to_string(),
                span: span_at(text, err.line(), err.column()),
            }
        })
    }

    /// The options override this dataset carries.
    pub fn options_override(&self) -> ScanOptionsOverride {
        ScanOptionsOverride {
            bound: self.bound,
            overrun: self.overrun,
        }
    }

    pub fn query(&self) -> SearchQuery<i64> {
        SearchQuery::new(self.count, self.key)
    }

    /// Build the three views and scan them.
    ///
    /// The dataset's own `bound`/`overrun` take precedence over `base`.
    pub fn scan(&self, base: &ScanOptions) -> Result<Option<usize>, Error> {
        let direct = View::direct(&self.direct);
        let offset = View::offset(&self.storage, self.offset)?;
        let row = View::row(&self.matrix, self.row)?;

        let options = base.override_with(&self.options_override());
        let found = MultiViewScanner::new(options).scan(&direct, &offset, &row, &self.query())?;
        Ok(found)
    }
}

/// Byte span of the character at a 1-based `line`/`column`, clamped to `text`.
///
/// serde_json counts columns in bytes; the span is widened to whole characters.
fn span_at(text: &str, line: usize, column: usize) -> std::ops::Range<usize> {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let mut start = (line_start + column.saturating_sub(1)).min(text.len());
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let width = text[start..].chars().next().map_or(0, char::len_utf8);
    start..start + width
}
