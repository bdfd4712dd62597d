//! The multi-view linear scan.
//!
//! One index walks all three views in lockstep. At each index the views are
//! checked left to right (direct, offset, row) and the first hit ends the
//! scan. The result is the index only, so a caller cannot tell which view
//! matched.
//!
//! Under the default [`Bound::Inclusive`] the scan probes `count + 1`
//! positions, `0..=count`. Views sized exactly `count` therefore overrun on a
//! miss, which [`Overrun::Strict`] reports as
//! [`ScanError::OutOfBounds`] instead of reading past the end.

use crate::error::{ScanError, ViewRole};
use crate::options::{Bound, Overrun, ScanOptions};
use crate::query::SearchQuery;
use crate::view::ArrayView;

/// Sentinel returned by the `*_index` methods when no view holds the key.
pub const NOT_FOUND: isize = -1;

/// Scans views for the first index holding a key.
///
/// The scanner is stateless apart from its [`ScanOptions`]; it never
/// allocates and never mutates its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MultiViewScanner {
    options: ScanOptions,
}

impl MultiViewScanner {
    pub const fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Find the first index at which `direct`, `offset` or `row` holds
    /// `query.key()`.
    ///
    /// Returns `Ok(None)` when no probed index matches.
    pub fn scan<E, D, O, R>(
        &self,
        direct: &D,
        offset: &O,
        row: &R,
        query: &SearchQuery<E>,
    ) -> Result<Option<usize>, ScanError>
    where
        E: PartialEq,
        D: ArrayView<E> + ?Sized,
        O: ArrayView<E> + ?Sized,
        R: ArrayView<E> + ?Sized,
    {
        let key = query.key();
        for index in self.indices(query.count()) {
            if self.probe(direct, ViewRole::Direct, index, key)?
                || self.probe(offset, ViewRole::Offset, index, key)?
                || self.probe(row, ViewRole::Row, index, key)?
            {
                tracing::debug!(index, count = query.count(), "key found");
                return Ok(Some(index));
            }
        }
        tracing::debug!(count = query.count(), "key not found");
        Ok(None)
    }

    /// Like [`scan`](Self::scan), reporting a miss as [`NOT_FOUND`].
    pub fn scan_index<E, D, O, R>(
        &self,
        direct: &D,
        offset: &O,
        row: &R,
        query: &SearchQuery<E>,
    ) -> Result<isize, ScanError>
    where
        E: PartialEq,
        D: ArrayView<E> + ?Sized,
        O: ArrayView<E> + ?Sized,
        R: ArrayView<E> + ?Sized,
    {
        self.scan(direct, offset, row, query).map(to_sentinel)
    }

    /// Find the first index at which a single view holds `query.key()`.
    ///
    /// Bound and overrun rules are the same as for [`scan`](Self::scan);
    /// overruns are reported against [`ViewRole::Direct`].
    pub fn scan_single<E, V>(
        &self,
        view: &V,
        query: &SearchQuery<E>,
    ) -> Result<Option<usize>, ScanError>
    where
        E: PartialEq,
        V: ArrayView<E> + ?Sized,
    {
        let key = query.key();
        for index in self.indices(query.count()) {
            if self.probe(view, ViewRole::Direct, index, key)? {
                tracing::debug!(index, count = query.count(), "key found");
                return Ok(Some(index));
            }
        }
        tracing::debug!(count = query.count(), "key not found");
        Ok(None)
    }

    /// Like [`scan_single`](Self::scan_single), reporting a miss as [`NOT_FOUND`].
    pub fn scan_single_index<E, V>(
        &self,
        view: &V,
        query: &SearchQuery<E>,
    ) -> Result<isize, ScanError>
    where
        E: PartialEq,
        V: ArrayView<E> + ?Sized,
    {
        self.scan_single(view, query).map(to_sentinel)
    }

    fn indices(&self, count: usize) -> impl Iterator<Item = usize> {
        // An inclusive range cannot overflow, even at `usize::MAX`.
        let last = match self.options.bound {
            Bound::Inclusive => Some(count),
            Bound::Exclusive => count.checked_sub(1),
        };
        last.into_iter().flat_map(|last| 0..=last)
    }

    fn probe<E, V>(
        &self,
        view: &V,
        role: ViewRole,
        index: usize,
        key: &E,
    ) -> Result<bool, ScanError>
    where
        E: PartialEq,
        V: ArrayView<E> + ?Sized,
    {
        match view.get(index) {
            Some(value) => Ok(value == *key),
            None => match self.options.overrun {
                Overrun::Strict => Err(ScanError::OutOfBounds {
                    view: role,
                    index,
                    len: view.len(),
                }),
                Overrun::Skip => {
                    tracing::warn!(
                        view = %role,
                        index,
                        len = view.len(),
                        "skipping read past end of view"
                    );
                    Ok(false)
                }
            },
        }
    }
}

/// Scan with the default options. See [`MultiViewScanner::scan`].
pub fn scan<E, D, O, R>(
    direct: &D,
    offset: &O,
    row: &R,
    query: &SearchQuery<E>,
) -> Result<Option<usize>, ScanError>
where
    E: PartialEq,
    D: ArrayView<E> + ?Sized,
    O: ArrayView<E> + ?Sized,
    R: ArrayView<E> + ?Sized,
{
    MultiViewScanner::default().scan(direct, offset, row, query)
}

/// Single-view scan with the default options. See [`MultiViewScanner::scan_single`].
pub fn scan_single<E, V>(view: &V, query: &SearchQuery<E>) -> Result<Option<usize>, ScanError>
where
    E: PartialEq,
    V: ArrayView<E> + ?Sized,
{
    MultiViewScanner::default().scan_single(view, query)
}

fn to_sentinel(found: Option<usize>) -> isize {
    // A match comes from a real element, so its index fits in `isize`.
    found.map_or(NOT_FOUND, |index| index as isize)
}

#[cfg(test)]
#[path = "scanner_test.rs"]
mod scanner_test;
