//! Read-only views over borrowed integer storage.
//!
//! [`ArrayView`] is the capability the scanner needs: a length and fallible
//! element access. [`View`] is the concrete window, built one of three ways:
//!
//! - [`View::direct`] covers a whole slice,
//! - [`View::offset`] starts a fixed number of elements into a slice,
//! - [`View::row`] covers one row of an array of rows.
//!
//! A `View` never copies. It is a borrow of the backing storage plus the
//! element offset its origin sits at, so an offset view aliases the array it
//! was cut from.

use core::fmt::{self, Debug};

use static_assertions::assert_impl_all;

use crate::error::ViewError;

pub trait ArrayView<E> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<E>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Copy> ArrayView<E> for [E] {
    fn len(&self) -> usize {
        <[E]>::len(self)
    }

    fn get(&self, index: usize) -> Option<E> {
        <[E]>::get(self, index).copied()
    }
}

impl<E: Copy, const N: usize> ArrayView<E> for [E; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<E> {
        self.as_slice().get(index).copied()
    }
}

/// A borrowed window over a contiguous run of elements.
pub struct View<'a, E> {
    storage: &'a [E],
    origin: usize,
}

// --- Manual Clone/Copy/Debug to avoid E: Clone/Copy bounds ---

impl<E> Clone for View<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for View<'_, E> {}

impl<E: Debug> Debug for View<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("origin", &self.origin)
            .field("elements", &self.as_slice())
            .finish()
    }
}

assert_impl_all!(View<'static, i64>: Copy, Send, Sync);

impl<'a, E> View<'a, E> {
    /// View the whole of `storage`.
    pub const fn direct(storage: &'a [E]) -> Self {
        Self { storage, origin: 0 }
    }

    /// View `storage` from element `offset` onward.
    ///
    /// `offset == storage.len()` is allowed and yields an empty view.
    pub fn offset(storage: &'a [E], offset: usize) -> Result<Self, ViewError> {
        if offset > storage.len() {
            return Err(ViewError::OffsetOutOfRange {
                offset,
                len: storage.len(),
            });
        }
        Ok(Self {
            storage,
            origin: offset,
        })
    }

    /// View exactly row `row` of `rows`.
    ///
    /// Rows may be fixed-size arrays or any other slice-like type; they do not
    /// need to share a length.
    pub fn row<R>(rows: &'a [R], row: usize) -> Result<Self, ViewError>
    where
        R: AsRef<[E]>,
    {
        let selected = rows.get(row).ok_or(ViewError::RowOutOfRange {
            row,
            rows: rows.len(),
        })?;
        Ok(Self::direct(selected.as_ref()))
    }

    /// Element offset of this view's first element within its backing storage.
    pub const fn origin(&self) -> usize {
        self.origin
    }

    /// The full backing storage, including elements before the origin.
    pub const fn storage(&self) -> &'a [E] {
        self.storage
    }

    /// The elements reachable through this view.
    pub fn as_slice(&self) -> &'a [E] {
        // `origin <= storage.len()` is upheld by every constructor.
        &self.storage[self.origin..]
    }
}

impl<E: Copy> ArrayView<E> for View<'_, E> {
    fn len(&self) -> usize {
        self.storage.len() - self.origin
    }

    fn get(&self, index: usize) -> Option<E> {
        let at = self.origin.checked_add(index)?;
        self.storage.get(at).copied()
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
