/// The parameter bundle of a scan: how many elements the caller vouches for
/// in each view, and the key to look for.
///
/// `count` is nominal. Nothing checks it against the views' true lengths;
/// the scanner's [`Overrun`](crate::Overrun) policy decides what happens
/// when the two disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchQuery<E> {
    count: usize,
    key: E,
}

impl<E> SearchQuery<E> {
    pub const fn new(count: usize, key: E) -> Self {
        Self { count, key }
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    pub const fn key(&self) -> &E {
        &self.key
    }
}
