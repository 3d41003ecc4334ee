use std::iter::FusedIterator;
use std::vec;

use crate::map::TreeMap;

/// Iterates over the values of a `SortedSet` in ascending order
///
/// This is a live view of the set. It borrows the set, so the set cannot be modified until the
/// iterator is dropped.
pub struct IterInorder<'a, T> {
    inner: crate::map::IterInorder<'a, T, ()>
}

impl<'a, T> Clone for IterInorder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> IterInorder<'a, T> {
    pub(super) fn new<C>(map: &'a TreeMap<T, (), C>) -> Self {
        Self {
            inner: map.iter(),
        }
    }
}

impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(value, ())| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for IterInorder<'a, T> {}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}

/// An owning iterator over the values of a `SortedSet` in ascending order
pub struct IntoIter<T> {
    inner: vec::IntoIter<(T, ())>,
}

impl<T> IntoIter<T> {
    pub(super) fn new<C>(map: TreeMap<T, (), C>) -> Self {
        Self {
            inner: map.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(value, ())| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(value, ())| value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
