//! Orderings used to arrange the keys of a [`TreeMap`](crate::TreeMap) or the values of a
//! [`SortedSet`](crate::SortedSet)
//!
//! The ordering is chosen once, when the collection is created, and cannot be replaced afterwards.
//! Any `Fn(&T, &T) -> Ordering` closure or function pointer can be used as a comparator.
//!
//! ```
//! use std::cmp::Ordering;
//! use sorted_collections::compare::{Compare, Natural};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//!
//! let descending = |a: &i32, b: &i32| b.cmp(a);
//! assert_eq!(descending.compare(&1, &2), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over values of type `T`
///
/// Implementations must be a valid strict weak ordering. Values that compare `Equal` are treated
/// as the same key. An inconsistent comparator is not detected, but the resulting membership and
/// iteration order are unspecified.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The intrinsic ordering of `T` given by its `Ord` implementation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Compare<T> for F
    where T: ?Sized,
          F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
