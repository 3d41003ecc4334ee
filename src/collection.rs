use std::borrow::Borrow;

/// The capabilities shared by sets of unique values: membership, single and bulk
/// insertion/removal, filtered removal and iteration
///
/// Every mutating method reports whether it changed the set so that callers can detect no-ops.
/// Note that `add` follows the opposite convention to `std`: it returns `true` when the value was
/// *already* present and nothing changed.
///
/// The bulk methods have default implementations in terms of `add`, `remove` and `contains`.
///
/// # Examples
///
/// ```
/// use sorted_collections::{Set, SortedSet};
///
/// let mut set = SortedSet::new();
/// assert!(set.add_all(vec![5, 1, 3, 1, 5]));
/// assert!(!set.add_all(vec![5, 1, 3]));
/// assert!(set.contains_all(&[1, 3]));
///
/// assert!(set.remove_if(|&value| value > 2));
/// assert_eq!(set.to_sorted_vec(), vec![1]);
///
/// fn total<S: Set<i32>>(set: &S) -> i32 {
///     Set::iter(set).sum()
/// }
/// assert_eq!(total(&set), 1);
/// ```
pub trait Set<T> {
    /// Iterator over the values of the set, borrowing the set
    type Iter<'a>: Iterator<Item = &'a T>
        where Self: 'a,
              T: 'a;

    /// Iterates over the values of the set
    ///
    /// The set cannot be modified while the iterator is alive.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns the number of values in the set
    fn len(&self) -> usize;

    /// Returns true if the set contains no values
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the set contains `value`
    fn contains(&self, value: &T) -> bool;

    /// Adds `value` to the set
    ///
    /// Returns `true` if the value was already present, in which case the set is not modified, or
    /// `false` if it was newly inserted.
    fn add(&mut self, value: T) -> bool;

    /// Removes `value` from the set. Returns whether the value was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Removes every value for which `predicate` returns `true`, visiting each value once.
    /// Returns whether any value was removed.
    fn remove_if<F>(&mut self, predicate: F) -> bool
        where F: FnMut(&T) -> bool,
              Self: Sized;

    /// Adds every value in `values`. Returns `true` if at least one of them was newly inserted.
    fn add_all<I>(&mut self, values: I) -> bool
        where I: IntoIterator<Item = T>,
              Self: Sized,
    {
        let mut changed = false;
        for value in values {
            let inserted = !self.add(value);
            changed |= inserted;
        }

        changed
    }

    /// Removes every value in `values`. Returns `true` if at least one of them was present.
    fn remove_all<I>(&mut self, values: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>,
              Self: Sized,
    {
        let mut changed = false;
        for value in values {
            changed |= self.remove(value.borrow());
        }

        changed
    }

    /// Returns true if every value in `values` is in the set
    fn contains_all<I>(&self, values: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>,
              Self: Sized,
    {
        values.into_iter().all(|value| self.contains(value.borrow()))
    }
}
