mod inorder;

pub use inorder::*;

use std::fmt;
use std::iter::FromIterator;

use crate::collection::Set;
use crate::compare::{Compare, Natural};
use crate::map::TreeMap;

/// A set of unique values kept in sorted order
///
/// The only storage is an ordered map from each value to `()`. Values that compare `Equal` under
/// the set's ordering are the same element, even if they are not otherwise identical. The
/// ordering is either the natural ordering of `T` (`SortedSet::new`) or a comparator supplied to
/// `SortedSet::with_comparator`, and it cannot be changed afterwards.
///
/// Insertion order is irrelevant: iteration and the sorted snapshots always follow the ordering.
///
/// The bulk operations (`add_all`, `remove_all`, `remove_if`, `contains_all`) come from the
/// [`Set`] trait.
///
/// # Examples
///
/// ```
/// use sorted_collections::{Set, SortedSet};
///
/// let mut set = SortedSet::new();
/// set.add_all(vec![5, 1, 3, 1, 5]);
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.to_sorted_vec(), vec![1, 3, 5]);
/// assert_eq!(set.to_reversed_vec(), vec![5, 3, 1]);
/// ```
#[derive(Clone)]
pub struct SortedSet<T, C = Natural> {
    items: TreeMap<T, (), C>,
}

impl<T, C: Default> Default for SortedSet<T, C> {
    fn default() -> Self {
        Self {
            items: TreeMap::default(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, C> PartialEq for SortedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.items.eq(&other.items)
    }
}

impl<T: Eq, C> Eq for SortedSet<T, C> {}

impl<T: Ord> SortedSet<T> {
    /// Creates an empty `SortedSet` ordered by the natural ordering of `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::SortedSet;
    /// let mut set: SortedSet<&str> = SortedSet::new();
    /// ```
    pub fn new() -> Self {
        Self {
            items: TreeMap::new(),
        }
    }

    /// Creates an empty set ordered by the natural ordering of `T` with the specified capacity.
    ///
    /// The set will be able to hold at least `capacity` elements without reallocating. If
    /// `capacity` is 0, the set will not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::SortedSet;
    /// let mut set: SortedSet<&str> = SortedSet::with_capacity(10);
    /// assert!(set.capacity() >= 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: TreeMap::with_capacity(capacity),
        }
    }
}

impl<T, C> SortedSet<T, C> {
    /// Creates an empty `SortedSet` ordered by `cmp`
    ///
    /// `cmp` must be a valid strict weak ordering. It is stored for the lifetime of the set and
    /// cannot be replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::SortedSet;
    ///
    /// let mut set = SortedSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// set.add(3);
    /// set.add(1);
    /// set.add(2);
    /// assert_eq!(set.to_sorted_vec(), vec![3, 2, 1]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            items: TreeMap::with_comparator(cmp),
        }
    }

    /// Returns the number of values in the set
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the set is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns the comparator that orders this set
    pub fn comparator(&self) -> &C {
        self.items.comparator()
    }

    /// Clears the set, removing all values. The ordering is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the values of the set in ascending order
    ///
    /// The iterator borrows the set, so the set cannot be modified during the traversal.
    pub fn iter(&self) -> IterInorder<T> {
        IterInorder::new(&self.items)
    }

    /// Returns a new vector of the values in ascending order
    ///
    /// The vector is a copy: later changes to the set do not affect it.
    pub fn to_sorted_vec(&self) -> Vec<T>
        where T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns a new vector of the values in descending order
    ///
    /// This is exactly `to_sorted_vec` reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::sortedset;
    ///
    /// let set = sortedset!["b", "c", "a"];
    /// assert_eq!(set.to_reversed_vec(), vec!["c", "b", "a"]);
    /// ```
    pub fn to_reversed_vec(&self) -> Vec<T>
        where T: Clone,
    {
        let mut values = self.to_sorted_vec();
        values.reverse();
        values
    }
}

impl<T, C: Compare<T>> SortedSet<T, C> {
    /// Returns `true` if the set contains a value equal to `value` under the set's ordering
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// # assert!(!set.contains(&1));
    /// set.add(1);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains_key(value)
    }

    /// Returns the stored value equal to `value` under the set's ordering, if any
    pub fn get(&self, value: &T) -> Option<&T> {
        self.items.get_entry(value).map(|(value, ())| value)
    }

    /// Adds a value to the set
    ///
    /// Returns `true` if an equal value was already present, in which case the set is left
    /// unchanged and the stored value is kept. Returns `false` if the value was newly inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// assert!(!set.add(37));
    /// assert!(set.add(37));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        if self.items.contains_key(&value) {
            return true;
        }

        self.items.insert(value, ());
        false
    }

    /// Removes a value from the set. Returns whether the value was present in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// set.add(String::from("abc"));
    /// assert!(set.remove(&String::from("abc")));
    /// assert!(!set.remove(&String::from("abc")));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the stored value equal to `value`, if any
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.items.remove_entry(value).map(|(value, ())| value)
    }
}

impl<T, C: Compare<T>> Set<T> for SortedSet<T, C> {
    type Iter<'a> = IterInorder<'a, T>
        where Self: 'a,
              T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        SortedSet::iter(self)
    }

    fn len(&self) -> usize {
        SortedSet::len(self)
    }

    fn contains(&self, value: &T) -> bool {
        SortedSet::contains(self, value)
    }

    fn add(&mut self, value: T) -> bool {
        SortedSet::add(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        SortedSet::remove(self, value)
    }

    fn remove_if<F>(&mut self, mut predicate: F) -> bool
        where F: FnMut(&T) -> bool,
    {
        self.items.retain(|value, ()| !predicate(value)) > 0
    }
}

impl<T, C: Compare<T>> Extend<T> for SortedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T, C> IntoIterator for &'a SortedSet<T, C> {
    type Item = &'a T;
    type IntoIter = IterInorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for SortedSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the set, yielding its values in ascending order
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    use super::SortedSet;

    /// Serialized as a sequence in ascending order
    impl<T: Serialize, C> Serialize for SortedSet<T, C> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    /// Any sequence is accepted. Duplicates collapse into one value.
    impl<'de, T: Deserialize<'de> + Ord> Deserialize<'de> for SortedSet<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let values = Vec::<T>::deserialize(deserializer)?;
            Ok(values.into_iter().collect())
        }
    }
}
