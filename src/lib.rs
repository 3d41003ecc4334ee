//! Two small ordered data structures:
//!
//! - [`KthLargest`] tracks the k-th largest value of a growing stream of integers
//! - [`SortedSet`] is a set of unique values in sorted order, stored in a [`TreeMap`] and ordered
//!   either naturally or by a comparator chosen at construction
//!
//! ```
//! use sorted_collections::{KthLargest, Set, SortedSet};
//!
//! let mut stream = KthLargest::new(3, vec![4, 5, 8, 2]);
//! assert_eq!(stream.add(3), 4);
//!
//! let mut set = SortedSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! set.add_all(vec![3, 1, 2]);
//! assert_eq!(set.to_sorted_vec(), vec![3, 2, 1]);
//! ```

mod slab;

pub mod collection;
pub mod compare;
pub mod error;
pub mod kth;
pub mod map;
pub mod set;

pub use collection::Set;
pub use compare::{Compare, Natural};
pub use error::Error;
pub use kth::KthLargest;
pub use map::TreeMap;
pub use set::SortedSet;

#[macro_export(local_inner_macros)]
macro_rules! treemap {
    // trailing comma case
    ($($key:expr => $value:expr,)+) => (treemap!($($key => $value),+));

    ( $($key:expr => $value:expr),* ) => {
        {
            let mut _map = $crate::TreeMap::new();
            $(
                let _ = _map.insert($key, $value);
            )*
            _map
        }
    };
}

#[macro_export(local_inner_macros)]
macro_rules! sortedset {
    (@single $($x:tt)*) => (());
    (@count $($rest:expr),*) => (<[()]>::len(&[$(sortedset!(@single $rest)),*]));

    ($($value:expr,)+) => { sortedset!($($value),+) };
    ($($value:expr),*) => {
        {
            let _cap = sortedset!(@count $($value),*);
            let mut _set = $crate::SortedSet::with_capacity(_cap);
            $(
                let _ = _set.add($value);
            )*
            _set
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn treemap_macro() {
        let map = treemap! {
            1 => 2,
            3 => 4,
            2 => 3, // trailing comma
        };

        let pairs: Vec<(_, _)> = map.iter()
            .map(|(&key, &value)| (key, value))
            .collect();
        assert_eq!(&pairs, &[(1, 2), (2, 3), (3, 4)]);

        // No trailing comma
        let map = treemap![3 => 4];

        let pairs: Vec<(_, _)> = map.iter()
            .map(|(&key, &value)| (key, value))
            .collect();
        assert_eq!(&pairs, &[(3, 4)]);

        // Zero items
        let map = treemap!();

        let pairs: Vec<(i32, i32)> = map.iter()
            .map(|(&key, &value)| (key, value))
            .collect();
        assert!(pairs.is_empty());
    }

    #[test]
    fn sortedset_macro() {
        let set = sortedset! {
            1,
            3,
            2,
            3, // duplicate and trailing comma
        };

        assert_eq!(set.to_sorted_vec(), vec![1, 2, 3]);
        assert!(set.capacity() >= 3);

        // No trailing comma
        let set = sortedset![99];

        assert_eq!(set.to_sorted_vec(), vec![99]);

        // Zero items
        let set = sortedset!();

        let values: Vec<i32> = set.iter().copied().collect();
        assert!(values.is_empty());
    }
}
