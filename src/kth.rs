use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use crate::error::Error;

/// Tracks the k-th largest value of a growing stream of integers
///
/// The rank `k` is 1-based and fixed at construction. Duplicate values occupy separate ranks, so
/// the k-th largest of `[8, 5, 5, 4]` with `k = 3` is `5`.
///
/// Only the `k` largest values seen so far are kept, in a min-heap, so `add` takes `O(log k)`.
/// The result of every `add` is the same as appending the value to the full history, sorting it in
/// descending order and taking the element at index `k - 1`.
///
/// # Examples
///
/// ```
/// use sorted_collections::KthLargest;
///
/// let mut stream = KthLargest::new(2, vec![4, 5, 8, 2]);
/// assert_eq!(stream.add(3), 5);
/// assert_eq!(stream.add(5), 5);
/// assert_eq!(stream.add(10), 8);
/// ```
#[derive(Debug, Clone)]
pub struct KthLargest {
    k: usize,
    /// The `k` largest values seen so far (fewer while the stream is shorter than `k`)
    top: BinaryHeap<Reverse<i32>>,
    /// The number of values seen so far
    seen: usize,
}

impl KthLargest {
    /// Creates a tracker for the `k`-th largest value, seeded with `values`
    ///
    /// `values` should contain at least `k` elements. This is not checked: with fewer, `add`
    /// panics until enough values have been seen. Use `try_new` to reject that case up front.
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0.
    pub fn new<I>(k: usize, values: I) -> Self
        where I: IntoIterator<Item = i32>,
    {
        assert!(k >= 1, "rank must be at least 1");

        let mut tracker = Self {
            k,
            top: BinaryHeap::new(),
            seen: 0,
        };
        for value in values {
            tracker.push(value);
        }

        debug!("tracking rank {} over {} initial values", k, tracker.seen);
        tracker
    }

    /// Creates a tracker for the `k`-th largest value, checking that `k` is at least 1 and that
    /// `values` has at least `k` elements
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::{Error, KthLargest};
    ///
    /// assert!(KthLargest::try_new(2, vec![1, 2]).is_ok());
    /// assert_eq!(KthLargest::try_new(0, vec![1]).unwrap_err(), Error::ZeroRank);
    /// assert_eq!(
    ///     KthLargest::try_new(3, vec![1, 2]).unwrap_err(),
    ///     Error::RankOutOfRange {rank: 3, len: 2},
    /// );
    /// ```
    pub fn try_new<I>(k: usize, values: I) -> Result<Self, Error>
        where I: IntoIterator<Item = i32>,
    {
        if k == 0 {
            return Err(Error::ZeroRank);
        }

        let tracker = Self::new(k, values);
        if tracker.seen < k {
            return Err(Error::RankOutOfRange {rank: k, len: tracker.seen});
        }

        Ok(tracker)
    }

    /// Returns the rank being tracked (1-based)
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the number of values seen so far, including the initial values
    pub fn len(&self) -> usize {
        self.seen
    }

    /// Returns true if no values have been seen
    pub fn is_empty(&self) -> bool {
        self.seen == 0
    }

    /// Returns the current k-th largest value, or `None` if fewer than `k` values have been seen
    pub fn kth(&self) -> Option<i32> {
        if self.top.len() < self.k {
            return None;
        }

        self.top.peek().map(|&Reverse(value)| value)
    }

    fn push(&mut self, value: i32) {
        self.seen += 1;

        if self.top.len() < self.k {
            self.top.push(Reverse(value));
        } else if let Some(&Reverse(min)) = self.top.peek() {
            // A value equal to the current k-th largest would only take its place
            if value > min {
                self.top.pop();
                self.top.push(Reverse(value));
            }
        }
    }

    /// Adds `value` to the stream and returns the k-th largest value seen so far
    ///
    /// # Panics
    ///
    /// Panics if fewer than `k` values have been seen, including `value`.
    pub fn add(&mut self, value: i32) -> i32 {
        self.push(value);

        match self.kth() {
            Some(kth) => kth,
            None => panic!("rank {} is out of range for {} values", self.k, self.seen),
        }
    }
}

impl Extend<i32> for KthLargest {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;
    use simple_kth::SimpleKthLargest;

    #[test]
    fn duplicates_take_separate_ranks() {
        let mut stream = KthLargest::new(2, vec![4, 5, 8, 2]);
        // [8, 5, 4, 3, 2]
        assert_eq!(stream.add(3), 5);
        // [8, 5, 5, 4, 3, 2]
        assert_eq!(stream.add(5), 5);
        assert_eq!(stream.len(), 6);
        assert_eq!(stream.k(), 2);
    }

    #[test]
    fn third_largest() {
        let mut stream = KthLargest::new(3, vec![4, 5, 8, 2]);
        assert_eq!(stream.add(3), 4);
        assert_eq!(stream.add(5), 5);
        assert_eq!(stream.add(10), 5);
        assert_eq!(stream.add(9), 8);
        assert_eq!(stream.add(4), 8);
    }

    #[test]
    fn equal_values_fill_every_rank() {
        let mut stream = KthLargest::new(3, vec![7, 7, 7]);
        assert_eq!(stream.kth(), Some(7));
        assert_eq!(stream.add(7), 7);
        assert_eq!(stream.add(1), 7);
        assert_eq!(stream.add(8), 7);
        assert_eq!(stream.add(9), 7);
        assert_eq!(stream.add(10), 8);
    }

    #[test]
    fn reaches_rank_through_adds() {
        let mut stream = KthLargest::new(2, Vec::new());
        assert!(stream.is_empty());
        assert_eq!(stream.kth(), None);

        stream.extend(vec![1]);
        assert_eq!(stream.kth(), None);
        assert_eq!(stream.add(-1), -1);
        assert_eq!(stream.add(0), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn add_with_too_few_values() {
        let mut stream = KthLargest::new(3, vec![1]);
        stream.add(2);
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn zero_rank() {
        KthLargest::new(0, vec![1, 2, 3]);
    }

    #[test]
    fn try_new_checks_rank() {
        let _ = env_logger::builder().is_test(true).try_init();

        assert_eq!(KthLargest::try_new(0, vec![]).unwrap_err(), Error::ZeroRank);
        assert_eq!(
            KthLargest::try_new(4, vec![1, 2, 3]).unwrap_err(),
            Error::RankOutOfRange {rank: 4, len: 3},
        );
        assert_eq!(
            Error::RankOutOfRange {rank: 4, len: 3}.to_string(),
            "rank 4 is larger than the number of initial values (3)",
        );

        let mut stream = KthLargest::try_new(3, vec![1, 2, 3]).unwrap();
        assert_eq!(stream.kth(), Some(1));
        assert_eq!(stream.add(4), 2);
    }

    #[test]
    fn extreme_values() {
        let mut stream = KthLargest::new(2, vec![i32::MIN, i32::MAX]);
        assert_eq!(stream.add(i32::MIN), i32::MIN);
        assert_eq!(stream.add(i32::MAX), i32::MAX);
        assert_eq!(stream.add(0), i32::MAX);
    }

    #[test]
    fn test_random_streams() {
        cfg_if::cfg_if! {
            if #[cfg(miri)] {
                const TEST_CASES: usize = 16;
                const OPERATIONS: usize = 24;

                (0..TEST_CASES).into_iter().for_each(|_| test_case());

            } else {
                use rayon::prelude::*;

                const TEST_CASES: usize = 1024;
                const OPERATIONS: usize = 128;

                (0..TEST_CASES).into_par_iter().for_each(|_| test_case());
            }
        }

        fn test_case() {
            let mut rng = rand::thread_rng();

            let k = rng.gen_range(1..=16);
            // Small range so that there are plenty of duplicates
            let initial: Vec<i32> = (0..rng.gen_range(k..=2*k)).map(|_| rng.gen_range(-20..=20)).collect();

            let mut stream = KthLargest::new(k, initial.clone());
            // Compare against re-sorting the whole history every time
            let mut expected = SimpleKthLargest::new(k, initial.clone());
            let mut history = initial;

            for _ in 0..rng.gen_range(OPERATIONS..=OPERATIONS*2) {
                let value = rng.gen_range(-20..=20);
                history.push(value);

                let kth = stream.add(value);
                assert_eq!(kth, expected.add(value));

                history.sort_unstable_by(|a, b| b.cmp(a));
                assert_eq!(kth, history[k - 1]);
                assert_eq!(stream.kth(), Some(kth));
                assert_eq!(stream.len(), history.len());
            }
        }
    }
}
