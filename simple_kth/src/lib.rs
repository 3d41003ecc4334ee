/// A "simple" k-th largest tracker that keeps the entire stream and re-sorts it on every `add`
///
/// Used to test the `sorted_collections` crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleKthLargest {
    /// The 0-based offset of the tracked rank in the descending order
    offset: usize,
    values: Vec<i32>,
}

impl SimpleKthLargest {
    /// Creates a tracker for the `k`-th largest value (1-based), seeded with `values`
    ///
    /// Nothing is sorted until the first call to `add`.
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_kth::SimpleKthLargest;
    ///
    /// let mut stream = SimpleKthLargest::new(3, vec![4, 5, 8, 2]);
    /// assert_eq!(stream.add(3), 4);
    /// ```
    pub fn new(k: usize, values: Vec<i32>) -> Self {
        assert!(k >= 1, "rank must be at least 1");
        Self {
            offset: k - 1,
            values,
        }
    }

    /// Returns the number of values seen so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values have been seen
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends `value` to the stream and returns the k-th largest value seen so far
    ///
    /// # Panics
    ///
    /// Panics if fewer than `k` values have been seen, including `value`.
    pub fn add(&mut self, value: i32) -> i32 {
        self.values.push(value);
        self.values.sort_unstable_by(|a, b| b.cmp(a));
        self.values[self.offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;

    #[test]
    fn duplicates_take_separate_ranks() {
        let mut stream = SimpleKthLargest::new(2, vec![4, 5, 8, 2]);
        assert_eq!(stream.add(3), 5);
        assert_eq!(stream.add(5), 5);
        assert_eq!(stream.add(10), 8);
        assert_eq!(stream.add(9), 9);
        assert_eq!(stream.add(4), 9);
        assert_eq!(stream.len(), 9);
    }

    #[test]
    fn rank_one_tracks_maximum() {
        let mut rng = rand::thread_rng();
        let mut stream = SimpleKthLargest::new(1, Vec::new());
        let mut max = i32::MIN;
        for _ in 0..256 {
            let value = rng.gen_range(-1000..=1000);
            max = max.max(value);
            assert_eq!(stream.add(value), max);
        }
    }

    #[test]
    #[should_panic]
    fn too_few_values() {
        let mut stream = SimpleKthLargest::new(3, vec![1]);
        stream.add(2);
    }
}
