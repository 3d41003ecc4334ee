use std::mem;
use std::num::NonZeroUsize;
use std::ops::{Index, IndexMut};

#[cfg(test)]
use static_assertions::const_assert_eq;

/// A handle to an occupied entry of a `Slab`
///
/// Stored as `index + 1` so that `Option<Ptr>` has the same size as a `usize`. Nodes store a lot
/// of these, so keeping them small helps with cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Ptr(NonZeroUsize);

#[cfg(test)]
const_assert_eq!(mem::size_of::<Option<Ptr>>(), mem::size_of::<usize>());
// Using `Option<usize>` directly would use more space.
#[cfg(test)]
const_assert_eq!(mem::size_of::<Option<usize>>(), 2 * mem::size_of::<usize>());

impl Ptr {
    #[inline(always)]
    fn from_index(index: usize) -> Self {
        // `Vec` never holds more than `isize::MAX` entries, so this cannot wrap around to zero
        match NonZeroUsize::new(index.wrapping_add(1)) {
            Some(value) => Ptr(value),
            None => panic!("bug: slab index overflowed"),
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied(T),
    /// An entry on the free list, linking to the next free entry
    Vacant {
        next: Option<Ptr>,
    },
}

/// An allocation primitive similar to `Vec`, but implemented to reuse space from removed entries.
///
/// Indexes are not shifted when an individual item is removed. Instead of always pushing items
/// after the previously pushed item, the slab will reuse space from previously removed entries when
/// possible. This makes removal cheaper than a standard `Vec<T>` and keeps every other `Ptr` valid.
#[derive(Debug, Clone)]
pub struct Slab<T> {
    entries: Vec<Entry<T>>,
    /// The first entry of the free list, used as a stack of reusable entries
    free_list_head: Option<Ptr>,
    /// The length of the free list
    free_len: usize,
}

impl<T> Default for Slab<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            free_list_head: None,
            free_len: 0,
        }
    }
}

impl<T> Slab<T> {
    /// Creates an empty slab with the specified capacity.
    ///
    /// The slab will be able to hold at least `capacity` elements without reallocating. If
    /// `capacity` is 0, the slab will not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Returns the number of occupied entries
    ///
    /// This is the number of items pushed minus the number of items removed
    pub fn len(&self) -> usize {
        self.entries.len() - self.free_len
    }

    /// Returns the number of elements the slab can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Stores `value`, reusing a vacant entry if there is one
    pub fn push(&mut self, value: T) -> Ptr {
        match self.free_list_head {
            Some(ptr) => {
                let entry = &mut self.entries[ptr.index()];
                match mem::replace(entry, Entry::Occupied(value)) {
                    Entry::Vacant {next} => self.free_list_head = next,
                    Entry::Occupied(_) => unreachable!("bug: free list contained an occupied entry"),
                }
                self.free_len -= 1;

                ptr
            },

            None => {
                let ptr = Ptr::from_index(self.entries.len());
                self.entries.push(Entry::Occupied(value));

                ptr
            },
        }
    }

    /// Removes the value at `ptr` and returns it, adding its entry to the free list
    ///
    /// # Panics
    ///
    /// Panics if `ptr` does not refer to an occupied entry.
    pub fn remove(&mut self, ptr: Ptr) -> T {
        let vacant = Entry::Vacant {next: self.free_list_head};
        match mem::replace(&mut self.entries[ptr.index()], vacant) {
            Entry::Occupied(value) => {
                self.free_list_head = Some(ptr);
                self.free_len += 1;

                value
            },

            prev @ Entry::Vacant {..} => {
                // Put the free list back the way it was before reporting the error
                self.entries[ptr.index()] = prev;
                panic!("bug: attempt to remove a vacant slab entry")
            },
        }
    }

    /// Removes every value, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.entries.clear();
        self.free_list_head = None;
        self.free_len = 0;
    }
}

impl<T> Index<Ptr> for Slab<T> {
    type Output = T;

    fn index(&self, ptr: Ptr) -> &T {
        match &self.entries[ptr.index()] {
            Entry::Occupied(value) => value,
            Entry::Vacant {..} => panic!("bug: slab pointer refers to a vacant entry"),
        }
    }
}

impl<T> IndexMut<Ptr> for Slab<T> {
    fn index_mut(&mut self, ptr: Ptr) -> &mut T {
        match &mut self.entries[ptr.index()] {
            Entry::Occupied(value) => value,
            Entry::Vacant {..} => panic!("bug: slab pointer refers to a vacant entry"),
        }
    }
}
