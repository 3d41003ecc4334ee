mod node;
mod inorder;

pub use node::*;
pub use inorder::*;

use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::{self, FromIterator};
use std::mem;
use std::vec;

use log::trace;

use crate::compare::{Compare, Natural};
use crate::slab::{Ptr, Slab};

#[derive(Debug, Clone, PartialEq, Eq)]
struct InnerNode<K, V> {
    key: K,
    value: V,
    left: Option<Ptr>,
    right: Option<Ptr>,
    /// Height of the subtree rooted at this node. A leaf has height 1.
    height: u8,
}

impl<K, V> InnerNode<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        }
    }
}

/// An ordered map backed by a self-balancing (AVL) binary search tree
///
/// BST properties: For each node with key `k`:
/// - The key of each node in the left subtree is less than `k`
/// - The key of each node in the right subtree is greater than `k`
///
/// The ordering is given by the comparator `C`, which is fixed when the map is created. Keys that
/// compare `Equal` are the same key. The heights of the two subtrees of any node differ by at most
/// one, so lookups, insertions and removals take `O(log n)` comparisons.
///
/// Nodes live in a slab and refer to each other by index, so the tree never needs `unsafe` code
/// and removing a node does not move any other node.
#[derive(Clone)]
pub struct TreeMap<K, V, C = Natural> {
    nodes: Slab<InnerNode<K, V>>,
    root: Option<Ptr>,
    cmp: C,
}

impl<K, V, C: Default> Default for TreeMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C> fmt::Debug for TreeMap<K, V, C>
    where K: fmt::Debug,
          V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for TreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees with the same entries may be shaped differently depending on the order of
        // insertion, so compare the in-order traversals instead of the structure.
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for TreeMap<K, V, C> {}

impl<K: Ord, V> TreeMap<K, V> {
    /// Creates an empty `TreeMap` ordered by the natural ordering of `K`
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::TreeMap;
    /// let mut map: TreeMap<&str, i32> = TreeMap::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates an empty map ordered by the natural ordering of `K` with the specified capacity.
    ///
    /// The map will be able to hold at least `capacity` entries without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
            cmp: Natural,
        }
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Creates an empty `TreeMap` whose keys are ordered by `cmp`
    ///
    /// The comparator cannot be replaced once the map has been created.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::TreeMap;
    ///
    /// let mut map = TreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2, 1]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: Slab::default(),
            root: None,
            cmp,
        }
    }

    /// Returns the number of entries in the map (i.e. the number of nodes in the tree)
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the map is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!((self.nodes.len() == 0) == self.root.is_none());
        self.root.is_none()
    }

    /// Returns the number of entries the map can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the comparator that orders the keys of this map
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Removes all entries. The comparator and the allocated capacity are kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Iterates over the entries of the map in ascending key order
    pub fn iter(&self) -> IterInorder<K, V> {
        IterInorder::new(&self.nodes, self.root)
    }

    /// Iterates over the keys of the map in ascending order
    pub fn keys(&self) -> impl Iterator<Item=&K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// Note that the root can be **any** node inserted into the tree. It changes as the tree
    /// rebalances itself. For a guaranteed ordering, use `iter`.
    ///
    /// This is a low-level API meant to be used for implementing traversals.
    pub fn root(&self) -> Option<Node<K, V>> {
        self.root.map(|ptr| Node::new(&self.nodes, ptr))
    }

    fn height(&self, node: Option<Ptr>) -> u8 {
        node.map_or(0, |ptr| self.nodes[ptr].height)
    }

    fn update_height(&mut self, ptr: Ptr) {
        let node = &self.nodes[ptr];
        let height = 1 + cmp::max(self.height(node.left), self.height(node.right));
        self.nodes[ptr].height = height;
    }

    /// Height of the left subtree minus the height of the right subtree
    fn balance_factor(&self, ptr: Ptr) -> i16 {
        let node = &self.nodes[ptr];
        self.height(node.left) as i16 - self.height(node.right) as i16
    }

    /// Rotates the subtree at `ptr` to the right and returns its new root
    fn rotate_right(&mut self, ptr: Ptr) -> Ptr {
        let pivot = match self.nodes[ptr].left {
            Some(pivot) => pivot,
            None => return ptr,
        };

        self.nodes[ptr].left = self.nodes[pivot].right;
        self.nodes[pivot].right = Some(ptr);
        self.update_height(ptr);
        self.update_height(pivot);

        pivot
    }

    /// Rotates the subtree at `ptr` to the left and returns its new root
    fn rotate_left(&mut self, ptr: Ptr) -> Ptr {
        let pivot = match self.nodes[ptr].right {
            Some(pivot) => pivot,
            None => return ptr,
        };

        self.nodes[ptr].right = self.nodes[pivot].left;
        self.nodes[pivot].left = Some(ptr);
        self.update_height(ptr);
        self.update_height(pivot);

        pivot
    }

    /// Restores the AVL property at `ptr`, assuming both subtrees already satisfy it, and returns
    /// the new root of the subtree
    fn rebalance(&mut self, ptr: Ptr) -> Ptr {
        self.update_height(ptr);

        match self.balance_factor(ptr) {
            // Left heavy
            factor if factor > 1 => {
                if let Some(left) = self.nodes[ptr].left {
                    if self.balance_factor(left) < 0 {
                        let left = self.rotate_left(left);
                        self.nodes[ptr].left = Some(left);
                    }
                }
                self.rotate_right(ptr)
            },

            // Right heavy
            factor if factor < -1 => {
                if let Some(right) = self.nodes[ptr].right {
                    if self.balance_factor(right) > 0 {
                        let right = self.rotate_right(right);
                        self.nodes[ptr].right = Some(right);
                    }
                }
                self.rotate_left(ptr)
            },

            _ => ptr,
        }
    }

    /// Unlinks the minimum node of the subtree at `ptr`
    ///
    /// Returns the new root of the subtree and the detached node
    fn detach_min(&mut self, ptr: Ptr) -> (Option<Ptr>, Ptr) {
        match self.nodes[ptr].left {
            None => (self.nodes[ptr].right, ptr),
            Some(left) => {
                let (rest, min) = self.detach_min(left);
                self.nodes[ptr].left = rest;
                (Some(self.rebalance(ptr)), min)
            },
        }
    }

    /// Builds a perfectly balanced tree from the next `len` entries of `entries`, which must be in
    /// ascending order
    fn build_balanced<I>(&mut self, entries: &mut I, len: usize) -> Option<Ptr>
        where I: Iterator<Item=(K, V)>,
    {
        if len == 0 {
            return None;
        }

        let left_len = len / 2;
        let left = self.build_balanced(entries, left_len);
        let (key, value) = entries.next()?;
        let right = self.build_balanced(entries, len - left_len - 1);

        let ptr = self.nodes.push(InnerNode {left, right, ..InnerNode::new(key, value)});
        self.update_height(ptr);

        Some(ptr)
    }

    /// Moves every entry out of the tree in ascending key order, leaving the map empty
    fn drain_sorted(&mut self) -> Vec<(K, V)> {
        let ptrs: Vec<_> = {
            let mut order = self.iter();
            iter::from_fn(|| order.next_ptr()).collect()
        };

        self.root = None;
        let entries = ptrs.into_iter().map(|ptr| {
            let node = self.nodes.remove(ptr);
            (node.key, node.value)
        }).collect();
        self.nodes.clear();

        entries
    }

    /// Retains only the entries for which `keep` returns `true`, visiting every entry once in
    /// ascending key order. Returns the number of entries removed.
    ///
    /// The surviving entries are rebuilt into a balanced tree in `O(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::TreeMap;
    ///
    /// let mut map: TreeMap<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// assert_eq!(map.retain(|&key, _| key % 2 == 0), 4);
    /// assert!(map.keys().eq([0, 2, 4, 6].iter()));
    /// ```
    pub fn retain<F>(&mut self, mut keep: F) -> usize
        where F: FnMut(&K, &mut V) -> bool,
    {
        let ptrs: Vec<_> = {
            let mut order = self.iter();
            iter::from_fn(|| order.next_ptr()).collect()
        };

        // The tree is left untouched until every entry has been visited, so a panic in `keep`
        // does not lose any entries
        let mut decisions = Vec::with_capacity(ptrs.len());
        for &ptr in &ptrs {
            let node = &mut self.nodes[ptr];
            decisions.push(keep(&node.key, &mut node.value));
        }

        let before = ptrs.len();
        let len = decisions.iter().filter(|&&kept| kept).count();
        if len == before {
            return 0;
        }

        self.root = None;
        let kept: Vec<_> = ptrs.into_iter().zip(decisions).filter_map(|(ptr, kept)| {
            let node = self.nodes.remove(ptr);
            if kept {
                Some((node.key, node.value))
            } else {
                None
            }
        }).collect();
        self.nodes.clear();

        self.root = self.build_balanced(&mut kept.into_iter(), len);

        let removed = before - len;
        trace!("retain removed {} of {} entries, rebuilt tree of height {}",
            removed, before, self.height(self.root));
        removed
    }
}

impl<K, V, C: Compare<K>> TreeMap<K, V, C> {
    fn find(&self, key: &K) -> Option<Ptr> {
        let mut current = self.root;
        while let Some(ptr) = current {
            let node = &self.nodes[ptr];
            match self.cmp.compare(key, &node.key) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Some(ptr),
            }
        }

        None
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// Time complexity: `O(log n)`
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns a reference to the value corresponding to the given key, or `None` if no such key
    /// exists in the map
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|ptr| &self.nodes[ptr].value)
    }

    /// Returns a mutable reference to the value corresponding to the given key, or `None` if no
    /// such key exists in the map
    ///
    /// Time complexity: `O(log n)`
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let ptr = self.find(key)?;
        Some(&mut self.nodes[ptr].value)
    }

    /// Returns the stored key-value pair that compares equal to `key`
    ///
    /// With a custom comparator the stored key may differ from `key`.
    pub fn get_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.find(key).map(|ptr| {
            let node = &self.nodes[ptr];
            (&node.key, &node.value)
        })
    }

    /// Inserts a key-value pair into the map
    ///
    /// If the map did not have this key present, `None` is returned.
    ///
    /// If the map did have this key present, the value is updated, and the old value is returned.
    /// The key is not updated.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert!(!map.is_empty());
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map.get(&37), Some(&"c"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, prev_value) = self.insert_at(self.root, key, value);
        self.root = Some(root);
        prev_value
    }

    fn insert_at(&mut self, node: Option<Ptr>, key: K, value: V) -> (Ptr, Option<V>) {
        let ptr = match node {
            Some(ptr) => ptr,
            None => return (self.nodes.push(InnerNode::new(key, value)), None),
        };

        match self.cmp.compare(&key, &self.nodes[ptr].key) {
            Ordering::Less => {
                let (left, prev_value) = self.insert_at(self.nodes[ptr].left, key, value);
                self.nodes[ptr].left = Some(left);
                match prev_value {
                    // Replacing, so the shape of the tree did not change
                    Some(_) => (ptr, prev_value),
                    None => (self.rebalance(ptr), None),
                }
            },

            Ordering::Greater => {
                let (right, prev_value) = self.insert_at(self.nodes[ptr].right, key, value);
                self.nodes[ptr].right = Some(right);
                match prev_value {
                    Some(_) => (ptr, prev_value),
                    None => (self.rebalance(ptr), None),
                }
            },

            Ordering::Equal => {
                let prev_value = mem::replace(&mut self.nodes[ptr].value, value);
                (ptr, Some(prev_value))
            },
        }
    }

    /// Removes a key from the map, returning the value at the key if the key was previously in the
    /// map.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_collections::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if the key was previously in
    /// the map.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let (root, removed) = self.remove_at(self.root, key);
        self.root = root;
        removed
    }

    fn remove_at(&mut self, node: Option<Ptr>, key: &K) -> (Option<Ptr>, Option<(K, V)>) {
        let ptr = match node {
            Some(ptr) => ptr,
            None => return (None, None),
        };

        match self.cmp.compare(key, &self.nodes[ptr].key) {
            Ordering::Less => {
                let (left, removed) = self.remove_at(self.nodes[ptr].left, key);
                self.nodes[ptr].left = left;
                match removed {
                    Some(_) => (Some(self.rebalance(ptr)), removed),
                    None => (Some(ptr), None),
                }
            },

            Ordering::Greater => {
                let (right, removed) = self.remove_at(self.nodes[ptr].right, key);
                self.nodes[ptr].right = right;
                match removed {
                    Some(_) => (Some(self.rebalance(ptr)), removed),
                    None => (Some(ptr), None),
                }
            },

            Ordering::Equal => {
                let InnerNode {left, right, ..} = self.nodes[ptr];
                let replacement = match (left, right) {
                    (None, None) => None,
                    (Some(child), None) | (None, Some(child)) => Some(child),
                    // Replace the node with its in-order successor
                    (Some(_), Some(right)) => {
                        let (rest, successor) = self.detach_min(right);
                        self.nodes[successor].left = left;
                        self.nodes[successor].right = rest;
                        Some(self.rebalance(successor))
                    },
                };

                let node = self.nodes.remove(ptr);
                (replacement, Some((node.key, node.value)))
            },
        }
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = IterInorder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for TreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = vec::IntoIter<(K, V)>;

    /// Consumes the map, yielding its entries in ascending key order
    fn into_iter(mut self) -> Self::IntoIter {
        self.drain_sorted().into_iter()
    }
}
