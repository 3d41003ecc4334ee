use std::iter::FusedIterator;

use crate::slab::{Ptr, Slab};

use super::InnerNode;

/// Iterates over the entries of a `TreeMap` in ascending key order
///
/// The iterator borrows the map, so the map cannot be modified while it is being traversed.
pub struct IterInorder<'a, K, V> {
    nodes: &'a Slab<InnerNode<K, V>>,
    stack: Vec<Ptr>,
    /// The number of entries not yet yielded
    remaining: usize,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, K, V> IterInorder<'a, K, V> {
    pub(super) fn new(nodes: &'a Slab<InnerNode<K, V>>, root: Option<Ptr>) -> Self {
        let mut iter = Self {
            nodes,
            stack: Vec::new(),
            remaining: nodes.len(),
        };
        iter.push_left_spine(root);

        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Ptr>) {
        while let Some(ptr) = current {
            self.stack.push(ptr);
            current = self.nodes[ptr].left;
        }
    }

    /// Advances the traversal, returning the node it visited
    pub(super) fn next_ptr(&mut self) -> Option<Ptr> {
        let top_ptr = self.stack.pop()?;
        self.push_left_spine(self.nodes[top_ptr].right);
        self.remaining -= 1;

        Some(top_ptr)
    }
}

impl<'a, K, V> Clone for IterInorder<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for IterInorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.next_ptr()?;
        let nodes = self.nodes;
        let node = &nodes[ptr];
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for IterInorder<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterInorder<'a, K, V> {}
