// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first topological ordering with cycle breaking.
//!
//! Nodes are visited in index order. Before a node is emitted, all of its
//! predecessors are emitted first, each visited in the order they were recorded.
//! An edge that leads back to a node still on the traversal stack closes a
//! cycle and is ignored, so whatever was placed first stays put.

use alloc::vec;
use alloc::vec::Vec;

/// Predecessor lists keyed by node index.
#[derive(Clone, Debug)]
pub(crate) struct Edges {
    preds: Vec<Vec<usize>>,
}

impl Edges {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            preds: vec![Vec::new(); len],
        }
    }

    /// Record that `first` must be emitted before `then`.
    pub(crate) fn require(&mut self, first: usize, then: usize) {
        self.preds[then].push(first);
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.preds.iter().all(Vec::is_empty)
    }
}

/// Return node indices `0..len` in an order honoring `edges` as far as cycles allow.
///
/// Nodes with no edges keep their relative order.
pub(crate) fn topological_order(edges: &Edges) -> Vec<usize> {
    let len = edges.preds.len();
    let mut order = Vec::with_capacity(len);
    let mut marked = vec![false; len];
    // (node, next predecessor to look at)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..len {
        if marked[root] {
            continue;
        }
        marked[root] = true;
        stack.push((root, 0));
        while let Some(top) = stack.last_mut() {
            let (node, next) = *top;
            let Some(&pred) = edges.preds[node].get(next) else {
                order.push(node);
                stack.pop();
                continue;
            };
            top.1 += 1;
            if !marked[pred] {
                marked[pred] = true;
                stack.push((pred, 0));
                continue;
            }
            #[cfg(feature = "tracing")]
            if stack.iter().any(|&(n, _)| n == pred) {
                tracing::trace!(node, pred, "ignoring placement that would close a cycle");
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(len: usize, pairs: &[(usize, usize)]) -> Vec<usize> {
        let mut e = Edges::new(len);
        for &(first, then) in pairs {
            e.require(first, then);
        }
        topological_order(&e)
    }

    #[test]
    fn no_edges_is_identity() {
        assert!(Edges::new(4).is_empty());
        assert_eq!(order(4, &[]), vec![0, 1, 2, 3]);
        assert_eq!(order(0, &[]), Vec::<usize>::new());
    }

    #[test]
    fn predecessor_is_pulled_in_front() {
        // 2 must come before 0.
        assert_eq!(order(3, &[(2, 0)]), vec![2, 0, 1]);
    }

    #[test]
    fn predecessors_follow_recording_order() {
        assert_eq!(order(3, &[(2, 0), (1, 0)]), vec![2, 1, 0]);
        assert_eq!(order(3, &[(1, 0), (2, 0)]), vec![1, 2, 0]);
    }

    #[test]
    fn two_cycle_keeps_first_visit() {
        // 1 before 0 and 0 before 1: visiting 0 first places 1 in front of it.
        assert_eq!(order(2, &[(1, 0), (0, 1)]), vec![1, 0]);
    }

    #[test]
    fn three_cycle_is_broken_once() {
        assert_eq!(order(3, &[(2, 0), (0, 1), (1, 2)]), vec![1, 2, 0]);
    }

    #[test]
    fn self_edge_is_ignored() {
        assert_eq!(order(2, &[(1, 1)]), vec![0, 1]);
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let n = 10_000;
        let pairs: Vec<(usize, usize)> = (0..n - 1).map(|i| (i + 1, i)).collect();
        let out = order(n, &pairs);
        let expected: Vec<usize> = (0..n).rev().collect();
        assert_eq!(out, expected);
    }
}
