use std::collections::BinaryHeap;

use super::node::SearchNode;
use crate::matrix::Cost;

/// Best-first worklist of search nodes: [`Frontier::pop`] always returns a node with
/// smallest bound.
#[derive(Debug, Default)]
pub(super) struct Frontier {
    heap: BinaryHeap<SearchNode>,
    next_sequence: u64,
    peak_len: usize,
}

impl Frontier {
    pub(super) fn push(&mut self, mut node: SearchNode) {
        node.sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(node);
        self.peak_len = self.peak_len.max(self.heap.len());
    }

    pub(super) fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop()
    }

    pub(super) fn peek_bound(&self) -> Option<Cost> {
        self.heap.peek().map(|node| node.bound)
    }

    pub(super) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of nodes simultaneously stored so far
    pub(super) fn peak_len(&self) -> usize {
        self.peak_len
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use fixedbitset::FixedBitSet;

    fn node(level: u32, bound: Cost) -> SearchNode {
        let mut visited = FixedBitSet::with_capacity(8);
        visited.insert_range(..(level as usize + 1));
        SearchNode::new(level, level as usize, visited, bound)
    }

    #[test]
    fn best_first() {
        let mut frontier = Frontier::default();
        for (level, bound) in [(1, 30), (1, 10), (2, 20), (2, 10), (3, 40)] {
            frontier.push(node(level, bound));
        }

        assert_eq!(frontier.len(), 5);
        assert_eq!(frontier.peek_bound(), Some(10));

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop())
            .map(|n| (n.level, n.bound))
            .collect();

        assert_eq!(order, vec![(2, 10), (1, 10), (2, 20), (1, 30), (3, 40)]);
        assert!(frontier.is_empty());
        assert_eq!(frontier.peek_bound(), None);
        assert_eq!(frontier.peak_len(), 5);
    }

    #[test]
    fn ties_in_insertion_order() {
        let mut frontier = Frontier::default();
        for tail in 0..5 {
            let mut n = node(1, 7);
            n.tail = tail;
            frontier.push(n);
        }

        let tails: Vec<_> = std::iter::from_fn(|| frontier.pop())
            .map(|n| n.tail)
            .collect();
        assert_eq!(tails, vec![0, 1, 2, 3, 4]);
    }
}
