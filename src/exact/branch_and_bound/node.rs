use std::cmp::Ordering;

use fixedbitset::FixedBitSet;

use crate::matrix::*;

pub(super) type Slot = usize;

/// Stores the paths of all search nodes as a forest of parent pointers. A node only
/// owns the slot of its last city; siblings share the slots of their common prefix, so
/// extending a path never copies or modifies the parent's path.
///
/// Slots are append-only: entries of pruned nodes stay allocated until the whole arena
/// is cleared, which the search does once its frontier runs empty. Memory therefore
/// grows linearly in the number of enqueued nodes.
#[derive(Debug, Default)]
pub(super) struct PathArena {
    segments: Vec<(Node, Option<Slot>)>,
}

impl PathArena {
    pub(super) fn root(&mut self, city: Node) -> Slot {
        self.segments.push((city, None));
        self.segments.len() - 1
    }

    pub(super) fn extend(&mut self, parent: Slot, city: Node) -> Slot {
        debug_assert!(parent < self.segments.len());
        self.segments.push((city, Some(parent)));
        self.segments.len() - 1
    }

    /// Overwrites `buffer` with the path ending in `slot`, ordered from the root
    pub(super) fn collect_path(&self, slot: Slot, buffer: &mut Vec<Node>) {
        buffer.clear();

        let mut current = Some(slot);
        while let Some(slot) = current {
            let (city, parent) = self.segments[slot];
            buffer.push(city);
            current = parent;
        }

        buffer.reverse();
    }

    pub(super) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Invalidates all slots
    pub(super) fn clear(&mut self) {
        self.segments.clear();
        self.segments.shrink_to_fit();
    }
}

/// A partial tour awaiting expansion. The bound is computed once when the node is created.
#[derive(Debug, Clone)]
pub(super) struct SearchNode {
    pub(super) level: NumNodes,
    pub(super) tail: Slot,
    pub(super) visited: FixedBitSet,
    pub(super) bound: Cost,
    pub(super) sequence: u64,
}

impl SearchNode {
    pub(super) fn new(level: NumNodes, tail: Slot, visited: FixedBitSet, bound: Cost) -> Self {
        debug_assert_eq!(visited.count_ones(..), level as usize + 1);
        Self {
            level,
            tail,
            visited,
            bound,
            sequence: 0,
        }
    }
}

// `BinaryHeap` is a max-heap; hence the greatest node is the one to expand next, i.e. the
// one with smallest bound. Ties prefer deeper nodes and then older ones.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .bound
            .cmp(&self.bound)
            .then_with(|| self.level.cmp(&other.level))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shared_prefixes() {
        let mut arena = PathArena::default();
        let root = arena.root(0);
        let a = arena.extend(root, 3);
        let b = arena.extend(root, 1);
        let c = arena.extend(a, 2);

        let mut buffer = vec![42];
        arena.collect_path(c, &mut buffer);
        assert_eq!(buffer, vec![0, 3, 2]);

        arena.collect_path(b, &mut buffer);
        assert_eq!(buffer, vec![0, 1]);

        arena.collect_path(a, &mut buffer);
        assert_eq!(buffer, vec![0, 3]);

        arena.collect_path(root, &mut buffer);
        assert_eq!(buffer, vec![0]);
        assert_eq!(arena.len(), 4);

        arena.clear();
        assert_eq!(arena.len(), 0);
        let root = arena.root(5);
        arena.collect_path(root, &mut buffer);
        assert_eq!(buffer, vec![5]);
    }

    #[test]
    fn ordering() {
        let visited = |k: usize| {
            let mut set = FixedBitSet::with_capacity(4);
            set.insert_range(..k);
            set
        };

        let cheap = SearchNode::new(0, 0, visited(1), 5);
        let expensive = SearchNode::new(2, 0, visited(3), 9);
        let deep = SearchNode::new(2, 0, visited(3), 5);

        assert!(cheap > expensive);
        assert!(deep > cheap);

        let mut older = deep.clone();
        let mut younger = deep.clone();
        older.sequence = 1;
        younger.sequence = 2;
        assert!(older > younger);
    }
}
