//! Best-first branch and bound over partial tours starting at city 0.
//!
//! Each search node describes a path `0 = p_0, p_1, ..., p_k` together with the set of
//! visited cities and a lower bound on the cost of any closed tour extending the path.
//! Nodes are kept in a [`Frontier`] ordered by their bound. A node is discarded when it is
//! generated with `bound >= best_cost` and, since `best_cost` may have improved in the
//! meantime, again when it is dequeued with `bound >= best_cost`. Nodes covering all
//! cities are closed into a tour whose exact cost may become the new incumbent.

use fixedbitset::FixedBitSet;
use log::{debug, info, trace};

use crate::{algorithm::*, errors::InvariantCheck, matrix::*, utils::*};

use super::bound::{ExitCostBound, LowerBound};

mod frontier;
mod node;
mod stats;

use frontier::Frontier;
use node::{PathArena, SearchNode};
pub use stats::SearchStatistics;

pub struct BranchAndBound<'a, B: LowerBound = ExitCostBound> {
    matrix: &'a DistanceMatrix,
    bound: B,

    frontier: Frontier,
    arena: PathArena,
    scratch: Vec<Node>,

    best_cost: Cost,
    best_path: Option<Vec<Node>>,
    incumbent_history: Vec<Cost>,

    statistics: SearchStatistics,
    iterations: usize,
    paranoid: bool,
    reported: bool,
}

impl<'a> BranchAndBound<'a, ExitCostBound> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self::with_bound(matrix, ExitCostBound)
    }

    /// Same as [`BranchAndBound::new`], but every node taken from the frontier and every new
    /// incumbent is checked against the invariants of the search. Intended for testing.
    pub fn with_paranoia(matrix: &'a DistanceMatrix) -> Self {
        let mut res = Self::new(matrix);
        res.paranoid = true;
        res
    }
}

impl<'a, B: LowerBound> BranchAndBound<'a, B> {
    /// Creates the search and its root node `[0]`. For an empty matrix the frontier
    /// starts out empty and the search completes without a tour.
    ///
    /// # Panics
    /// If `matrix` fails [`DistanceMatrix::check_cost_range`]. Matrices obtained from
    /// [`DistanceMatrix::from_rows`] or the reader always pass.
    pub fn with_bound(matrix: &'a DistanceMatrix, bound: B) -> Self {
        if let Err(e) = matrix.check_cost_range() {
            panic!("Cannot search tours: {e}");
        }

        let mut res = Self {
            matrix,
            bound,
            frontier: Frontier::default(),
            arena: PathArena::default(),
            scratch: Vec::with_capacity(matrix.len() + 1),
            best_cost: INFINITE_COST,
            best_path: None,
            incumbent_history: Vec::new(),
            statistics: SearchStatistics::default(),
            iterations: 0,
            paranoid: false,
            reported: false,
        };

        if !matrix.is_empty() {
            let mut visited = FixedBitSet::with_capacity(matrix.len());
            visited.insert(0);

            let root_bound = res.bound.lower_bound(matrix, &[0], &visited);
            let tail = res.arena.root(0);

            res.statistics.nodes_generated += 1;
            res.frontier.push(SearchNode::new(0, tail, visited, root_bound));
        }

        res
    }

    /// Sets an inclusive upper bound on the cost of the tour. This prunes every branch that
    /// cannot yield a tour of cost at most `upper_bound`. If no such tour exists, the search
    /// completes without a solution; so this is typically used with the cost of a known
    /// (heuristic) tour which then serves as fallback.
    ///
    /// # Warning
    /// This method may only be called before the first execution of the algorithm.
    pub fn set_upper_bound(&mut self, upper_bound: Cost) {
        assert_eq!(self.iterations, 0);
        self.best_cost = upper_bound.saturating_add(1);
    }

    /// Returns the number of frontier nodes processed so far
    pub fn number_of_iterations(&self) -> usize {
        self.iterations
    }

    pub fn statistics(&self) -> SearchStatistics {
        let mut stats = self.statistics;
        stats.peak_frontier = self.frontier.peak_len() as u64;
        stats
    }

    /// Returns the cost of the incumbent, [`INFINITE_COST`] if there is none. If an upper
    /// bound was set, this is one above the bound until a tour is found.
    pub fn best_cost(&self) -> Cost {
        self.best_cost
    }

    /// Costs of all incumbents in the order they were found; strictly decreasing
    pub fn incumbent_history(&self) -> &[Cost] {
        &self.incumbent_history
    }

    /// Returns the bound of the node that will be processed next
    pub fn peek_frontier_bound(&self) -> Option<Cost> {
        self.frontier.peek_bound()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    fn is_terminal(&self, node: &SearchNode) -> bool {
        node.level as usize + 1 == self.matrix.len()
    }

    /// Closes the path stored in `self.scratch` and keeps it if it improves the incumbent
    fn evaluate_terminal(&mut self) {
        self.statistics.terminal_nodes += 1;

        self.scratch.push(self.scratch[0]);
        let cost = path_cost(self.matrix, &self.scratch);

        if cost < self.best_cost {
            debug!(
                "New incumbent with cost {cost:>8} after {:>9} iterations (frontier: {})",
                self.iterations,
                self.frontier.len()
            );

            self.best_cost = cost;
            self.best_path = Some(self.scratch.clone());
            self.incumbent_history.push(cost);
            self.statistics.improvements += 1;

            if self.paranoid {
                let tour = Tour::new(self.scratch.clone(), cost);
                if let Err(e) = tour.is_consistent_with(self.matrix) {
                    panic!("Invalid incumbent {tour:?}: {e}");
                }
            }
        }
    }

    /// Generates all children of `node`, whose path is stored in `self.scratch`, and keeps
    /// those with a bound strictly below the incumbent
    fn expand(&mut self, mut node: SearchNode) {
        self.statistics.nodes_expanded += 1;
        let level = node.level + 1;

        for city in self.matrix.vertices() {
            if node.visited.contains(city as usize) {
                continue;
            }

            // temporarily turn the parent into the child to evaluate the bound in place
            self.scratch.push(city);
            node.visited.insert(city as usize);

            let bound = self
                .bound
                .lower_bound(self.matrix, &self.scratch, &node.visited);
            self.statistics.nodes_generated += 1;

            if bound < self.best_cost {
                let tail = self.arena.extend(node.tail, city);
                self.frontier
                    .push(SearchNode::new(level, tail, node.visited.clone(), bound));
            } else {
                trace!("Prune child {:?} with bound {bound}", self.scratch);
                self.statistics.pruned_on_generation += 1;
            }

            node.visited.set(city as usize, false);
            self.scratch.pop();
        }
    }

    fn assert_node_invariants(&self, node: &SearchNode) {
        assert_eq!(self.scratch.len(), node.level as usize + 1);
        assert_eq!(self.scratch[0], 0);
        assert_eq!(node.visited.count_ones(..), self.scratch.len());
        assert!(self.scratch.iter().all(|&u| node.visited.contains(u as usize)));
        assert!(
            node.bound < self.best_cost,
            "expanding node with bound {} >= {}",
            node.bound,
            self.best_cost
        );
    }

    fn report_completion(&mut self) {
        if self.reported {
            return;
        }
        self.reported = true;

        info!(
            "Branch and bound completed: n={} iterations={} cost={} arena={}",
            self.matrix.number_of_nodes(),
            self.iterations,
            self.best_path
                .as_ref()
                .map_or_else(|| String::from("-"), |_| self.best_cost.to_string()),
            self.arena.len()
        );
        info!(" {}", self.statistics());

        // the frontier is empty, so no slot is referenced anymore
        self.arena.clear();
    }
}

impl<B: LowerBound> TerminatingIterativeAlgorithm<Tour> for BranchAndBound<'_, B> {}

impl<B: LowerBound> IterativeAlgorithm<Tour> for BranchAndBound<'_, B> {
    fn execute_step(&mut self) {
        let Some(node) = self.frontier.pop() else {
            return;
        };
        self.iterations += 1;

        if node.bound >= self.best_cost {
            self.statistics.pruned_on_dequeue += 1;
        } else {
            self.arena.collect_path(node.tail, &mut self.scratch);

            if self.paranoid {
                self.assert_node_invariants(&node);
            }

            if self.is_terminal(&node) {
                self.evaluate_terminal();
            } else {
                self.expand(node);
            }
        }

        if self.frontier.is_empty() {
            self.report_completion();
        }
    }

    fn is_completed(&self) -> bool {
        self.frontier.is_empty()
    }

    fn best_known_solution(&mut self) -> Option<Tour> {
        self.best_path
            .as_ref()
            .map(|path| Tour::new(path.clone(), self.best_cost))
    }
}

/// Computes an optimal tour starting at city 0, or `None` if there is none (i.e. the matrix
/// is empty).
///
/// # Example
/// ```
/// use tsp::{exact::solve, matrix::DistanceMatrix};
/// let matrix = DistanceMatrix::from_rows(vec![vec![0, 5], vec![5, 0]]).unwrap();
/// let tour = solve(&matrix).unwrap();
/// assert_eq!(tour.path(), &[0, 1, 0]);
/// assert_eq!(tour.cost(), 10);
/// ```
pub fn solve(matrix: &DistanceMatrix) -> Option<Tour> {
    BranchAndBound::new(matrix).run_to_completion()
}
