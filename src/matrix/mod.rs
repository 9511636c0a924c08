pub mod edge;
pub mod random;

pub use edge::*;
pub use random::*;

use std::{fmt, ops::Range};

use itertools::Itertools;

use crate::errors::MatrixError;

pub type Node = u32;
pub type NumNodes = Node;
pub type Cost = u64;

/// Sentinel for "no tour known yet"; every real tour is strictly cheaper.
pub const INFINITE_COST: Cost = Cost::MAX;

/// Dense, row-major `n x n` matrix of directed edge costs of a complete graph.
/// Entry `(u, v)` is the cost of travelling from city `u` to city `v`; the matrix need
/// not be symmetric and the diagonal is never traversed by a tour.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct DistanceMatrix {
    number_of_nodes: NumNodes,
    costs: Vec<Cost>,
}

impl DistanceMatrix {
    /// Creates a matrix over `n` cities with all costs set to zero
    pub fn new(n: NumNodes) -> Self {
        Self {
            number_of_nodes: n,
            costs: vec![0; (n as usize) * (n as usize)],
        }
    }

    /// Builds a matrix from its rows. Row `i` holds the costs from city `i` to every
    /// city `j`.
    ///
    /// # Example
    /// ```
    /// use tsp::matrix::DistanceMatrix;
    /// let matrix = DistanceMatrix::from_rows(vec![vec![0, 5], vec![7, 0]]).unwrap();
    /// assert_eq!(matrix.cost(0, 1), 5);
    /// assert_eq!(matrix.cost(1, 0), 7);
    /// assert!(DistanceMatrix::from_rows(vec![vec![0, 5], vec![7]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        let number_of_nodes = NumNodes::try_from(n).map_err(|_| MatrixError::TooLarge(n))?;

        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.len())
            .enumerate()
            .find(|&(_, len)| len != n)
        {
            return Err(MatrixError::NotSquare {
                row,
                expected: n,
                found,
            });
        }

        let matrix = Self {
            number_of_nodes,
            costs: rows.into_iter().flatten().collect(),
        };
        matrix.check_cost_range()?;
        Ok(matrix)
    }

    /// Every tour and every lower bound sums exactly `n` entries of the matrix. Returns an
    /// error unless `n` times the largest entry (diagonal included) stays strictly below
    /// [`INFINITE_COST`], so that no sum saturates or collides with the sentinel.
    pub fn check_cost_range(&self) -> Result<(), MatrixError> {
        let max_cost = self.costs.iter().copied().max().unwrap_or(0);

        match max_cost.checked_mul(self.number_of_nodes as Cost) {
            Some(total) if total < INFINITE_COST => Ok(()),
            _ => Err(MatrixError::CostOverflow {
                cities: self.len(),
                max_cost,
            }),
        }
    }

    /// Returns the number of cities
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Return the number of cities as usize
    pub fn len(&self) -> usize {
        self.number_of_nodes as usize
    }

    /// Returns true if the matrix contains no cities
    pub fn is_empty(&self) -> bool {
        self.number_of_nodes == 0
    }

    /// Returns an iterator over all cities
    pub fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes
    }

    /// Returns the cost of the directed edge `(u, v)`.
    /// ** Panics if u >= n or v >= n **
    #[inline(always)]
    pub fn cost(&self, u: Node, v: Node) -> Cost {
        self.costs[self.index_of(u, v)]
    }

    /// Returns the cost of an [`Edge`]
    #[inline(always)]
    pub fn cost_of_edge(&self, Edge(u, v): Edge) -> Cost {
        self.cost(u, v)
    }

    pub fn set_cost(&mut self, u: Node, v: Node, cost: Cost) {
        let idx = self.index_of(u, v);
        self.costs[idx] = cost;
    }

    /// Returns the costs of all edges leaving `u`
    pub fn row(&self, u: Node) -> &[Cost] {
        let begin = self.index_of(u, 0);
        &self.costs[begin..begin + self.len()]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cost]> + '_ {
        self.vertices().map(|u| self.row(u))
    }

    /// Returns true if `cost(u, v) == cost(v, u)` for all pairs
    pub fn is_symmetric(&self) -> bool {
        self.vertices()
            .tuple_combinations()
            .all(|(u, v)| self.cost(u, v) == self.cost(v, u))
    }

    /// Returns the largest off-diagonal cost or `None` if there are less than two cities
    pub fn max_cost(&self) -> Option<Cost> {
        self.vertices()
            .cartesian_product(self.vertices())
            .filter(|(u, v)| u != v)
            .map(|(u, v)| self.cost(u, v))
            .max()
    }

    #[inline(always)]
    fn index_of(&self, u: Node, v: Node) -> usize {
        debug_assert!(u < self.number_of_nodes && v < self.number_of_nodes);
        (u as usize) * self.len() + v as usize
    }
}

impl fmt::Debug for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DistanceMatrix(n={}) [", self.number_of_nodes)?;
        for row in self.rows() {
            write!(f, "[{}]", row.iter().join(","))?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn row_major_layout() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0, 1, 2],
            vec![3, 0, 4],
            vec![5, 6, 0],
        ])
        .unwrap();

        assert_eq!(matrix.number_of_nodes(), 3);
        assert_eq!(matrix.row(1), &[3, 0, 4]);
        assert_eq!(matrix.cost(2, 1), 6);
        assert_eq!(matrix.cost_of_edge(Edge(1, 2)), 4);
        assert_eq!(matrix.max_cost(), Some(6));
        assert!(!matrix.is_symmetric());
    }

    #[test]
    fn not_square() {
        assert_eq!(
            DistanceMatrix::from_rows(vec![vec![0, 1], vec![1, 0], vec![2, 2]]),
            Err(MatrixError::NotSquare {
                row: 0,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn cost_range() {
        let half = INFINITE_COST / 2 + 1;
        assert_eq!(
            DistanceMatrix::from_rows(vec![vec![0, half], vec![half, 0]]),
            Err(MatrixError::CostOverflow {
                cities: 2,
                max_cost: half
            })
        );

        // the diagonal counts as well, a single city tour pays cost(0, 0)
        assert!(DistanceMatrix::from_rows(vec![vec![INFINITE_COST]]).is_err());
        assert!(DistanceMatrix::from_rows(vec![vec![INFINITE_COST - 1]]).is_ok());

        let largest = (INFINITE_COST - 1) / 3;
        let matrix = DistanceMatrix::from_rows(vec![vec![largest; 3]; 3]).unwrap();
        assert!(matrix.check_cost_range().is_ok());

        let mut matrix = DistanceMatrix::new(3);
        matrix.set_cost(0, 1, largest + 1);
        assert!(matrix.check_cost_range().is_err());
    }

    #[test]
    fn set_cost() {
        let mut matrix = DistanceMatrix::new(3);
        assert!(matrix.is_symmetric());

        matrix.set_cost(0, 2, 9);
        assert_eq!(matrix.cost(0, 2), 9);
        assert_eq!(matrix.cost(2, 0), 0);
        assert!(!matrix.is_symmetric());

        matrix.set_cost(2, 0, 9);
        assert!(matrix.is_symmetric());
    }

    #[test]
    fn empty() {
        let matrix = DistanceMatrix::from_rows(Vec::new()).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.max_cost(), None);
        assert_eq!(matrix.vertices().count(), 0);
    }
}
