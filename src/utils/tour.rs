use serde::Serialize;

use crate::{errors::*, matrix::*};

/// A closed tour: `path` visits every city exactly once, starts at city 0 and returns
/// to it, i.e. `path.len() == n + 1` and `path[0] == path[n] == 0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tour {
    path: Vec<Node>,
    cost: Cost,
}

impl Tour {
    /// Creates a tour from an already closed path and its cost. Consistency is not
    /// checked; see [`InvariantCheck::is_correct`] and [`Tour::is_consistent_with`].
    pub fn new(path: Vec<Node>, cost: Cost) -> Self {
        Self { path, cost }
    }

    /// Closes the open `path` by appending its first city and computes the cost
    /// with respect to `matrix`.
    ///
    /// # Example
    /// ```
    /// use tsp::{matrix::DistanceMatrix, utils::Tour};
    /// let matrix = DistanceMatrix::from_rows(vec![vec![0, 5], vec![7, 0]]).unwrap();
    /// let tour = Tour::close(&matrix, vec![0, 1]);
    /// assert_eq!(tour.path(), &[0, 1, 0]);
    /// assert_eq!(tour.cost(), 12);
    /// ```
    pub fn close(matrix: &DistanceMatrix, mut path: Vec<Node>) -> Self {
        if let Some(&first) = path.first() {
            path.push(first);
        }
        let cost = path_cost(matrix, &path);
        Self { path, cost }
    }

    pub fn path(&self) -> &[Node] {
        &self.path
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns the number of distinct cities visited
    pub fn number_of_cities(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Returns the directed edges `path[i] -> path[i + 1]` in travel order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.path.windows(2).map(|w| Edge(w[0], w[1]))
    }

    /// Recomputes the cost of the tour from scratch
    pub fn compute_cost(&self, matrix: &DistanceMatrix) -> Cost {
        path_cost(matrix, &self.path)
    }

    /// Checks the structural invariants and that the stored cost matches `matrix`
    pub fn is_consistent_with(&self, matrix: &DistanceMatrix) -> Result<(), TourError> {
        self.is_correct()?;

        if self.number_of_cities() != matrix.len() {
            return Err(TourError::WrongNumberOfCities {
                expected: matrix.len(),
                found: self.number_of_cities(),
            });
        }

        let computed = self.compute_cost(matrix);
        if computed != self.cost {
            return Err(TourError::CostMismatch {
                stored: self.cost,
                computed,
            });
        }

        Ok(())
    }
}

/// Sum of the directed edge costs between consecutive cities of `path`. Saturates at
/// [`INFINITE_COST`], which cannot happen for a closed tour if
/// [`DistanceMatrix::check_cost_range`] succeeds.
pub fn path_cost(matrix: &DistanceMatrix, path: &[Node]) -> Cost {
    path.windows(2)
        .map(|w| matrix.cost(w[0], w[1]))
        .fold(0, Cost::saturating_add)
}

impl InvariantCheck<TourError> for Tour {
    fn is_correct(&self) -> Result<(), TourError> {
        let (&first, &last) = match (self.path.first(), self.path.last()) {
            (Some(first), Some(last)) if self.path.len() > 1 => (first, last),
            _ => return Err(TourError::Empty),
        };

        if first != 0 {
            return Err(TourError::WrongStart(first));
        }

        if last != first {
            return Err(TourError::NotClosed(last));
        }

        let cities = self.number_of_cities();
        let mut seen = vec![false; cities];
        for &u in &self.path[..cities] {
            let slot = seen
                .get_mut(u as usize)
                .ok_or(TourError::CityOutOfRange { city: u, cities })?;

            if *slot {
                return Err(TourError::DuplicateCity(u));
            }
            *slot = true;
        }

        Ok(())
    }
}
