use std::iter::once;

use itertools::Itertools;
use log::debug;

use crate::{matrix::*, utils::*};

/// Enumerates all `(n-1)!` tours that start at city 0 and returns the cheapest one (the
/// first in lexicographic order among several optimal tours). Only feasible for very small
/// instances; we use it as ground truth for the branch and bound solver.
///
/// Returns `None` iff the matrix is empty.
pub fn naive_solver(matrix: &DistanceMatrix) -> Option<Tour> {
    let n = matrix.number_of_nodes();
    if n == 0 {
        return None;
    }

    let mut evaluated = 0usize;
    let best = (1..n)
        .permutations((n - 1) as usize)
        .map(|perm| {
            evaluated += 1;
            let path = once(0).chain(perm).chain(once(0)).collect_vec();
            let cost = path_cost(matrix, &path);
            Tour::new(path, cost)
        })
        .min_by_key(|tour| tour.cost());

    debug!("Naive solver evaluated {evaluated} tours");
    best
}
