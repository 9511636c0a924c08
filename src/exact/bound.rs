use fixedbitset::FixedBitSet;

use crate::{matrix::*, utils::path_cost};

/// Computes a lower bound on the cost of every closed tour that extends a partial path.
///
/// `path` is non-empty and starts at the fixed start city; `visited` contains exactly the
/// cities of `path`. Implementations must be pure functions of their arguments. The branch
/// and bound search is exact iff the bound never exceeds the cost of the cheapest
/// completion.
pub trait LowerBound {
    fn lower_bound(&self, matrix: &DistanceMatrix, path: &[Node], visited: &FixedBitSet) -> Cost;
}

/// The default bound, consisting of three additive terms:
///  1. the cost of the edges already fixed by `path`,
///  2. the cheapest edge from the last city of `path` to an unvisited city, and
///  3. for each unvisited city, its cheapest outgoing edge into a city that is unvisited,
///     is the start of `path`, or has index 0.
///
/// Observe that in term 3 an unvisited city qualifies as its own target, so a zero
/// diagonal makes this term vanish. Also, index 0 is admitted independently of whether it
/// is the start city. Both quirks are kept on purpose as they determine which nodes the
/// search prunes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExitCostBound;

impl LowerBound for ExitCostBound {
    fn lower_bound(&self, matrix: &DistanceMatrix, path: &[Node], visited: &FixedBitSet) -> Cost {
        debug_assert!(!path.is_empty());

        let is_visited = |u: Node| visited.contains(u as usize);
        let unvisited = || matrix.vertices().filter(move |&u| !is_visited(u));

        let committed = path_cost(matrix, path);

        let next_step = path
            .last()
            .and_then(|&last| unvisited().map(|v| matrix.cost(last, v)).min())
            .unwrap_or(0);

        let start = path[0];
        let completion = unvisited()
            .map(|u| {
                matrix
                    .vertices()
                    .filter(|&v| v == 0 || !is_visited(v) || v == start)
                    .map(|v| matrix.cost(u, v))
                    .min()
                    .unwrap_or(0)
            })
            .fold(0, Cost::saturating_add);

        committed
            .saturating_add(next_step)
            .saturating_add(completion)
    }
}

/// Only accounts for the edges already fixed by the path. Much weaker than
/// [`ExitCostBound`] but trivially admissible.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathCostBound;

impl LowerBound for PathCostBound {
    fn lower_bound(&self, matrix: &DistanceMatrix, path: &[Node], _visited: &FixedBitSet) -> Cost {
        path_cost(matrix, path)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn visited_set(n: usize, cities: &[Node]) -> FixedBitSet {
        let mut visited = FixedBitSet::with_capacity(n);
        for &u in cities {
            visited.insert(u as usize);
        }
        visited
    }

    fn example() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
        .unwrap()
    }

    #[test]
    fn root_bound() {
        let matrix = example();
        // committed 0, cheapest step 10, exit terms vanish due to the zero diagonal
        assert_eq!(
            ExitCostBound.lower_bound(&matrix, &[0], &visited_set(4, &[0])),
            10
        );
    }

    #[test]
    fn partial_path() {
        let matrix = example();
        // committed 10 + 35, cheapest step 2->3 is 30, city 3 may exit into itself (0)
        assert_eq!(
            ExitCostBound.lower_bound(&matrix, &[0, 1, 2], &visited_set(4, &[0, 1, 2])),
            75
        );
    }

    #[test]
    fn complete_path_has_no_estimate() {
        let matrix = example();
        assert_eq!(
            ExitCostBound.lower_bound(&matrix, &[0, 1, 3, 2], &visited_set(4, &[0, 1, 2, 3])),
            10 + 25 + 30
        );
    }

    /// Known fidelity point: an unvisited city counts its own diagonal entry as an exit.
    #[test]
    fn diagonal_participates_in_exit_term() {
        let mut matrix = example();
        for u in matrix.vertices() {
            matrix.set_cost(u, u, 100);
        }

        // 10 (step) + 10 (exit of 1) + 15 (exit of 2) + 20 (exit of 3)
        assert_eq!(
            ExitCostBound.lower_bound(&matrix, &[0], &visited_set(4, &[0])),
            55
        );

        matrix.set_cost(3, 3, 1);
        assert_eq!(
            ExitCostBound.lower_bound(&matrix, &[0], &visited_set(4, &[0])),
            36
        );
    }

    /// Known fidelity point: index 0 is an admissible exit target even if the path does
    /// not start there.
    #[test]
    fn index_zero_is_special_cased() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![50, 50, 50, 50],
            vec![1, 50, 50, 50],
            vec![50, 50, 50, 50],
            vec![50, 50, 50, 50],
        ])
        .unwrap();

        // path starts at 2, city 0 is visited; city 1 still exits into 0 for 1
        let bound = ExitCostBound.lower_bound(&matrix, &[2], &visited_set(4, &[0, 2]));
        assert_eq!(bound, 50 + 1 + 50);
    }

    #[test]
    fn bounds_are_admissible_for_all_prefixes() {
        use itertools::Itertools;

        let matrix = example();
        for perm in (1..4).permutations(3) {
            let path = std::iter::once(0).chain(perm).collect_vec();
            let mut closed = path.clone();
            closed.push(0);
            let tour_cost = path_cost(&matrix, &closed);

            for len in 1..=path.len() {
                let visited = visited_set(4, &path[..len]);
                assert!(ExitCostBound.lower_bound(&matrix, &path[..len], &visited) <= tour_cost);
                assert!(PathCostBound.lower_bound(&matrix, &path[..len], &visited) <= tour_cost);
            }
        }
    }
}
