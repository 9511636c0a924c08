use fixedbitset::FixedBitSet;

use crate::{matrix::*, utils::Tour};

/// # Nearest-Neighbor Heuristic
///
/// 1. Starts the tour at city 0
/// 2. Repeatedly travels to the cheapest unvisited city (smallest index on ties)
/// 3. Returns to city 0 once all cities are visited
///
/// Runs in time `O(n^2)` and never backtracks, so the tour may be arbitrarily far from
/// optimal. Returns `None` iff the matrix is empty.
pub fn nearest_neighbor(matrix: &DistanceMatrix) -> Option<Tour> {
    if matrix.is_empty() {
        return None;
    }

    let mut visited = FixedBitSet::with_capacity(matrix.len());
    let mut path = Vec::with_capacity(matrix.len() + 1);

    let mut current = 0;
    visited.insert(0);
    path.push(current);

    for _ in 1..matrix.number_of_nodes() {
        let (next, _) = matrix
            .vertices()
            .filter(|&v| !visited.contains(v as usize))
            .map(|v| (v, matrix.cost(current, v)))
            .min_by_key(|&(v, cost)| (cost, v))?;

        visited.insert(next as usize);
        path.push(next);
        current = next;
    }

    Some(Tour::close(matrix, path))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{exact::naive_solver, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn follows_cheapest_edges() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
        .unwrap();

        let tour = nearest_neighbor(&matrix).unwrap();
        assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
        assert_eq!(tour.cost(), 80);
    }

    #[test]
    fn can_be_suboptimal() {
        // greedy walks 0 -> 1 -> 2 -> 3 and pays dearly for the way back
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0, 1, 2, 3],
            vec![5, 0, 1, 5],
            vec![1, 5, 0, 1],
            vec![100, 5, 5, 0],
        ])
        .unwrap();

        let tour = nearest_neighbor(&matrix).unwrap();
        assert_eq!(tour.path(), &[0, 1, 2, 3, 0]);
        assert_eq!(tour.cost(), 103);
        assert!(naive_solver(&matrix).unwrap().cost() < tour.cost());
    }

    #[test]
    fn ties_prefer_smaller_index() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0, 4, 4, 4],
            vec![4, 0, 4, 4],
            vec![4, 4, 0, 4],
            vec![4, 4, 4, 0],
        ])
        .unwrap();

        assert_eq!(nearest_neighbor(&matrix).unwrap().path(), &[0, 1, 2, 3, 0]);
    }

    #[test]
    fn degenerate() {
        assert!(nearest_neighbor(&DistanceMatrix::new(0)).is_none());
        assert_eq!(
            nearest_neighbor(&DistanceMatrix::new(1)).unwrap().path(),
            &[0, 0]
        );
    }

    #[test]
    fn never_beats_optimum() {
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        for i in 0..60 {
            let matrix = random_matrix(&mut rng, 2 + (i % 6) as NumNodes, i);
            let greedy = nearest_neighbor(&matrix).unwrap();
            assert_valid_tour(&matrix, &greedy);
            assert!(greedy.cost() >= naive_solver(&matrix).unwrap().cost());
        }
    }
}
