use super::*;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

pub trait RandomMatrix: Sized {
    /// Generates a matrix over `n` cities in which every off-diagonal entry is drawn
    /// independently and uniformly from `1..=max_cost`. The result is, in general,
    /// asymmetric.
    fn random_uniform<R: Rng>(rng: &mut R, n: NumNodes, max_cost: Cost) -> Self;

    /// Same as [`RandomMatrix::random_uniform`], but `cost(u, v) == cost(v, u)`
    fn random_symmetric<R: Rng>(rng: &mut R, n: NumNodes, max_cost: Cost) -> Self;

    /// Places `n` cities uniformly at random in a `side x side` square and uses the
    /// rounded euclidean distances as costs
    fn random_euclidean<R: Rng>(rng: &mut R, n: NumNodes, side: f64) -> Self;
}

impl RandomMatrix for DistanceMatrix {
    fn random_uniform<R: Rng>(rng: &mut R, n: NumNodes, max_cost: Cost) -> Self {
        assert!(max_cost >= 1);
        let distr = Uniform::new_inclusive(1, max_cost);

        let mut result = Self::new(n);
        for u in 0..n {
            for v in (0..n).filter(|&v| v != u) {
                result.set_cost(u, v, distr.sample(rng));
            }
        }
        result
    }

    fn random_symmetric<R: Rng>(rng: &mut R, n: NumNodes, max_cost: Cost) -> Self {
        assert!(max_cost >= 1);
        let distr = Uniform::new_inclusive(1, max_cost);

        let mut result = Self::new(n);
        for u in 0..n {
            for v in (u + 1)..n {
                let cost = distr.sample(rng);
                result.set_cost(u, v, cost);
                result.set_cost(v, u, cost);
            }
        }
        result
    }

    fn random_euclidean<R: Rng>(rng: &mut R, n: NumNodes, side: f64) -> Self {
        assert!(side > 0.0);
        let distr = Uniform::new(0.0, side);

        let points: Vec<(f64, f64)> = (0..n)
            .map(|_| (distr.sample(rng), distr.sample(rng)))
            .collect();

        let mut result = Self::new(n);
        for (u, &(ux, uy)) in points.iter().enumerate() {
            for (v, &(vx, vy)) in points.iter().enumerate() {
                if u != v {
                    let dist = (ux - vx).hypot(uy - vy).round() as Cost;
                    result.set_cost(u as Node, v as Node, dist);
                }
            }
        }
        result
    }
}
