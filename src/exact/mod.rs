pub mod bound;
pub mod branch_and_bound;
pub mod naive;

pub use bound::*;
pub use branch_and_bound::{BranchAndBound, SearchStatistics, solve};
pub use naive::naive_solver;
