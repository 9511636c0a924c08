pub mod greedy;

pub use greedy::nearest_neighbor;
