pub mod labels;
pub mod signal_handling;
pub mod tour;

pub use labels::*;
pub use tour::*;
