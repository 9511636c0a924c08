use std::error::Error;

use thiserror::Error;

use crate::matrix::Node;

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("row {row} has {found} entries but the matrix has {expected} rows")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix with {0} rows exceeds the supported number of cities")]
    TooLarge(usize),

    #[error("{cities} cities with costs up to {max_cost} may yield tours whose cost is not representable")]
    CostOverflow { cities: usize, max_cost: u64 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TourError {
    #[error("tour is empty")]
    Empty,

    #[error("tour starts at city {0} instead of city 0")]
    WrongStart(Node),

    #[error("tour ends at city {0} and is therefore not closed")]
    NotClosed(Node),

    #[error("city {0} is visited more than once")]
    DuplicateCity(Node),

    #[error("city {city} is out of range for a tour over {cities} cities")]
    CityOutOfRange { city: Node, cities: usize },

    #[error("tour visits {found} cities but the matrix has {expected}")]
    WrongNumberOfCities { expected: usize, found: usize },

    #[error("stored cost {stored} does not match the recomputed cost {computed}")]
    CostMismatch { stored: u64, computed: u64 },
}
