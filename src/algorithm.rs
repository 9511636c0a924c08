//! Step-wise execution of long running searches. A search advances by one unit of work
//! per [`IterativeAlgorithm::execute_step`]; the driver loops below stop on completion,
//! on Ctrl-C and, optionally, after a wall-clock budget.

use crate::utils::signal_handling;
use std::time::{Duration, Instant};

/// # Example
/// ```
/// use std::time::Duration;
/// use tsp::{algorithm::*, exact::BranchAndBound, matrix::DistanceMatrix};
///
/// let matrix = DistanceMatrix::from_rows(vec![vec![0, 2, 9], vec![1, 0, 6], vec![15, 7, 0]]).unwrap();
/// let mut search = BranchAndBound::new(&matrix);
///
/// search.run_until_timeout(Duration::from_secs(10));
/// assert!(search.is_completed());
/// assert_eq!(search.best_known_solution().unwrap().cost(), 17);
/// ```
pub trait IterativeAlgorithm<T> {
    fn execute_step(&mut self);

    /// Once true, [`IterativeAlgorithm::execute_step`] must not be called again
    fn is_completed(&self) -> bool;

    /// Incumbent so far; `None` if nothing was found yet
    fn best_known_solution(&mut self) -> Option<T>;

    /// Performs at least one step (unless completed) and continues while `predicate` holds
    fn run_while<F: FnMut(&mut Self) -> bool>(&mut self, mut predicate: F) {
        while !self.is_completed() && !signal_handling::received_ctrl_c() {
            self.execute_step();

            if !predicate(self) {
                break;
            }
        }
    }

    /// The budget is checked between steps only
    fn run_until_timeout(&mut self, timeout: Duration) {
        let start = Instant::now();
        self.run_while(|_| start.elapsed() < timeout);
    }
}

/// Marker for searches that complete after finitely many steps
pub trait TerminatingIterativeAlgorithm<T>: IterativeAlgorithm<T> {
    fn run_to_completion(&mut self) -> Option<T> {
        while !self.is_completed() && !signal_handling::received_ctrl_c() {
            self.execute_step();
        }
        self.best_known_solution()
    }
}
