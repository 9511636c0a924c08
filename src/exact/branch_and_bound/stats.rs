use std::fmt;

use serde::Serialize;

/// Counters collected during a branch and bound search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStatistics {
    /// Search nodes created, including the root and nodes pruned right after creation
    pub nodes_generated: u64,
    /// Non-terminal nodes whose children were generated
    pub nodes_expanded: u64,
    /// Children discarded since their bound was not below the incumbent
    pub pruned_on_generation: u64,
    /// Nodes discarded when taken from the frontier
    pub pruned_on_dequeue: u64,
    /// Complete paths whose closed tour was evaluated
    pub terminal_nodes: u64,
    /// Number of times a strictly cheaper tour was found
    pub improvements: u64,
    /// Largest size of the frontier
    pub peak_frontier: u64,
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generated: {:>9} expanded: {:>9} pruned(gen): {:>9} pruned(deq): {:>9} terminal: {:>7} improvements: {:>3} peak frontier: {:>8}",
            self.nodes_generated,
            self.nodes_expanded,
            self.pruned_on_generation,
            self.pruned_on_dequeue,
            self.terminal_nodes,
            self.improvements,
            self.peak_frontier,
        )
    }
}
