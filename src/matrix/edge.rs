use super::*;

/// A directed edge `u -> v`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Edge(pub Node, pub Node);

impl Edge {
    pub fn source(&self) -> Node {
        self.0
    }

    pub fn target(&self) -> Node {
        self.1
    }

    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}
