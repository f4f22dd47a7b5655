//! Graph-specific error types.

use wf_core::WfError;

/// Representation-invariant failures reported by `Graph::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge refers to a node that isn't in the graph.
    DanglingEdge { edge: String },

    /// An edge is in the edge set but missing from its parent's adjacency list, or the reverse.
    AdjacencyMismatch { edge: String },

    /// An adjacency list is stored under a node that isn't the edge's parent.
    MisfiledEdge { edge: String, node: String },

    /// The reverse node index disagrees with the node list.
    IndexMismatch { node: String },

    /// Two parallel structures have different lengths.
    CountMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::DanglingEdge { edge } => {
                write!(f, "Edge {} refers to a non-existent node", edge)
            }
            GraphError::AdjacencyMismatch { edge } => {
                write!(f, "Edge {} is not consistently stored in adjacency", edge)
            }
            GraphError::MisfiledEdge { edge, node } => {
                write!(f, "Edge {} is listed under node {} but doesn't start there", edge, node)
            }
            GraphError::IndexMismatch { node } => {
                write!(f, "Node {} is not indexed at its position", node)
            }
            GraphError::CountMismatch {
                what,
                expected,
                actual,
            } => {
                write!(f, "{} count is {} (expected {})", what, actual, expected)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for WfError {
    fn from(err: GraphError) -> Self {
        WfError::Invariant {
            what: err.to_string(),
        }
    }
}
