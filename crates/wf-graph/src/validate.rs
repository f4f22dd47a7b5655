//! Graph validation logic.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::GraphError;
use crate::graph::Graph;

/// Validate the graph representation: index, adjacency and edge set agree.
pub(crate) fn validate_graph<N, E>(graph: &Graph<N, E>) -> Result<(), GraphError>
where
    N: Eq + Hash + Clone + Debug,
    E: Eq + Hash + Clone + Debug,
{
    // Parallel vectors must line up
    if graph.node_index.len() != graph.nodes.len() {
        return Err(GraphError::CountMismatch {
            what: "Node index",
            expected: graph.nodes.len(),
            actual: graph.node_index.len(),
        });
    }
    if graph.outgoing.len() != graph.nodes.len() {
        return Err(GraphError::CountMismatch {
            what: "Adjacency list",
            expected: graph.nodes.len(),
            actual: graph.outgoing.len(),
        });
    }

    // Check that each node is indexed at its own position
    for (i, node) in graph.nodes.iter().enumerate() {
        if graph.node_index.get(node) != Some(&i) {
            return Err(GraphError::IndexMismatch {
                node: format!("{:?}", node.value()),
            });
        }
    }

    // Every edge's endpoints must exist
    for edge in &graph.edges {
        if !graph.node_index.contains_key(edge.parent())
            || !graph.node_index.contains_key(edge.child())
        {
            return Err(GraphError::DanglingEdge {
                edge: format!("{:?}", edge),
            });
        }
    }

    // Each adjacency entry must start at its owner and be in the edge set
    let mut listed = 0usize;
    for (i, list) in graph.outgoing.iter().enumerate() {
        let owner = &graph.nodes[i];
        for edge in list {
            if edge.parent() != owner {
                return Err(GraphError::MisfiledEdge {
                    edge: format!("{:?}", edge),
                    node: format!("{:?}", owner.value()),
                });
            }
            if !graph.edges.contains(edge) {
                return Err(GraphError::AdjacencyMismatch {
                    edge: format!("{:?}", edge),
                });
            }
        }
        listed += list.len();
    }

    // Every edge should appear exactly once
    if listed != graph.edges.len() {
        return Err(GraphError::CountMismatch {
            what: "Adjacency entry",
            expected: graph.edges.len(),
            actual: listed,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};

    fn two_nodes() -> Graph<&'static str, u32> {
        let mut g = Graph::new();
        g.add_node_value("N1");
        g.add_node_value("N2");
        g.add_edge_between("N1", "N2", 1);
        g
    }

    #[test]
    fn validate_empty_graph() {
        let g: Graph<u32, u32> = Graph::new();
        assert!(validate_graph(&g).is_ok());
    }

    #[test]
    fn validate_dangling_edge() {
        let mut g = two_nodes();
        g.edges.insert(Edge::between("N1", "N99", 5));

        let result = validate_graph(&g);
        assert!(matches!(result, Err(GraphError::DanglingEdge { .. })));
    }

    #[test]
    fn validate_misfiled_edge() {
        let mut g = two_nodes();
        let e = Edge::between("N1", "N2", 7);
        g.edges.insert(e.clone());
        g.outgoing[1].push(e);

        let result = validate_graph(&g);
        assert!(matches!(result, Err(GraphError::MisfiledEdge { .. })));
    }

    #[test]
    fn validate_missing_adjacency() {
        let mut g = two_nodes();
        g.outgoing[0].clear();

        let result = validate_graph(&g);
        assert!(matches!(result, Err(GraphError::CountMismatch { .. })));
    }

    #[test]
    fn validate_bad_index() {
        let mut g = two_nodes();
        g.node_index.insert(Node::new("N1"), 1);

        let err = validate_graph(&g).unwrap_err();
        assert!(err.to_string().contains("N1"));
        let core: wf_core::WfError = err.into();
        assert!(matches!(core, wf_core::WfError::Invariant { .. }));
    }
}
