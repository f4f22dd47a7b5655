//! wf-graph: generic directed labeled graph for wayfinder.
//!
//! Provides:
//! - Value-identity `Node` and labeled `Edge` types
//! - A mutable `Graph` with set semantics and outgoing adjacency
//! - Representation-invariant validation
//!
//! # Example
//!
//! ```
//! use wf_graph::{Edge, Graph, Node};
//!
//! let mut graph: Graph<&str, u32> = Graph::new();
//! graph.add_node(Node::new("Inlet"));
//! graph.add_node(Node::new("Outlet"));
//! graph.add_edge(Edge::between("Inlet", "Outlet", 3));
//! // Endpoint missing: silently ignored.
//! graph.add_edge(Edge::between("Inlet", "Nowhere", 1));
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! assert_eq!(graph.outgoing_edges(&Node::new("Inlet")).len(), 1);
//! ```

pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use error::GraphError;
pub use graph::{Edge, Graph, Node};
