//! wf-path: persistent paths and shortest-path search for wayfinder.
//!
//! Provides:
//! - `Path`, an immutable chain of weighted segments with a running cost
//! - Dijkstra single-pair search over a `wf_graph::Graph`
//!
//! # Example
//!
//! ```
//! use wf_graph::Graph;
//! use wf_path::find_path;
//!
//! let mut graph: Graph<&str, u32> = Graph::new();
//! for n in ["A", "B", "C"] {
//!     graph.add_node_value(n);
//! }
//! graph.add_edge_between("A", "B", 2);
//! graph.add_edge_between("B", "C", 3);
//! graph.add_edge_between("A", "C", 10);
//!
//! let path = find_path(&graph, &"A", &"C").unwrap();
//! assert_eq!(path.cost(), 5.0);
//! assert_eq!(path.to_string(), "A -> B -> C (cost 5.000)");
//! ```

pub mod dijkstra;
pub mod path;

pub use dijkstra::{EdgeCost, SearchStats, find_path, find_path_with_stats, try_find_path};
pub use path::{Path, Segment, Segments};
