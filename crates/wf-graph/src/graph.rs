//! Core graph data structures.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::GraphError;
use crate::validate;

/// A vertex: an immutable wrapper around a hashable value.
///
/// Two nodes are equal iff their values are equal. `Hash` is derived from the
/// single field, so a `Node<N>` hashes exactly like its `N`; that is what makes
/// the `Borrow<N>` impl below sound for map lookups by raw value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node<N> {
    value: N,
}

impl<N> Node<N> {
    /// Wrap `value` as a node.
    pub fn new(value: N) -> Self {
        Self { value }
    }

    /// The wrapped value.
    pub fn value(&self) -> &N {
        &self.value
    }

    /// Unwrap the node, returning its value.
    pub fn into_value(self) -> N {
        self.value
    }
}

impl<N> From<N> for Node<N> {
    fn from(value: N) -> Self {
        Self::new(value)
    }
}

impl<N> Borrow<N> for Node<N> {
    fn borrow(&self) -> &N {
        &self.value
    }
}

/// A directed, labeled edge from `parent` to `child`.
///
/// Equality covers all three fields, so parallel edges with distinct labels
/// are distinct edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<N, E> {
    parent: Node<N>,
    child: Node<N>,
    label: E,
}

impl<N, E> Edge<N, E> {
    /// Edge from `parent` to `child` carrying `label`.
    pub fn new(parent: Node<N>, child: Node<N>, label: E) -> Self {
        Self {
            parent,
            child,
            label,
        }
    }

    /// Build an edge straight from endpoint values.
    pub fn between(parent: N, child: N, label: E) -> Self {
        Self::new(Node::new(parent), Node::new(child), label)
    }

    /// Source node (the edge leaves here).
    pub fn parent(&self) -> &Node<N> {
        &self.parent
    }

    /// Destination node (the edge arrives here).
    pub fn child(&self) -> &Node<N> {
        &self.child
    }

    /// Edge label, e.g. a traversal cost.
    pub fn label(&self) -> &E {
        &self.label
    }
}

/// A mutable directed graph with labeled edges and set semantics.
///
/// The graph stores:
/// - All nodes in a vector (insertion order), with a reverse index for O(1) lookup.
/// - All edges in a set for O(1) membership.
/// - Per-node outgoing adjacency, indexed like `nodes`, in edge insertion order.
///
/// An edge is only accepted when both of its endpoints are already nodes;
/// otherwise `add_edge` silently does nothing. Nothing is ever removed.
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    pub(crate) nodes: Vec<Node<N>>,
    pub(crate) node_index: HashMap<Node<N>, usize>,
    pub(crate) edges: HashSet<Edge<N, E>>,
    /// `outgoing[i]` holds the edges whose parent is `nodes[i]`.
    pub(crate) outgoing: Vec<Vec<Edge<N, E>>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::new(),
            edges: HashSet::new(),
            outgoing: Vec::new(),
        }
    }
}

impl<N, E> Graph<N, E>
where
    N: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: Node<N>) -> bool {
        if self.node_index.contains_key(&node) {
            return false;
        }
        let idx = self.nodes.len();
        self.node_index.insert(node.clone(), idx);
        self.nodes.push(node);
        self.outgoing.push(Vec::new());
        self.debug_check();
        true
    }

    pub fn add_node_value(&mut self, value: N) -> bool {
        self.add_node(Node::new(value))
    }

    /// Insert an edge.
    ///
    /// Returns `true` only if the edge was newly inserted. An edge whose parent
    /// or child is not a node of this graph is ignored, as is a duplicate.
    pub fn add_edge(&mut self, edge: Edge<N, E>) -> bool {
        let Some(&parent_idx) = self.node_index.get(edge.parent()) else {
            return false;
        };
        if !self.node_index.contains_key(edge.child()) {
            return false;
        }
        if !self.edges.insert(edge.clone()) {
            return false;
        }
        self.outgoing[parent_idx].push(edge);
        self.debug_check();
        true
    }

    pub fn add_edge_between(&mut self, parent: N, child: N, label: E) -> bool {
        self.add_edge(Edge::between(parent, child, label))
    }

    pub fn contains_node(&self, node: &Node<N>) -> bool {
        self.node_index.contains_key(node)
    }

    pub fn contains_value(&self, value: &N) -> bool {
        self.node_index.contains_key(value)
    }

    pub fn contains_edge(&self, edge: &Edge<N, E>) -> bool {
        self.edges.contains(edge)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All edges leaving `parent`. Empty for unknown nodes.
    pub fn outgoing_edges(&self, parent: &Node<N>) -> &[Edge<N, E>] {
        self.outgoing_of(parent.value())
    }

    /// `(child, label)` pairs for every edge leaving `parent`.
    pub fn children<'a>(
        &'a self,
        parent: &N,
    ) -> impl Iterator<Item = (&'a N, &'a E)> + use<'a, N, E> {
        self.outgoing_of(parent)
            .iter()
            .map(|e| (e.child().value(), e.label()))
    }

    /// All nodes, in insertion order.
    pub fn all_nodes(&self) -> &[Node<N>] {
        &self.nodes
    }

    /// All edges, grouped by parent in node insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N, E>> {
        self.outgoing.iter().flatten()
    }

    fn outgoing_of(&self, parent: &N) -> &[Edge<N, E>] {
        match self.node_index.get(parent) {
            Some(&idx) => &self.outgoing[idx],
            None => &[],
        }
    }

    /// Check every representation invariant. O(V + E).
    pub fn validate(&self) -> Result<(), GraphError>
    where
        N: std::fmt::Debug,
        E: std::fmt::Debug,
    {
        validate::validate_graph(self)
    }

    // Cheap structural check; the full walk lives in `validate`.
    #[inline]
    fn debug_check(&self) {
        debug_assert_eq!(self.nodes.len(), self.node_index.len());
        debug_assert_eq!(self.nodes.len(), self.outgoing.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Graph<&'static str, u32> {
        let mut g = Graph::new();
        for n in ["A", "B", "C"] {
            g.add_node_value(n);
        }
        g
    }

    #[test]
    fn node_equality_is_value_equality() {
        assert_eq!(Node::new("1"), Node::new("1"));
        assert_ne!(Node::new("1"), Node::new("2"));
        assert_eq!(Node::from(7_u8).into_value(), 7);
    }

    #[test]
    fn edge_equality_covers_label() {
        let e1 = Edge::between("1", "1", "1");
        let e2 = Edge::between("1", "1", "2");
        assert_eq!(e1, Edge::between("1", "1", "1"));
        assert_ne!(e1, e2);
        assert_eq!(e1.parent().value(), &"1");
        assert_eq!(e2.label(), &"2");
    }

    #[test]
    fn readding_node_is_noop() {
        let mut g = abc();
        assert!(!g.add_node_value("A"));
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn dangling_edge_is_ignored() {
        let mut g = abc();
        let e = Edge::between("A", "Z", 1);
        assert!(!g.add_edge(e.clone()));
        assert!(!g.contains_edge(&e));
        assert!(!g.add_edge_between("Z", "A", 1));
        assert_eq!(g.edge_count(), 0);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn outgoing_edges_for_unknown_node_is_empty() {
        let g = abc();
        assert!(g.outgoing_edges(&Node::new("Z")).is_empty());
        assert!(g.outgoing_edges(&Node::new("A")).is_empty());
    }

    #[test]
    fn children_in_insertion_order() {
        let mut g = abc();
        g.add_edge_between("A", "C", 10);
        g.add_edge_between("A", "B", 2);
        g.add_edge_between("A", "B", 4);
        let kids: Vec<_> = g.children(&"A").map(|(c, l)| (*c, *l)).collect();
        assert_eq!(kids, vec![("C", 10), ("B", 2), ("B", 4)]);
    }

    #[test]
    fn all_nodes_in_insertion_order() {
        let g = abc();
        let vals: Vec<_> = g.all_nodes().iter().map(|n| *n.value()).collect();
        assert_eq!(vals, vec!["A", "B", "C"]);
    }
}
